use anyhow::Result;
use chrono::{DateTime, Local};
use serde_json::Value;
use std::backtrace::BacktraceStatus;

/// 错误类参数，携带消息和调用栈文本
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorArg {
    /// 错误消息（可能为空）
    pub message: Option<String>,
    /// 原始调用栈文本，每行一帧
    pub stack: String,
}

impl ErrorArg {
    pub fn new(message: impl Into<String>, stack: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            stack: stack.into(),
        }
    }

    /// 只有调用栈、没有消息的错误
    pub fn from_stack(stack: impl Into<String>) -> Self {
        Self {
            message: None,
            stack: stack.into(),
        }
    }

    /// 从标准库错误构造，错误链中的每个 source 作为一帧 `at <cause>`
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let message = err.to_string();
        let mut stack = format!("Error: {}", message);
        let mut source = err.source();
        while let Some(cause) = source {
            stack.push_str("\n    at ");
            stack.push_str(&cause.to_string());
            source = cause.source();
        }
        Self {
            message: Some(message),
            stack,
        }
    }

    /// 从 anyhow::Error 构造，附带已捕获的 backtrace
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        let message = err.to_string();
        let mut stack = format!("Error: {}", message);
        for cause in err.chain().skip(1) {
            stack.push_str("\n    at ");
            stack.push_str(&cause.to_string());
        }

        let backtrace = err.backtrace();
        if backtrace.status() == BacktraceStatus::Captured {
            stack.push('\n');
            stack.push_str(&backtrace.to_string());
        }

        Self {
            message: Some(message),
            stack,
        }
    }
}

/// 日志参数
///
/// 普通值走通用格式化，错误值走调用栈格式化。
/// 由构造 LogRecord 的一方负责打标签，格式化时不做运行时类型探测。
#[derive(Debug, Clone, PartialEq)]
pub enum LogArg {
    Value(Value),
    Error(ErrorArg),
}

impl LogArg {
    /// 从任意实现了 Serialize 的结构体创建参数
    ///
    /// # 示例
    ///
    /// ```ignore
    /// #[derive(Serialize)]
    /// struct Request {
    ///     method: String,
    ///     path: String,
    /// }
    ///
    /// let arg = LogArg::from_struct(Request { method: "GET".into(), path: "/".into() })?;
    /// ```
    pub fn from_struct<T: serde::Serialize>(value: T) -> Result<Self> {
        let value = serde_json::to_value(value)
            .map_err(crate::log::error::ReporterError::from)?;
        Ok(LogArg::Value(value))
    }
}

impl From<Value> for LogArg {
    fn from(v: Value) -> Self {
        LogArg::Value(v)
    }
}

impl From<ErrorArg> for LogArg {
    fn from(e: ErrorArg) -> Self {
        LogArg::Error(e)
    }
}

impl From<&anyhow::Error> for LogArg {
    fn from(e: &anyhow::Error) -> Self {
        LogArg::Error(ErrorArg::from_anyhow(e))
    }
}

impl From<String> for LogArg {
    fn from(s: String) -> Self {
        LogArg::Value(Value::String(s))
    }
}

impl From<&str> for LogArg {
    fn from(s: &str) -> Self {
        LogArg::Value(Value::String(s.to_string()))
    }
}

impl From<i64> for LogArg {
    fn from(n: i64) -> Self {
        LogArg::Value(Value::from(n))
    }
}

impl From<i32> for LogArg {
    fn from(n: i32) -> Self {
        LogArg::Value(Value::from(n))
    }
}

impl From<u64> for LogArg {
    fn from(n: u64) -> Self {
        LogArg::Value(Value::from(n))
    }
}

impl From<u32> for LogArg {
    fn from(n: u32) -> Self {
        LogArg::Value(Value::from(n))
    }
}

impl From<f64> for LogArg {
    fn from(n: f64) -> Self {
        LogArg::Value(Value::from(n))
    }
}

impl From<bool> for LogArg {
    fn from(b: bool) -> Self {
        LogArg::Value(Value::Bool(b))
    }
}

/// 日志记录
///
/// 由调用方持有，格式化过程只借用不修改
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// 日志消息
    pub message: Option<String>,
    /// 日志类型，如 "info"、"error"
    pub log_type: Option<String>,
    /// 分组标签
    pub tag: Option<String>,
    /// 时间戳
    pub date: DateTime<Local>,
    /// 附加参数，按顺序输出
    pub args: Vec<LogArg>,
}

impl Default for LogRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl LogRecord {
    /// 创建空的日志记录，时间戳为当前时间
    pub fn new() -> Self {
        Self {
            message: None,
            log_type: None,
            tag: None,
            date: Local::now(),
            args: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_type(mut self, log_type: impl Into<String>) -> Self {
        self.log_type = Some(log_type.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_date(mut self, date: DateTime<Local>) -> Self {
        self.date = date;
        self
    }

    /// 追加参数
    pub fn with_arg(mut self, arg: impl Into<LogArg>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// 追加错误参数
    pub fn with_error(mut self, message: impl Into<String>, stack: impl Into<String>) -> Self {
        self.args.push(LogArg::Error(ErrorArg::new(message, stack)));
        self
    }
}
