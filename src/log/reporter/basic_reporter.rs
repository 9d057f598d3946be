use crate::log::error::ReporterError;
use crate::log::log_record::{LogArg, LogRecord};
use crate::log::platform::Platform;
use crate::log::reporter::inspect::inspect;
use crate::log::reporter::stack::{self, STACK_SUFFIX};
use crate::log::reporter::LogReporter;
use crate::log::sink::LogSink;
use anyhow::Result;
use chrono::format::{Item, StrftimeItems};
use garde::Validate;
use serde::Deserialize;
use serde_json::Value;
use smart_default::SmartDefault;
use std::sync::Arc;

/// BasicReporter 配置
#[derive(Debug, Clone, Deserialize, PartialEq, SmartDefault, Validate)]
#[serde(default)]
pub struct BasicReporterConfig {
    /// 参数是否着色（运行时不支持颜色时自动退化为纯文本）
    #[default = true]
    #[garde(skip)]
    pub colors: bool,

    /// 时间格式（strftime 语法）
    #[default = "%H:%M:%S"]
    #[garde(custom(valid_time_format))]
    pub time_format: String,

    /// 决定清屏序列的平台，默认取宿主平台
    #[default(Platform::current())]
    #[garde(skip)]
    pub platform: Platform,

    /// 是否把调用栈后缀追加到渲染结果末尾
    #[default = false]
    #[garde(skip)]
    pub append_stack_suffix: bool,
}

fn valid_time_format(value: &str, _: &()) -> garde::Result {
    if StrftimeItems::new(value).any(|item| matches!(item, Item::Error)) {
        return Err(garde::Error::new(format!("invalid strftime pattern: {}", value)));
    }
    Ok(())
}

impl BasicReporterConfig {
    /// 从 JSON5（兼容 JSON）文本解析配置
    pub fn from_json5(text: &str) -> Result<Self> {
        let config: Self =
            json5::from_str(text).map_err(|e| ReporterError::Config(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    // time_format 是唯一带校验规则的字段
    fn check(&self) -> Result<()> {
        garde::Validate::validate(self)
            .map_err(|_| ReporterError::InvalidTimeFormat(self.time_format.clone()))?;
        Ok(())
    }
}

/// 一条记录渲染前的展示字段
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayFields {
    pub message: String,
    pub log_type: String,
    pub tag: String,
    pub date: String,
    pub args: Vec<String>,
}

/// 基础终端报告器
///
/// 输出格式：`[<时间>] [<TYPE>] [<tag>] <message>\n<arg1> <arg2> ...\n`，
/// 方括号字段按需省略
pub struct BasicReporter {
    config: BasicReporterConfig,
    sink: Arc<dyn LogSink>,
}

impl BasicReporter {
    pub fn new(config: BasicReporterConfig, sink: Arc<dyn LogSink>) -> Result<Self> {
        config.check()?;
        Ok(Self { config, sink })
    }

    pub fn parse_stack(&self, stack: &str) -> Vec<String> {
        stack::parse_stack(stack)
    }

    /// 格式化调用栈
    ///
    /// 后缀只在 `append_stack_suffix` 打开时追加
    pub fn format_stack(&self, stack: &str, suffix: Option<&str>) -> String {
        let mut formatted = stack::format_stack(stack);
        if self.config.append_stack_suffix {
            if let Some(suffix) = suffix {
                formatted.push_str(suffix);
            }
        }
        formatted
    }

    /// 格式化普通参数
    ///
    /// 对象输出为两空格缩进的 JSON，其余值走通用格式化
    pub fn format(&self, value: &Value) -> Result<String> {
        if value.is_object() {
            return Ok(serde_json::to_string_pretty(value).map_err(ReporterError::from)?);
        }
        Ok(inspect(value, self.config.colors))
    }

    /// 计算展示字段，不修改 record
    pub fn get_fields(&self, record: &LogRecord) -> Result<DisplayFields> {
        let mut message = record.message.clone().unwrap_or_default();
        let mut log_type = record.log_type.clone().unwrap_or_default();
        let tag = record.tag.clone().unwrap_or_default();
        let date = record.date.format(&self.config.time_format).to_string();

        let mut args = Vec::with_capacity(record.args.len());
        for arg in &record.args {
            match arg {
                LogArg::Error(err) => {
                    if message.is_empty() {
                        if let Some(err_message) = err.message.as_deref().filter(|m| !m.is_empty()) {
                            message = err_message.to_string();
                        }
                    }
                    if log_type.is_empty() {
                        log_type = "error".to_string();
                    }
                    args.push(self.format_stack(&err.stack, Some(STACK_SUFFIX)));
                }
                LogArg::Value(value) => args.push(self.format(value)?),
            }
        }

        // 没有消息时把第一个参数当作消息
        if message.is_empty() && !args.is_empty() {
            message = args.remove(0);
        }

        Ok(DisplayFields {
            message,
            log_type,
            tag,
            date,
            args,
        })
    }
}

impl LogReporter for BasicReporter {
    fn log(&self, record: &LogRecord) -> Result<()> {
        let fields = self.get_fields(record)?;

        // 时间只在有类型时输出
        if !fields.log_type.is_empty() {
            self.write(&format!("[{}] ", fields.date))?;
        }

        if !fields.log_type.is_empty() {
            self.write(&format!("[{}] ", fields.log_type.to_uppercase()))?;
        }

        if !fields.tag.is_empty() {
            self.write(&format!("[{}] ", fields.tag))?;
        }

        if !fields.message.is_empty() {
            self.write(&fields.message)?;
        }

        if !fields.args.is_empty() {
            self.write(&format!("\n{}", fields.args.join(" ")))?;
        }

        self.write("\n")
    }

    fn clear(&self) -> Result<()> {
        self.write(self.config.platform.clear_sequence())
    }

    fn write(&self, data: &str) -> Result<()> {
        self.sink.write(data)
    }

    fn flush(&self) -> Result<()> {
        self.sink.flush()
    }
}

crate::impl_box_from!(BasicReporter => dyn LogReporter);
