//! 日志输出模块
//!
//! 把结构化的日志记录渲染为适合终端阅读的多行文本。
//!
//! # 特性
//!
//! - 错误参数的调用栈美化
//! - 对象参数输出为缩进 JSON，其他值可着色输出
//! - 可替换的输出目标：ConsoleSink、WriterSink、MemorySink
//! - 对接 `log` 门面
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use reporterx::log::*;
//! use std::sync::Arc;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = BasicReporterConfig::from_json5(r#"{ colors: true }"#)?;
//!     let reporter = BasicReporter::new(config, Arc::new(ConsoleSink::stdout()))?;
//!
//!     reporter.log(
//!         &LogRecord::new()
//!             .with_type("info")
//!             .with_tag("http")
//!             .with_message("listening")
//!             .with_arg(8080),
//!     )?;
//!
//!     Ok(())
//! }
//! ```

pub mod bridge;
pub mod error;
pub mod log_record;
pub mod platform;
pub mod reporter;
pub mod sink;

// 重新导出核心类型
pub use bridge::{init, ReporterLogger};
pub use error::ReporterError;
pub use log_record::{ErrorArg, LogArg, LogRecord};
pub use platform::{Platform, CLEAR_ANSI, CLEAR_WINDOWS};
pub use reporter::{
    format_stack, parse_stack, BasicReporter, BasicReporterConfig, DisplayFields, LogReporter,
    STACK_SUFFIX,
};
pub use sink::{ConsoleSink, ConsoleSinkConfig, LogSink, MemorySink, Target, WriterSink};
