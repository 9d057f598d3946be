//! ReporterX - 终端日志渲染库
//!
//! 把结构化日志记录（消息、类型、标签、时间、参数）渲染为着色的多行文本，
//! 并同步写入输出目标。
//!
//! ## 模块
//!
//! - **log**: 日志记录、报告器、输出目标以及 `log` 门面适配
//!
//! ## 设计理念
//!
//! - 🧩 **显式依赖**: 输出目标由调用方传入，不使用全局默认值
//! - 🏷️ **显式标注**: 错误参数与普通参数在类型上区分
//! - ⚡ **同步输出**: 每次调用完成即写入，无队列、无后台线程

mod macros;

pub mod log;

// 重新导出主要的公共 API
pub use crate::log::{
    BasicReporter, BasicReporterConfig, ConsoleSink, ConsoleSinkConfig, DisplayFields, ErrorArg,
    LogArg, LogRecord, LogReporter, LogSink, MemorySink, Platform, ReporterError, WriterSink,
};
