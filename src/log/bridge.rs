//! `log` 门面适配
//!
//! 把 `log::info!` 等宏产生的记录转交给报告器输出：
//! 级别作为类型，target 作为标签，格式化后的参数作为消息。
//! 不做任何级别过滤。

use crate::log::error::ReporterError;
use crate::log::log_record::LogRecord;
use crate::log::reporter::LogReporter;
use anyhow::Result;
use ::log::{LevelFilter, Log, Metadata, Record};

/// 实现 `log::Log` 的报告器包装
pub struct ReporterLogger {
    reporter: Box<dyn LogReporter>,
}

impl ReporterLogger {
    pub fn new(reporter: Box<dyn LogReporter>) -> Self {
        Self { reporter }
    }

    /// 将 `log::Record` 转换为 LogRecord
    pub fn to_record(record: &Record<'_>) -> LogRecord {
        LogRecord::new()
            .with_type(record.level().as_str().to_lowercase())
            .with_tag(record.target())
            .with_message(record.args().to_string())
    }
}

impl Log for ReporterLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        // log 门面无法返回错误，只能报告到 stderr
        if let Err(e) = self.reporter.log(&Self::to_record(record)) {
            eprintln!("failed to write log record: {:#}", e);
        }
    }

    fn flush(&self) {
        if let Err(e) = self.reporter.flush() {
            eprintln!("failed to flush log reporter: {:#}", e);
        }
    }
}

/// 安装为全局 logger
///
/// 重复安装返回 `ReporterError::LoggerInstalled`
pub fn init(reporter: Box<dyn LogReporter>) -> Result<()> {
    ::log::set_boxed_logger(Box::new(ReporterLogger::new(reporter)))
        .map_err(|_| ReporterError::LoggerInstalled)?;
    ::log::set_max_level(LevelFilter::Trace);
    Ok(())
}
