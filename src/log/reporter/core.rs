use crate::log::log_record::LogRecord;
use anyhow::Result;

/// 日志报告器 trait
///
/// 负责将 LogRecord 渲染为文本并写入输出目标
pub trait LogReporter: Send + Sync {
    /// 输出一条日志记录
    fn log(&self, record: &LogRecord) -> Result<()>;

    /// 清空终端屏幕
    fn clear(&self) -> Result<()>;

    /// 原样写入文本
    fn write(&self, data: &str) -> Result<()>;

    /// 刷新输出目标（默认实现为空操作）
    fn flush(&self) -> Result<()> {
        Ok(())
    }
}
