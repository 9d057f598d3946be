use anyhow::Result;

/// 日志输出目标 trait
///
/// 只负责把文本追加到目标介质，不做格式化
pub trait LogSink: Send + Sync {
    /// 追加文本
    fn write(&self, data: &str) -> Result<()>;

    /// 刷新缓冲区（默认实现为空操作）
    fn flush(&self) -> Result<()> {
        Ok(())
    }
}
