use crate::log::error::ReporterError;
use crate::log::sink::LogSink;
use anyhow::Result;
use std::sync::Mutex;

#[derive(Default)]
struct Buffer {
    text: String,
    writes: usize,
}

/// 内存输出目标
///
/// 累积所有写入的文本，并记录写入次数
#[derive(Default)]
pub struct MemorySink {
    buffer: Mutex<Buffer>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前已写入的全部文本
    pub fn contents(&self) -> Result<String> {
        let buffer = self.buffer.lock().map_err(|_| ReporterError::SinkPoisoned)?;
        Ok(buffer.text.clone())
    }

    /// 取出已写入的文本并清空缓冲
    pub fn take(&self) -> Result<String> {
        let mut buffer = self.buffer.lock().map_err(|_| ReporterError::SinkPoisoned)?;
        buffer.writes = 0;
        Ok(std::mem::take(&mut buffer.text))
    }

    /// write 调用次数
    pub fn writes(&self) -> Result<usize> {
        let buffer = self.buffer.lock().map_err(|_| ReporterError::SinkPoisoned)?;
        Ok(buffer.writes)
    }
}

impl LogSink for MemorySink {
    fn write(&self, data: &str) -> Result<()> {
        let mut buffer = self.buffer.lock().map_err(|_| ReporterError::SinkPoisoned)?;
        buffer.text.push_str(data);
        buffer.writes += 1;
        Ok(())
    }
}
