use crate::log::error::ReporterError;
use crate::log::sink::LogSink;
use anyhow::Result;
use std::io::Write;
use std::sync::Mutex;

/// 通用写入目标
///
/// 包装任意 `std::io::Write`，每次写入时加锁
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// 取回内部的 writer
    pub fn into_inner(self) -> Result<W> {
        Ok(self
            .writer
            .into_inner()
            .map_err(|_| ReporterError::SinkPoisoned)?)
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn write(&self, data: &str) -> Result<()> {
        let mut writer = self.writer.lock().map_err(|_| ReporterError::SinkPoisoned)?;
        writer.write_all(data.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let mut writer = self.writer.lock().map_err(|_| ReporterError::SinkPoisoned)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Seek, SeekFrom};

    #[test]
    fn test_writer_sink_vec() {
        let sink = WriterSink::new(Vec::new());

        sink.write("hello ").unwrap();
        sink.write("world\n").unwrap();
        sink.flush().unwrap();

        let bytes = sink.into_inner().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "hello world\n");
    }

    #[test]
    fn test_writer_sink_file() {
        let file = tempfile::tempfile().unwrap();
        let sink = WriterSink::new(file);

        sink.write("[INFO] persisted\n").unwrap();
        sink.flush().unwrap();

        let mut file = sink.into_inner().unwrap();
        file.seek(SeekFrom::Start(0)).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        assert_eq!(content, "[INFO] persisted\n");
    }

    #[test]
    fn test_writer_sink_propagates_io_error() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let sink = WriterSink::new(Broken);
        let err = sink.write("lost").unwrap_err();
        let io_err = err.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io_err.kind(), std::io::ErrorKind::BrokenPipe);
    }
}
