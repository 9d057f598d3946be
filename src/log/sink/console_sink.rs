use crate::log::sink::LogSink;
use anyhow::Result;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::io::{self, Write};

/// 输出流
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Stdout,
    Stderr,
}

/// ConsoleSink 配置
#[derive(Debug, Clone, Deserialize, PartialEq, SmartDefault)]
#[serde(default)]
pub struct ConsoleSinkConfig {
    /// 输出到 stdout 还是 stderr
    pub target: Target,
}

/// 终端输出目标
///
/// 原样写入标准输出或标准错误，不追加换行
pub struct ConsoleSink {
    config: ConsoleSinkConfig,
}

impl ConsoleSink {
    pub fn new(config: ConsoleSinkConfig) -> Self {
        Self { config }
    }

    pub fn stdout() -> Self {
        Self::new(ConsoleSinkConfig {
            target: Target::Stdout,
        })
    }

    pub fn stderr() -> Self {
        Self::new(ConsoleSinkConfig {
            target: Target::Stderr,
        })
    }

    pub fn target(&self) -> Target {
        self.config.target
    }
}

impl LogSink for ConsoleSink {
    fn write(&self, data: &str) -> Result<()> {
        match self.config.target {
            Target::Stdout => io::stdout().lock().write_all(data.as_bytes())?,
            Target::Stderr => io::stderr().lock().write_all(data.as_bytes())?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        match self.config.target {
            Target::Stdout => io::stdout().lock().flush()?,
            Target::Stderr => io::stderr().lock().flush()?,
        }
        Ok(())
    }
}

crate::impl_from!(ConsoleSinkConfig => ConsoleSink);
crate::impl_box_from!(ConsoleSink => dyn LogSink);
