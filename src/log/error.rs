use thiserror::Error;

/// 日志输出相关错误
#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("invalid time format: {0}")]
    InvalidTimeFormat(String),
    #[error("failed to serialize log argument: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("log sink lock poisoned")]
    SinkPoisoned,
    #[error("a logger is already installed for the log facade")]
    LoggerInstalled,
    #[error("invalid reporter config: {0}")]
    Config(String),
}
