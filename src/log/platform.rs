use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 不支持 "清除回滚缓冲区" 的终端使用的清屏序列：清屏 + 光标归位
pub const CLEAR_WINDOWS: &str = "\x1B[2J\x1B[0f";

/// ANSI 终端清屏序列：清屏 + 清除回滚缓冲区 + 光标归位
pub const CLEAR_ANSI: &str = "\x1B[2J\x1B[3J\x1B[H";

/// 终端平台
///
/// 清屏序列根据宿主平台选择，不与终端协商
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Ansi,
}

impl Platform {
    /// 当前宿主平台
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Ansi
        }
    }

    pub fn clear_sequence(self) -> &'static str {
        match self {
            Platform::Windows => CLEAR_WINDOWS,
            Platform::Ansi => CLEAR_ANSI,
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::current()
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "windows" | "win32" => Ok(Platform::Windows),
            "ansi" => Ok(Platform::Ansi),
            _ => Err(format!("invalid platform: {}", s)),
        }
    }
}
