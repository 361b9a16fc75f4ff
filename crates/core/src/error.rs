use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// 配置错误：在任何生成工作开始之前返回给调用方
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid darkMode value: {0}")]
    DarkMode(String),

    #[error("invalid theme value at `theme.{path}`: {reason}")]
    Theme { path: String, reason: String },

    #[error("invalid content pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },

    #[error("unknown plugin '{0}'")]
    UnknownPlugin(String),

    #[error("plugin '{name}' rejected its options: {reason}")]
    PluginOptions { name: String, reason: String },
}

/// 协作式取消
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("generation cancelled")]
pub struct CancelledError;

/// `generate` / `regenerate` 唯一会返回的错误
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cancelled(#[from] CancelledError),
}

impl GenerateError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, GenerateError::Cancelled(_))
    }
}

/// 扫描警告：记录后继续扫描其余文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanWarning {
    /// 文件路径或 glob 模式
    pub target: String,
    pub kind: ScanWarningKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanWarningKind {
    /// 文件无法读取（附带原因）
    Unreadable(String),
    /// glob 模式没有匹配任何文件
    NoMatches,
    /// 增量构建中指定的文件不存在
    Missing,
}

impl ScanWarning {
    pub fn unreadable(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            kind: ScanWarningKind::Unreadable(reason.into()),
        }
    }

    pub fn no_matches(pattern: impl Into<String>) -> Self {
        Self {
            target: pattern.into(),
            kind: ScanWarningKind::NoMatches,
        }
    }

    pub fn missing(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            kind: ScanWarningKind::Missing,
        }
    }
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ScanWarningKind::Unreadable(reason) => {
                write!(f, "skipped unreadable file {}: {}", self.target, reason)
            }
            ScanWarningKind::NoMatches => {
                write!(f, "content pattern '{}' matched no files", self.target)
            }
            ScanWarningKind::Missing => write!(f, "changed file {} no longer exists", self.target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_error_from_cancelled() {
        let err: GenerateError = CancelledError.into();
        assert!(err.is_cancelled());
        assert_eq!(err.to_string(), "generation cancelled");
    }

    #[test]
    fn test_generate_error_from_config() {
        let err: GenerateError = ConfigError::UnknownPlugin("forms".to_string()).into();
        assert!(!err.is_cancelled());
        assert_eq!(err.to_string(), "unknown plugin 'forms'");
    }

    #[test]
    fn test_scan_warning_display() {
        let warning = ScanWarning::unreadable("src/a.html", "permission denied");
        assert_eq!(
            warning.to_string(),
            "skipped unreadable file src/a.html: permission denied"
        );
        assert_eq!(
            ScanWarning::no_matches("./templates/**/*.html").to_string(),
            "content pattern './templates/**/*.html' matched no files"
        );
    }
}
