use fm_common::{ErrorKind, FileManagerError};
use fm_domain::CopySummary;
use fm_executor::CopyBatchError;
use serde::{Deserialize, Serialize};

/// 跨越宿主边界的错误值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandError {
    pub kind: String,
    pub message: String,
}

impl CommandError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind: kind.as_str().to_string(),
            message: message.into(),
        }
    }
}

impl From<FileManagerError> for CommandError {
    fn from(err: FileManagerError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// 复制失败：部分结果 + 错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyFailure {
    pub summary: CopySummary,
    pub error: CommandError,
}

impl From<CopyBatchError> for CopyFailure {
    fn from(err: CopyBatchError) -> Self {
        Self {
            summary: err.summary,
            error: err.source.into(),
        }
    }
}
