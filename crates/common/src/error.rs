use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileManagerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Destination already exists and overwrite is disabled: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Operation was cancelled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Config(String),
}

/// 错误类别，跨越宿主边界时作为稳定的字符串代码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    AlreadyExists,
    InvalidOperation,
    Io,
    Cancelled,
    Config,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::AlreadyExists => "AlreadyExists",
            ErrorKind::InvalidOperation => "InvalidOperation",
            ErrorKind::Io => "IOError",
            ErrorKind::Cancelled => "Cancelled",
            ErrorKind::Config => "Config",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FileManagerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FileManagerError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            FileManagerError::NotFound(_) => ErrorKind::NotFound,
            FileManagerError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            FileManagerError::InvalidOperation(_) => ErrorKind::InvalidOperation,
            FileManagerError::Io(_) => ErrorKind::Io,
            FileManagerError::Cancelled => ErrorKind::Cancelled,
            FileManagerError::Config(_) => ErrorKind::Config,
        }
    }

    /// 将针对某个路径的 IO 错误归类：不存在映射为 `NotFound`，其余保持 `Io`
    pub fn at_path(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            FileManagerError::NotFound(path.to_path_buf())
        } else {
            FileManagerError::Io(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, FileManagerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_at_path_maps_not_found() {
        let err = FileManagerError::at_path(
            Path::new("/missing/file"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, FileManagerError::NotFound(ref p) if p == Path::new("/missing/file")));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_at_path_keeps_other_io_errors() {
        let err = FileManagerError::at_path(
            Path::new("/locked"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.kind().as_str(), "IOError");
    }

    #[test]
    fn test_display_messages() {
        let err = FileManagerError::AlreadyExists(PathBuf::from("out.txt"));
        assert_eq!(
            err.to_string(),
            "Destination already exists and overwrite is disabled: out.txt"
        );
        assert_eq!(
            FileManagerError::InvalidArgument("dir must not be empty".into()).to_string(),
            "Invalid argument: dir must not be empty"
        );
    }
}
