use crate::error::{FileManagerError, Result};

/// 复制时读缓冲区的默认大小（字节）
pub const DEFAULT_COPY_BUFFER_SIZE: usize = 64 * 1024;

const ENV_SCAN_DEPTH: &str = "FM_SCAN_DEPTH";
const ENV_COPY_BUFFER_SIZE: &str = "FM_COPY_BUFFER_SIZE";
const ENV_LOG: &str = "FM_LOG";

/// 应用配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 递归列举的最大深度，`None` 表示不限制
    pub scan_depth: Option<usize>,
    pub copy_buffer_size: usize,
    /// env_logger 过滤表达式，例如 `info` 或 `fm_executor=debug`
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scan_depth: None,
            copy_buffer_size: DEFAULT_COPY_BUFFER_SIZE,
            log_filter: None,
        }
    }
}

impl AppConfig {
    /// 从环境变量读取配置，未设置的项使用默认值
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = non_empty(lookup(ENV_SCAN_DEPTH)) {
            let depth = parse_usize(ENV_SCAN_DEPTH, &raw)?;
            config.scan_depth = Some(depth);
        }
        if let Some(raw) = non_empty(lookup(ENV_COPY_BUFFER_SIZE)) {
            let size = parse_usize(ENV_COPY_BUFFER_SIZE, &raw)?;
            if size == 0 {
                return Err(FileManagerError::Config(format!(
                    "{} must be greater than zero",
                    ENV_COPY_BUFFER_SIZE
                )));
            }
            config.copy_buffer_size = size;
        }
        config.log_filter = non_empty(lookup(ENV_LOG));

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_usize(key: &str, raw: &str) -> Result<usize> {
    raw.parse::<usize>()
        .map_err(|e| FileManagerError::Config(format!("{}={:?}: {}", key, raw, e)))
}
