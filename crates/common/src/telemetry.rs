use crate::config::AppConfig;

const DEFAULT_LOG_FILTER: &str = "info";

/// 初始化 env_logger；重复调用时静默忽略（宿主可能已经装好了 logger）
pub fn init_logging(config: &AppConfig) {
    let filter = config
        .log_filter
        .as_deref()
        .unwrap_or(DEFAULT_LOG_FILTER);

    let result = env_logger::Builder::new()
        .parse_filters(filter)
        .format_timestamp_millis()
        .try_init();

    if result.is_ok() {
        log::debug!("logging initialized, filter: {}", filter);
    }
}
