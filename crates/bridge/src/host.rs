use std::io;
use std::path::PathBuf;

use fm_domain::ProgressEvent;
use fm_executor::ProgressSink;
use log::warn;
use serde_json::Value;

/// 宿主事件总线：把 JSON 负载按主题推给前端
pub trait EventEmitter: Send + Sync {
    fn emit(&self, topic: &str, payload: Value);
}

impl<F> EventEmitter for F
where
    F: Fn(&str, Value) + Send + Sync,
{
    fn emit(&self, topic: &str, payload: Value) {
        self(topic, payload)
    }
}

/// 宿主目录选择对话框。`Ok(None)` 表示用户取消，不算错误
pub trait DirectoryPicker: Send + Sync {
    fn choose_directory(&self, title: &str) -> io::Result<Option<PathBuf>>;
}

/// 没有对话框能力的宿主（测试、无界面环境）：永远视为取消
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDialog;

impl DirectoryPicker for NoDialog {
    fn choose_directory(&self, _title: &str) -> io::Result<Option<PathBuf>> {
        Ok(None)
    }
}

/// 复制进度 -> 宿主事件总线
pub(crate) struct EmitterSink<'a>(pub(crate) &'a dyn EventEmitter);

impl ProgressSink for EmitterSink<'_> {
    fn emit(&self, topic: &str, event: &ProgressEvent) {
        match serde_json::to_value(event) {
            Ok(payload) => self.0.emit(topic, payload),
            Err(e) => warn!("failed to encode progress event for {}: {}", event.src, e),
        }
    }
}
