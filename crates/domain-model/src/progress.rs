use serde::{Deserialize, Serialize};

/// 复制进度事件的主题名
pub const COPY_PROGRESS_TOPIC: &str = "copy:progress";

/// 单个复制条目的生命周期阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyStage {
    Start,
    Done,
    Error,
}

/// 复制进度事件，同步发出、不保留
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub stage: CopyStage,
    /// 从 1 开始的序号（按 order 排序之后的位置）
    pub index: usize,
    pub total: usize,
    pub src: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_event_payload_shape() {
        let event = ProgressEvent {
            stage: CopyStage::Error,
            index: 2,
            total: 3,
            src: "/src/b.bin".to_string(),
            message: "boom".to_string(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["stage"], "error");
        assert_eq!(value["index"], 2);
        assert_eq!(value["total"], 3);
        assert_eq!(value["src"], "/src/b.bin");
        assert_eq!(value["message"], "boom");
    }
}
