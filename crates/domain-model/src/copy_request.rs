use serde::{Deserialize, Serialize};

/// 待复制的单个文件，`order` 由前端决定执行顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyItem {
    pub src: String,
    #[serde(default)]
    pub order: i64,
    /// 为空时使用源文件名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
}

impl CopyItem {
    pub fn new(src: impl Into<String>, order: i64) -> Self {
        Self {
            src: src.into(),
            order,
            new_name: None,
        }
    }

    pub fn renamed(mut self, new_name: impl Into<String>) -> Self {
        self.new_name = Some(new_name.into());
        self
    }
}

/// 批量复制请求
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyRequest {
    pub dest: String,
    #[serde(default)]
    pub overwrite: bool,
    #[serde(default)]
    pub items: Vec<CopyItem>,
}

/// 批量复制结果，成功或失败都会返回
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopySummary {
    pub total: usize,
    pub copied: usize,
    /// 出错时对应的源路径
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_at: Option<String>,
}
