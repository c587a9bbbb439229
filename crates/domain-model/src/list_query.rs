use serde::{Deserialize, Serialize};

/// 排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum SortKey {
    #[default]
    Name,
    Size,
    ModifiedAt,
}

impl SortKey {
    /// 宽松解析：大小写不敏感，未识别的值回退到 `Name`
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "size" => SortKey::Size,
            "mtime" | "modtime" | "modifiedat" => SortKey::ModifiedAt,
            _ => SortKey::Name,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Size => "size",
            SortKey::ModifiedAt => "mtime",
        }
    }
}

impl From<Option<String>> for SortKey {
    fn from(raw: Option<String>) -> Self {
        raw.as_deref().map(SortKey::parse).unwrap_or_default()
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

/// 列举请求
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub dir: String,
    #[serde(default)]
    pub recursive: bool,
    #[serde(default)]
    pub include_dirs: bool,
    /// 名称包含过滤（不区分大小写），空串表示不过滤
    #[serde(default)]
    pub filter_text: String,
    #[serde(default)]
    pub sort_by: SortKey,
    #[serde(default)]
    pub desc: bool,
}

impl ListQuery {
    pub fn new(dir: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }
}
