use serde::{Deserialize, Serialize};

/// 列举结果中的单个条目，字段名与前端保持一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub name: String,
    pub full_path: String,
    /// 相对于查询根目录的路径
    pub rel_path: String,
    pub is_dir: bool,
    pub size: u64,
    /// Unix 时间戳（秒），最近修改时间；早于 1970 的时间为负数
    pub mod_time: i64,
}
