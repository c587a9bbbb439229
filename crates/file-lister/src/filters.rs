use fm_domain::ListQuery;

/// 遍历过程中单个节点出现 IO 错误时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeErrorPolicy {
    /// 跳过该节点继续遍历（默认）
    #[default]
    Skip,
    /// 将错误返回给调用方，终止本次列举
    Abort,
}

/// 列举过滤器：目录是否返回 + 名称包含匹配
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    pub include_dirs: bool,
    /// 已转小写的过滤关键字，空串表示不过滤
    needle: String,
    pub on_node_error: NodeErrorPolicy,
}

impl EntryFilter {
    pub fn new(include_dirs: bool, filter_text: &str) -> Self {
        Self {
            include_dirs,
            needle: filter_text.trim().to_lowercase(),
            on_node_error: NodeErrorPolicy::Skip,
        }
    }

    pub fn from_query(query: &ListQuery) -> Self {
        Self::new(query.include_dirs, &query.filter_text)
    }

    /// 元数据读取之前即可判断的部分：目录策略与名称过滤
    pub fn accepts(&self, name: &str, is_dir: bool) -> bool {
        if is_dir && !self.include_dirs {
            return false;
        }
        self.needle.is_empty() || name.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_is_case_insensitive() {
        let filter = EntryFilter::new(false, "img");
        assert!(filter.accepts("IMG_001.png", false));
        assert!(filter.accepts("holiday-Img.jpg", false));
        assert!(!filter.accepts("notes.txt", false));
    }

    #[test]
    fn test_filter_text_is_trimmed() {
        let filter = EntryFilter::new(false, "  Report ");
        assert_eq!(filter.needle, "report");
        assert!(filter.accepts("q3-REPORT.pdf", false));
    }

    #[test]
    fn test_directory_policy_applies_before_name() {
        let filter = EntryFilter::new(false, "");
        assert!(!filter.accepts("photos", true));
        assert!(filter.accepts("photo.jpg", false));

        let filter = EntryFilter::new(true, "pho");
        assert!(filter.accepts("photos", true));
        assert!(!filter.accepts("music", true));
    }
}
