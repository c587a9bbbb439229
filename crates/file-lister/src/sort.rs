use std::cmp::Ordering;

use fm_domain::{FileInfo, SortKey};

fn compare(a: &FileInfo, b: &FileInfo, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Size => a.size.cmp(&b.size),
        SortKey::ModifiedAt => a.mod_time.cmp(&b.mod_time),
    }
}

/// 稳定排序；降序时只反转比较结果，相等元素保持原有先后
pub fn sort_entries(entries: &mut [FileInfo], key: SortKey, desc: bool) {
    entries.sort_by(|a, b| {
        let ord = compare(a, b, key);
        if desc {
            ord.reverse()
        } else {
            ord
        }
    });
}
