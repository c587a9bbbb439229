use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use fm_common::{AppConfig, FileManagerError};
use fm_domain::{FileInfo, ListQuery};
use log::debug;
use walkdir::WalkDir;

use crate::filters::{EntryFilter, NodeErrorPolicy};
use crate::sort::sort_entries;

/// 规范化路径（支持正斜杠、去除首尾空白）
fn normalize_path(path: &str) -> PathBuf {
    let s = path.trim();
    #[cfg(windows)]
    let s = s.replace('/', "\\");
    PathBuf::from(s)
}

fn unix_seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        // 向下取整：-90.5 秒记为 -91
        Err(e) => {
            let before = e.duration();
            let secs = -(before.as_secs() as i64);
            if before.subsec_nanos() > 0 {
                secs - 1
            } else {
                secs
            }
        }
    }
}

/// 按过滤器判断后读取元数据并构造条目；元数据拿不到时返回 None（跳过该条目）
fn build_entry(
    root: &Path,
    path: &Path,
    name: &str,
    is_dir: bool,
    metadata: impl FnOnce() -> Option<fs::Metadata>,
    filter: &EntryFilter,
) -> Option<FileInfo> {
    if !filter.accepts(name, is_dir) {
        return None;
    }

    let Some(meta) = metadata() else {
        debug!("skip entry without metadata: {}", path.display());
        return None;
    };
    let Ok(modified) = meta.modified() else {
        debug!("skip entry without modification time: {}", path.display());
        return None;
    };

    let rel_path = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string();

    Some(FileInfo {
        name: name.to_string(),
        full_path: path.to_string_lossy().to_string(),
        rel_path,
        is_dir,
        size: meta.len(),
        mod_time: unix_seconds(modified),
    })
}

fn list_flat(
    root: &Path,
    filter: &EntryFilter,
) -> Result<Vec<FileInfo>, FileManagerError> {
    let read = fs::read_dir(root).map_err(|e| FileManagerError::at_path(root, e))?;

    let mut children = Vec::new();
    for item in read {
        match item {
            Ok(entry) => children.push(entry),
            Err(e) => match filter.on_node_error {
                NodeErrorPolicy::Skip => debug!("skip unreadable entry in {}: {}", root.display(), e),
                NodeErrorPolicy::Abort => return Err(FileManagerError::Io(e)),
            },
        }
    }
    // 固定遍历顺序，排序时相等元素的先后才可复现
    children.sort_by_key(|e| e.file_name());

    let mut out = Vec::new();
    for entry in children {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();
        if let Some(info) = build_entry(
            root,
            &path,
            &name,
            file_type.is_dir(),
            || entry.metadata().ok(),
            filter,
        ) {
            out.push(info);
        }
    }
    Ok(out)
}

fn list_recursive(
    root: &Path,
    filter: &EntryFilter,
    max_depth: Option<usize>,
) -> Result<Vec<FileInfo>, FileManagerError> {
    // 根目录打不开属于硬错误，必须在遍历开始前暴露
    fs::read_dir(root).map_err(|e| FileManagerError::at_path(root, e))?;

    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name();
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth.max(1));
    }

    let mut out = Vec::new();
    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) => match filter.on_node_error {
                NodeErrorPolicy::Skip => {
                    debug!("skip node during walk: {}", e);
                    continue;
                }
                NodeErrorPolicy::Abort => return Err(FileManagerError::Io(e.into())),
            },
        };

        let name = entry.file_name().to_string_lossy().to_string();
        if let Some(info) = build_entry(
            root,
            entry.path(),
            &name,
            entry.file_type().is_dir(),
            || entry.metadata().ok(),
            filter,
        ) {
            out.push(info);
        }
    }
    Ok(out)
}

/// 按给定过滤器列举，供需要改变节点错误策略的调用方使用
pub fn list_files_with_filter(
    query: &ListQuery,
    config: &AppConfig,
    filter: &EntryFilter,
) -> Result<Vec<FileInfo>, FileManagerError> {
    if query.dir.trim().is_empty() {
        return Err(FileManagerError::InvalidArgument(
            "dir must not be empty".to_string(),
        ));
    }
    let root = normalize_path(&query.dir);

    let mut out = if query.recursive {
        list_recursive(&root, filter, config.scan_depth)?
    } else {
        list_flat(&root, filter)?
    };

    sort_entries(&mut out, query.sort_by, query.desc);
    debug!(
        "listed {} entries under {} (recursive: {}, sort: {}, desc: {})",
        out.len(),
        root.display(),
        query.recursive,
        query.sort_by.as_str(),
        query.desc
    );
    Ok(out)
}

/// 列举目录（使用给定配置）
pub fn list_files_with_config(
    query: &ListQuery,
    config: &AppConfig,
) -> Result<Vec<FileInfo>, FileManagerError> {
    list_files_with_filter(query, config, &EntryFilter::from_query(query))
}

/// 列举目录（默认配置）
pub fn list_files(query: &ListQuery) -> Result<Vec<FileInfo>, FileManagerError> {
    list_files_with_config(query, &AppConfig::default())
}
