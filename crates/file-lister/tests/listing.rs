//! 列举行为的集成测试：平铺 / 递归、过滤、排序以及节点错误策略。

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use filetime::{set_file_mtime, FileTime};
use fm_common::AppConfig;
use fm_lister::{
    list_files, list_files_with_filter, EntryFilter, FileInfo, ListQuery, NodeErrorPolicy,
    SortKey,
};

fn write_file(path: &Path, len: usize) {
    File::create(path)
        .unwrap()
        .write_all(&vec![b'x'; len])
        .unwrap();
}

/// root/
///   IMG_001.png (3)
///   notes.txt (10)
///   photos/
///     img_002.jpg (7)
///     deep/
///       readme.md (1)
fn create_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    let root = dir.path();
    fs::create_dir_all(root.join("photos").join("deep")).unwrap();
    write_file(&root.join("IMG_001.png"), 3);
    write_file(&root.join("notes.txt"), 10);
    write_file(&root.join("photos").join("img_002.jpg"), 7);
    write_file(&root.join("photos").join("deep").join("readme.md"), 1);
    dir
}

fn query(root: &Path) -> ListQuery {
    ListQuery::new(root.to_string_lossy().to_string())
}

fn rel_paths(out: &[FileInfo]) -> Vec<String> {
    let mut v: Vec<_> = out
        .iter()
        .map(|e| e.rel_path.replace('\\', "/"))
        .collect();
    v.sort();
    v
}

#[test]
fn flat_listing_returns_only_immediate_children() {
    let dir = create_tree();
    let mut q = query(dir.path());
    q.include_dirs = true;

    let out = list_files(&q).unwrap();
    assert_eq!(rel_paths(&out), ["IMG_001.png", "notes.txt", "photos"]);
    assert!(out.iter().all(|e| Path::new(&e.full_path) != dir.path()));
}

#[test]
fn flat_listing_skips_directories_unless_requested() {
    let dir = create_tree();
    let out = list_files(&query(dir.path())).unwrap();
    assert_eq!(rel_paths(&out), ["IMG_001.png", "notes.txt"]);
}

#[test]
fn recursive_listing_is_full_closure_without_root() {
    let dir = create_tree();
    let mut q = query(dir.path());
    q.recursive = true;
    q.include_dirs = true;

    let out = list_files(&q).unwrap();
    assert_eq!(
        rel_paths(&out),
        [
            "IMG_001.png",
            "notes.txt",
            "photos",
            "photos/deep",
            "photos/deep/readme.md",
            "photos/img_002.jpg",
        ]
    );
}

#[test]
fn filter_matches_case_insensitively_in_both_modes() {
    let dir = create_tree();
    let mut q = query(dir.path());
    q.filter_text = "img".to_string();

    let flat = list_files(&q).unwrap();
    assert_eq!(rel_paths(&flat), ["IMG_001.png"]);

    q.recursive = true;
    let deep = list_files(&q).unwrap();
    assert_eq!(rel_paths(&deep), ["IMG_001.png", "photos/img_002.jpg"]);
}

#[test]
fn size_sort_ascending_and_descending() {
    let dir = create_tree();
    let mut q = query(dir.path());
    q.recursive = true;
    q.sort_by = SortKey::Size;

    let asc = list_files(&q).unwrap();
    assert!(asc.windows(2).all(|w| w[0].size <= w[1].size));
    assert_eq!(asc.first().map(|e| e.name.as_str()), Some("readme.md"));

    q.desc = true;
    let desc = list_files(&q).unwrap();
    assert!(desc.windows(2).all(|w| w[0].size >= w[1].size));
    assert_eq!(desc.first().map(|e| e.name.as_str()), Some("notes.txt"));
}

#[test]
fn mtime_sort_uses_unix_seconds() {
    let dir = create_tree();
    let root = dir.path();
    set_file_mtime(root.join("notes.txt"), FileTime::from_unix_time(1_000, 0)).unwrap();
    set_file_mtime(root.join("IMG_001.png"), FileTime::from_unix_time(2_000, 0)).unwrap();

    let mut q = query(root);
    q.sort_by = SortKey::ModifiedAt;
    let out = list_files(&q).unwrap();
    let names: Vec<_> = out.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["notes.txt", "IMG_001.png"]);
    assert_eq!(out[0].mod_time, 1_000);
    assert_eq!(out[1].mod_time, 2_000);
}

#[test]
fn file_as_root_is_an_error() {
    let dir = create_tree();
    let err = list_files(&query(&dir.path().join("notes.txt"))).unwrap_err();
    assert_eq!(err.kind().as_str(), "IOError");
}

#[cfg(unix)]
#[test]
fn unreadable_subdirectory_follows_node_error_policy() {
    use std::os::unix::fs::PermissionsExt;

    let dir = create_tree();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    write_file(&locked.join("hidden.txt"), 2);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // root 用户不受权限位限制，此时无法构造节点错误
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let mut q = query(dir.path());
    q.recursive = true;
    let out = list_files(&q);

    let mut abort = EntryFilter::from_query(&q);
    abort.on_node_error = NodeErrorPolicy::Abort;
    let aborted = list_files_with_filter(&q, &AppConfig::default(), &abort);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let out = out.expect("skip policy must not abort the walk");
    assert!(out.iter().all(|e| e.name != "hidden.txt"));
    assert!(out.iter().any(|e| e.name == "readme.md"));
    assert!(aborted.is_err());
}
