//! 单文件复制：存在性检查、创建/截断目标、流式写入并落盘，失败时清理半截文件。

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use fm_common::{FileManagerError, DEFAULT_COPY_BUFFER_SIZE};
use log::{debug, warn};

/// 单文件复制参数
#[derive(Debug, Clone, Copy)]
pub struct FileCopyOptions {
    /// 目标已存在时是否允许截断覆盖
    pub overwrite: bool,
    pub buffer_size: usize,
}

impl Default for FileCopyOptions {
    fn default() -> Self {
        Self {
            overwrite: false,
            buffer_size: DEFAULT_COPY_BUFFER_SIZE,
        }
    }
}

/// 目标文件名：`new_name` 非空则使用它，否则取源文件名。
/// 名称必须是单个普通路径分量，目标不能逃出目标目录。
fn destination_name(src: &Path, new_name: Option<&str>) -> Result<OsString, FileManagerError> {
    match new_name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => {
            if name == "." || name == ".." || name.contains(|c: char| c == '/' || c == '\\') {
                return Err(FileManagerError::InvalidArgument(format!(
                    "newName must be a plain file name: {:?}",
                    name
                )));
            }
            Ok(OsString::from(name))
        }
        None => src.file_name().map(|n| n.to_os_string()).ok_or_else(|| {
            FileManagerError::InvalidArgument(format!(
                "source has no file name: {}",
                src.display()
            ))
        }),
    }
}

/// 同一 inode（含硬链接）视为同一文件
#[cfg(unix)]
fn is_same_file(src: &Path, dest: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(src), fs::metadata(dest)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_file(src: &Path, dest: &Path) -> bool {
    match (fs::canonicalize(src), fs::canonicalize(dest)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// 不允许覆盖：create_new，目标出现即报 AlreadyExists；允许覆盖：创建或截断
fn open_destination(dest: &Path, overwrite: bool) -> Result<File, FileManagerError> {
    if overwrite {
        return File::create(dest).map_err(FileManagerError::Io);
    }
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest)
        .map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                FileManagerError::AlreadyExists(dest.to_path_buf())
            } else {
                FileManagerError::Io(e)
            }
        })
}

fn remove_partial(dest: &Path) {
    if let Err(e) = fs::remove_file(dest) {
        if e.kind() != io::ErrorKind::NotFound {
            warn!("failed to remove partial file {}: {}", dest.display(), e);
        }
    }
}

/// 把 `reader` 的全部字节写入已打开的目标文件并 fsync。
/// 任一步失败都会删除目标文件，返回原始 IO 错误。
pub(crate) fn stream_into<R: Read>(
    mut reader: R,
    mut out: File,
    dest: &Path,
) -> Result<u64, FileManagerError> {
    let result = io::copy(&mut reader, &mut out).and_then(|written| {
        out.flush()?;
        out.sync_all()?;
        Ok(written)
    });
    drop(out);

    match result {
        Ok(written) => Ok(written),
        Err(e) => {
            remove_partial(dest);
            Err(FileManagerError::Io(e))
        }
    }
}

/// 复制单个文件到 `dest_dir`，返回目标路径
pub fn copy_one_file(
    src: &Path,
    dest_dir: &Path,
    new_name: Option<&str>,
    options: FileCopyOptions,
) -> Result<PathBuf, FileManagerError> {
    let meta = fs::metadata(src).map_err(|e| FileManagerError::at_path(src, e))?;
    if meta.is_dir() {
        return Err(FileManagerError::InvalidOperation(format!(
            "directory copy is not supported: {}",
            src.display()
        )));
    }

    let dest = dest_dir.join(destination_name(src, new_name)?);

    if !options.overwrite && fs::symlink_metadata(&dest).is_ok() {
        return Err(FileManagerError::AlreadyExists(dest));
    }
    if options.overwrite && is_same_file(src, &dest) {
        return Err(FileManagerError::InvalidOperation(format!(
            "source and destination are the same file: {}",
            dest.display()
        )));
    }

    let input = File::open(src).map_err(|e| FileManagerError::at_path(src, e))?;
    let out = open_destination(&dest, options.overwrite)?;
    let reader = BufReader::with_capacity(options.buffer_size.max(1), input);
    let written = stream_into(reader, out, &dest)?;

    debug!(
        "copied {} -> {} ({} bytes)",
        src.display(),
        dest.display(),
        written
    );
    Ok(dest)
}
