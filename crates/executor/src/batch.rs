//! 按 order 严格顺序执行的批量复制，遇到第一个失败即停止。

use std::fs;
use std::path::{Path, PathBuf};

use fm_common::{AppConfig, FileManagerError};
use fm_domain::{CopyItem, CopyRequest, CopyStage, CopySummary, ProgressEvent, COPY_PROGRESS_TOPIC};
use log::{debug, info, warn};
use thiserror::Error;

use crate::cancel::CancelFlag;
use crate::copy::{copy_one_file, FileCopyOptions};
use crate::sink::ProgressSink;

const MSG_STARTED: &str = "copy started";
const MSG_DONE: &str = "copy finished";

/// 批量复制失败：携带失败前已累计的结果
#[derive(Error, Debug)]
#[error("{source}")]
pub struct CopyBatchError {
    pub summary: CopySummary,
    pub source: FileManagerError,
}

impl CopyBatchError {
    fn new(summary: CopySummary, source: FileManagerError) -> Self {
        Self { summary, source }
    }
}

/// 顺序复制器，进度通过注入的 `ProgressSink` 发出
pub struct OrderedCopier<'a> {
    sink: &'a dyn ProgressSink,
    cancel: Option<CancelFlag>,
    buffer_size: usize,
}

impl<'a> OrderedCopier<'a> {
    pub fn new(sink: &'a dyn ProgressSink) -> Self {
        Self {
            sink,
            cancel: None,
            buffer_size: AppConfig::default().copy_buffer_size,
        }
    }

    pub fn with_config(mut self, config: &AppConfig) -> Self {
        self.buffer_size = config.copy_buffer_size;
        self
    }

    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = Some(cancel);
        self
    }

    fn emit(&self, stage: CopyStage, index: usize, total: usize, src: &str, message: String) {
        let event = ProgressEvent {
            stage,
            index,
            total,
            src: src.to_string(),
            message,
        };
        self.sink.emit(COPY_PROGRESS_TOPIC, &event);
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled)
    }

    pub fn copy_all(&self, request: &CopyRequest) -> Result<CopySummary, CopyBatchError> {
        let dest = request.dest.trim();
        if dest.is_empty() {
            return Err(CopyBatchError::new(
                CopySummary::default(),
                FileManagerError::InvalidArgument("dest must not be empty".to_string()),
            ));
        }
        if request.items.is_empty() {
            return Err(CopyBatchError::new(
                CopySummary::default(),
                FileManagerError::InvalidArgument("items must not be empty".to_string()),
            ));
        }

        let dest_dir = PathBuf::from(dest);
        fs::create_dir_all(&dest_dir)
            .map_err(|e| CopyBatchError::new(CopySummary::default(), FileManagerError::Io(e)))?;

        // 稳定排序：order 相同的条目保持请求中的先后
        let mut items: Vec<&CopyItem> = request.items.iter().collect();
        items.sort_by_key(|item| item.order);

        let total = items.len();
        let mut summary = CopySummary {
            total,
            copied: 0,
            failed_at: None,
        };
        let options = FileCopyOptions {
            overwrite: request.overwrite,
            buffer_size: self.buffer_size,
        };
        info!(
            "copy batch start: {} items -> {} (overwrite: {})",
            total,
            dest_dir.display(),
            request.overwrite
        );

        for (idx, item) in items.into_iter().enumerate() {
            if self.is_cancelled() {
                info!("copy batch cancelled after {} of {} items", summary.copied, total);
                return Err(CopyBatchError::new(summary, FileManagerError::Cancelled));
            }

            let src = item.src.trim();
            if src.is_empty() {
                debug!("skip item #{} with empty src", idx + 1);
                continue;
            }
            let index = idx + 1;

            self.emit(CopyStage::Start, index, total, src, MSG_STARTED.to_string());
            match copy_one_file(Path::new(src), &dest_dir, item.new_name.as_deref(), options) {
                Ok(_) => {
                    summary.copied += 1;
                    self.emit(CopyStage::Done, index, total, src, MSG_DONE.to_string());
                }
                Err(err) => {
                    warn!("copy #{} failed for {}: {}", index, src, err);
                    summary.failed_at = Some(src.to_string());
                    self.emit(CopyStage::Error, index, total, src, err.to_string());
                    return Err(CopyBatchError::new(summary, err));
                }
            }
        }

        info!("copy batch done: {}/{} copied", summary.copied, total);
        Ok(summary)
    }
}

/// 使用默认配置执行一次批量复制
pub fn copy_all(
    request: &CopyRequest,
    sink: &dyn ProgressSink,
) -> Result<CopySummary, CopyBatchError> {
    OrderedCopier::new(sink).copy_all(request)
}
