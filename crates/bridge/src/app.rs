use fm_common::{init_logging, AppConfig, ErrorKind};
use fm_domain::{CopyRequest, CopySummary, FileInfo, ListQuery};
use fm_executor::{CancelFlag, OrderedCopier};
use log::{info, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::host::{DirectoryPicker, EmitterSink, EventEmitter};
use crate::response::{CommandError, CopyFailure};

pub const CMD_PICK_DIRECTORY: &str = "PickDirectory";
pub const CMD_LIST_FILES: &str = "ListFiles";
pub const CMD_COPY_FILES: &str = "CopyFiles";

#[derive(Deserialize)]
struct PickDirectoryArgs {
    #[serde(default)]
    title: String,
}

/// 前端可调用的命令集合。宿主负责把调用放到工作线程上执行
pub struct App {
    emitter: Box<dyn EventEmitter>,
    picker: Box<dyn DirectoryPicker>,
    config: AppConfig,
    cancel: CancelFlag,
}

impl App {
    pub fn new(emitter: Box<dyn EventEmitter>, picker: Box<dyn DirectoryPicker>) -> Self {
        Self::with_config(emitter, picker, AppConfig::default())
    }

    pub fn with_config(
        emitter: Box<dyn EventEmitter>,
        picker: Box<dyn DirectoryPicker>,
        config: AppConfig,
    ) -> Self {
        Self {
            emitter,
            picker,
            config,
            cancel: CancelFlag::new(),
        }
    }

    /// 读取环境变量配置并初始化日志
    pub fn from_env(
        emitter: Box<dyn EventEmitter>,
        picker: Box<dyn DirectoryPicker>,
    ) -> Result<Self, CommandError> {
        let config = AppConfig::from_env()?;
        init_logging(&config);
        Ok(Self::with_config(emitter, picker, config))
    }

    /// 目录选择对话框；用户点了取消返回空字符串
    pub fn pick_directory(&self, title: &str) -> Result<String, CommandError> {
        let chosen = self
            .picker
            .choose_directory(title)
            .map_err(|e| CommandError::new(ErrorKind::Io, e.to_string()))?;
        Ok(chosen
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default())
    }

    pub fn list_files(&self, query: ListQuery) -> Result<Vec<FileInfo>, CommandError> {
        fm_lister::list_files_with_config(&query, &self.config).map_err(|e| {
            warn!("list failed for {:?}: {}", query.dir, e);
            CommandError::from(e)
        })
    }

    /// 请求中止正在进行的复制；当前文件写完后生效
    pub fn cancel_copy(&self) {
        info!("copy cancellation requested");
        self.cancel.cancel();
    }

    pub fn copy_files(&self, request: CopyRequest) -> Result<CopySummary, CopyFailure> {
        self.cancel.reset();
        let sink = EmitterSink(self.emitter.as_ref());
        OrderedCopier::new(&sink)
            .with_config(&self.config)
            .with_cancel(self.cancel.clone())
            .copy_all(&request)
            .map_err(CopyFailure::from)
    }

    /// 按命令名分发 JSON 调用，返回值与错误都编码为 JSON
    pub fn dispatch(&self, command: &str, args: Value) -> Result<Value, Value> {
        match command {
            CMD_PICK_DIRECTORY => {
                let title = match args {
                    Value::String(title) => title,
                    Value::Null => String::new(),
                    other => parse_args::<PickDirectoryArgs>(other)?.title,
                };
                encode(self.pick_directory(&title))
            }
            CMD_LIST_FILES => {
                let query = parse_args::<ListQuery>(args)?;
                encode(self.list_files(query))
            }
            CMD_COPY_FILES => {
                let request = parse_args::<CopyRequest>(args)?;
                encode(self.copy_files(request))
            }
            other => Err(error_value(&CommandError::new(
                ErrorKind::InvalidArgument,
                format!("unknown command: {}", other),
            ))),
        }
    }
}

fn parse_args<T: serde::de::DeserializeOwned>(args: Value) -> Result<T, Value> {
    serde_json::from_value(args).map_err(|e| {
        error_value(&CommandError::new(
            ErrorKind::InvalidArgument,
            format!("malformed arguments: {}", e),
        ))
    })
}

fn error_value(err: &CommandError) -> Value {
    serde_json::to_value(err).unwrap_or_else(|_| Value::String(err.to_string()))
}

fn encode<T, E>(result: Result<T, E>) -> Result<Value, Value>
where
    T: serde::Serialize,
    E: serde::Serialize + std::fmt::Debug,
{
    match result {
        Ok(value) => serde_json::to_value(value).map_err(|e| {
            error_value(&CommandError::new(ErrorKind::Io, format!("encode failed: {}", e)))
        }),
        Err(err) => Err(serde_json::to_value(&err)
            .unwrap_or_else(|_| Value::String(format!("{:?}", err)))),
    }
}
