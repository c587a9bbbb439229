//! 宿主侧命令门面：前端通过这里调用列举与复制，进度经 `EventEmitter` 推回前端。

pub mod host;
pub mod response;
pub mod app;

pub use host::*;
pub use response::*;
pub use app::App;
