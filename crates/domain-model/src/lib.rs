pub mod file_info;
pub mod list_query;
pub mod copy_request;
pub mod progress;

pub use file_info::*;
pub use list_query::*;
pub use copy_request::*;
pub use progress::*;
