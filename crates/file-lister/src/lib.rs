pub mod lister;
pub mod filters;
pub mod sort;

pub use lister::{list_files, list_files_with_config, list_files_with_filter};
pub use filters::*;
pub use sort::sort_entries;
pub use fm_domain::{FileInfo, ListQuery, SortKey};
