pub mod app;
pub mod args;
pub mod colors;
pub mod component;
pub mod demo;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod report;
pub mod scanner;
pub mod sort;
pub mod source;
pub mod ui;
pub mod utils;

pub use app::App;
pub use args::Args;
pub use component::{FileComponent, FileSystemComponent, Folder};
pub use error::{Error, Result};
pub use report::{ReportOptions, render_report, write_loaded_report, write_report};
pub use scanner::{ScanOptions, scan_dir};
pub use sort::SortMode;
pub use source::{Loaded, Source};
