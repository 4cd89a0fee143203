pub mod compositor;
pub mod definitions;
pub mod errors;
pub mod file_set;
mod lib_fns;
mod library_cfg;
mod merge_report;
mod utils;

//exports
pub use compositor::{composite, Compositor};
pub use errors::LibError;
pub use file_set::ImageFileSet;
pub use lib_fns::{load_image, merge_screenshots};
pub use library_cfg::{MergeCfg, ShortImagePolicy};
pub use merge_report::MergeReport;
pub use utils::img_ops;
