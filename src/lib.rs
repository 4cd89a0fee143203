#![allow(clippy::let_and_return)]

#[macro_use]
extern crate log;

pub mod app;
pub mod library;

pub use app::run_app;
pub use library::{composite, merge_screenshots, LibError, MergeCfg, MergeReport, ShortImagePolicy};
