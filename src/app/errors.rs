use thiserror::Error;

use crate::library::LibError;

#[derive(Error, Debug)]
pub enum AppError {
    /////////////////////////////////
    // Argument parsing
    #[error("{0}")]
    ArgParse(String),

    #[error("could not parse provided subtitle ratio: {0}")]
    ParseSubtitleRatio(String),

    /////////////////////////////////
    // Merging
    #[error(transparent)]
    Merge(#[from] LibError),
}
