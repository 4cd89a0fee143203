use std::path::PathBuf;

use thiserror::Error;

use super::img_ops::ImgOpsError;

#[derive(Error, Debug)]
pub enum LibError {
    #[error("at least two images required, found {found}")]
    TooFewImages { found: usize },

    #[error("Input directory not found: {}", .0.display())]
    InputDirNotFound(PathBuf),

    #[error("Failed to list input directory {}", .dir.display())]
    Enumeration {
        dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to decode image {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write merged image to {}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Subtitle ratio must be a positive number, got {0}")]
    InvalidSubtitleRatio(f64),

    #[error("Merged image would be {width}x{height}, which is too large")]
    CanvasTooLarge { width: u32, height: u64 },

    #[error("Failed to place subtitle band of {source_name}")]
    Composite {
        source_name: String,
        #[source]
        source: ImgOpsError,
    },
}
