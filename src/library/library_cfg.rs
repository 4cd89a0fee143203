use std::path::{Path, PathBuf};

use super::{definitions::*, LibError};

/// What to do with a non-first image whose (width-normalized) height is
/// smaller than the subtitle band height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortImagePolicy {
    /// Use the whole image as its band, aligned to the bottom of the band slot.
    /// Rows above it keep the canvas background colour.
    Clamp,
    /// Fail the merge.
    Reject,
}

impl Default for ShortImagePolicy {
    fn default() -> Self {
        Self::Clamp
    }
}

impl ShortImagePolicy {
    pub const NAMES: [&'static str; 2] = ["clamp", "reject"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "clamp" => Some(Self::Clamp),
            "reject" => Some(Self::Reject),
            _ => None,
        }
    }
}

/// Everything a single merge needs. Defaults: subtitle ratio
/// [`DEFAULT_SUBTITLE_RATIO`] and [`ShortImagePolicy::Clamp`].
#[derive(Debug, Clone)]
pub struct MergeCfg {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub subtitle_ratio: f64,
    pub short_image_policy: ShortImagePolicy,
}

impl MergeCfg {
    pub fn new(input_dir: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Self {
        Self {
            input_dir: input_dir.as_ref().to_path_buf(),
            output_path: output_path.as_ref().to_path_buf(),
            subtitle_ratio: DEFAULT_SUBTITLE_RATIO,
            short_image_policy: ShortImagePolicy::default(),
        }
    }

    pub fn subtitle_ratio(mut self, subtitle_ratio: f64) -> Self {
        self.subtitle_ratio = subtitle_ratio;
        self
    }

    pub fn short_image_policy(mut self, policy: ShortImagePolicy) -> Self {
        self.short_image_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<(), LibError> {
        validate_subtitle_ratio(self.subtitle_ratio)
    }
}

pub fn validate_subtitle_ratio(subtitle_ratio: f64) -> Result<(), LibError> {
    if subtitle_ratio.is_finite() && subtitle_ratio > 0.0 {
        Ok(())
    } else {
        Err(LibError::InvalidSubtitleRatio(subtitle_ratio))
    }
}
