use std::{fmt, path::{Path, PathBuf}};

/// What a merge did. The `Display` impl is the human readable summary shown
/// to the user once the output has been written.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeReport {
    file_names: Vec<String>,
    output_path: PathBuf,
    width: u32,
    height: u32,
    band_height: u32,
    subtitle_ratio: f64,
}

impl MergeReport {
    pub fn new(
        file_names: Vec<String>,
        output_path: impl AsRef<Path>,
        (width, height): (u32, u32),
        band_height: u32,
        subtitle_ratio: f64,
    ) -> Self {
        Self {
            file_names,
            output_path: output_path.as_ref().to_path_buf(),
            width,
            height,
            band_height,
            subtitle_ratio,
        }
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.file_names.iter().map(String::as_str)
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn band_height(&self) -> u32 {
        self.band_height
    }

    pub fn subtitle_ratio(&self) -> f64 {
        self.subtitle_ratio
    }
}

impl fmt::Display for MergeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Processed images: {}", self.file_names.join(", "))?;
        writeln!(f, "Merged image saved to: {}", self.output_path.display())?;
        writeln!(f, "Final image size: {}x{}", self.width, self.height)?;
        write!(
            f,
            "Subtitle height: {} px (1/{} of the first image's height)",
            self.band_height, self.subtitle_ratio
        )
    }
}
