use image::{imageops::FilterType, Rgb};

// Source images are matched on this (case-insensitive) file name suffix,
// and the canvas is always encoded in the same format.
pub const IMAGE_EXTENSION: &str = ".png";

// The subtitle band is 1/DEFAULT_SUBTITLE_RATIO of the first image's height.
pub const DEFAULT_SUBTITLE_RATIO: f64 = 6.0;

// Defaults used when the binary is run without explicit paths.
pub const DEFAULT_INPUT_DIR: &str = "input_fig_folder";
pub const DEFAULT_OUTPUT_PREFIX: &str = "output_";
pub const DEFAULT_OUTPUT_TIME_FORMAT: &str = "%Y-%m-%d %H_%M_%S";

// Rows of a band slot not covered by image data stay this colour.
pub const CANVAS_BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

//Screenshots feed text content, so resampling needs a filter that doesn't alias.
pub const RESIZE_FILTER: FilterType = FilterType::Lanczos3;
