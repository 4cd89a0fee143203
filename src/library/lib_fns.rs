use std::path::Path;

use image::{GenericImageView, ImageFormat};

use crate::library::{img_ops::RgbImgBuf, *};

/// Decode the image at `path`, dropping any alpha channel.
pub fn load_image(path: impl AsRef<Path>) -> Result<RgbImgBuf, LibError> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| LibError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    trace!(
        target: "load_image",
        "Loaded {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );

    Ok(img.to_rgb8())
}

/// Stack the subtitle bands of every image in `cfg.input_dir` under the
/// first one and write the result to `cfg.output_path`.
///
/// Returns the merged canvas along with a report of what was done; the
/// report is also logged as the run's summary. Nothing is written unless
/// every image has been loaded and placed.
pub fn merge_screenshots(cfg: &MergeCfg) -> Result<(RgbImgBuf, MergeReport), LibError> {
    cfg.validate()?;

    let mut file_set = ImageFileSet::new(&cfg.input_dir);
    let paths = file_set.enumerate_from_fs()?.to_vec();

    info!(
        target: "merge",
        "Merging {} images from {}",
        paths.len(),
        file_set.source_dir().display()
    );

    if paths.len() < 2 {
        return Err(LibError::TooFewImages { found: paths.len() });
    }

    let first = load_image(&paths[0])?;
    let mut compositor = Compositor::new(
        first,
        paths.len(),
        cfg.subtitle_ratio,
        cfg.short_image_policy,
    )?;

    for path in &paths[1..] {
        let img = load_image(path)?;
        compositor
            .push(img)
            .map_err(|source| LibError::Composite {
                source_name: path.display().to_string(),
                source,
            })?;
    }

    let dimensions = compositor.dimensions();
    let band_height = compositor.band_height();
    let canvas = compositor.finish();

    canvas
        .save_with_format(&cfg.output_path, ImageFormat::Png)
        .map_err(|source| LibError::Save {
            path: cfg.output_path.clone(),
            source,
        })?;

    let report = MergeReport::new(
        file_set.file_names(),
        &cfg.output_path,
        dimensions,
        band_height,
        cfg.subtitle_ratio,
    );

    for line in report.to_string().lines() {
        info!(target: "merge", "{}", line);
    }

    Ok((canvas, report))
}
