use image::{imageops, GenericImage, ImageBuffer, ImageError, Rgb};
use thiserror::Error;

use crate::library::{definitions::*, ShortImagePolicy};

pub type RgbImgBuf = ImageBuffer<Rgb<u8>, Vec<u8>>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImgOpsError {
    #[error("Image is {height} rows tall, which is shorter than the {band_height} row subtitle band")]
    ImageTooShort { height: u32, band_height: u32 },

    #[error("Resizing a {width}x{height} image to {target_width} wide would need {scaled_height} rows, which is too many")]
    ResizeTooLarge {
        width: u32,
        height: u32,
        target_width: u32,
        scaled_height: u64,
    },

    #[error("Canvas only has room for {slots} subtitle bands")]
    CanvasFull { slots: usize },

    #[error("Image processing error: {0}")]
    ImgError(String),
}

impl From<ImageError> for ImgOpsError {
    fn from(e: ImageError) -> Self {
        Self::ImgError(e.to_string())
    }
}

/// One step of building the canvas: copy `height` rows starting at `src_y`
/// of a (width-normalized) image to row `dest_y` of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub src_y: u32,
    pub height: u32,
    pub dest_y: u32,
}

//height of an image once scaled to target_width, rounded to the nearest row.
//Fails rather than saturating when the result doesn't fit a buffer.
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> Result<u32, ImgOpsError> {
    let ratio = f64::from(target_width) / f64::from(width);
    let scaled = std::cmp::max((f64::from(height) * ratio).round() as u64, 1);

    let buffer_len = u128::from(target_width) * u128::from(scaled) * 3;
    if scaled > u64::from(u32::MAX) || buffer_len > isize::MAX as u128 {
        return Err(ImgOpsError::ResizeTooLarge {
            width,
            height,
            target_width,
            scaled_height: scaled,
        });
    }

    Ok(scaled as u32)
}

/// Rescale `img` to `target_width`, preserving its aspect ratio. Images that
/// already have the right width are returned untouched.
pub fn normalize_width(img: RgbImgBuf, target_width: u32) -> Result<RgbImgBuf, ImgOpsError> {
    let (img_x, img_y) = img.dimensions();
    if img_x == target_width || img_x == 0 {
        return Ok(img);
    }

    let new_y = scaled_height(img_x, img_y, target_width)?;
    trace!(
        target: "img_ops",
        "Resizing {}x{} to {}x{}",
        img_x,
        img_y,
        target_width,
        new_y
    );

    Ok(imageops::resize(&img, target_width, new_y, RESIZE_FILTER))
}

/// Height of every subtitle band: `floor(first_height / subtitle_ratio)`.
/// The ratio must already be validated as finite and positive.
pub fn subtitle_height(first_height: u32, subtitle_ratio: f64) -> u32 {
    (f64::from(first_height) / subtitle_ratio).floor() as u32
}

/// Where the band of the image at stacking `position` (1 for the first image
/// after the reference) comes from and where it goes.
pub fn band_placement(
    image_height: u32,
    band_height: u32,
    position: usize,
    first_height: u32,
    policy: ShortImagePolicy,
) -> Result<Placement, ImgOpsError> {
    debug_assert!(position >= 1);
    let slot_y = first_height + band_height * (position as u32 - 1);

    if image_height >= band_height {
        return Ok(Placement {
            src_y: image_height - band_height,
            height: band_height,
            dest_y: slot_y,
        });
    }

    match policy {
        ShortImagePolicy::Reject => Err(ImgOpsError::ImageTooShort {
            height: image_height,
            band_height,
        }),
        // The whole image becomes the band, sitting on the bottom of its slot.
        ShortImagePolicy::Clamp => Ok(Placement {
            src_y: 0,
            height: image_height,
            dest_y: slot_y + (band_height - image_height),
        }),
    }
}

pub fn blank_canvas(width: u32, height: u32) -> RgbImgBuf {
    ImageBuffer::from_pixel(width, height, CANVAS_BACKGROUND)
}

/// The source rows of `placement`, cropped out of `img`.
pub fn subtitle_band(img: &RgbImgBuf, placement: &Placement) -> RgbImgBuf {
    imageops::crop_imm(img, 0, placement.src_y, img.width(), placement.height).to_image()
}

pub fn apply_placement(
    canvas: &mut RgbImgBuf,
    img: &RgbImgBuf,
    placement: &Placement,
) -> Result<(), ImgOpsError> {
    if placement.height == 0 {
        return Ok(());
    }

    let band = subtitle_band(img, placement);
    canvas.copy_from(&band, 0, placement.dest_y)?;

    Ok(())
}
