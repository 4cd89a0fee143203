use image::imageops;

use crate::library::{
    img_ops::{self, ImgOpsError, Placement, RgbImgBuf},
    library_cfg::validate_subtitle_ratio,
    LibError, ShortImagePolicy,
};

/// Builds the merged canvas one image at a time: the first image in full,
/// then the bottom band of every following image, in push order.
///
/// Only the canvas is retained between pushes, so each image can be dropped
/// as soon as its band has been copied.
pub struct Compositor {
    canvas: RgbImgBuf,
    first_height: u32,
    band_height: u32,
    slots: usize,
    filled: usize,
    policy: ShortImagePolicy,
}

impl Compositor {
    /// Allocate the canvas for `image_count` images (including `first`) and
    /// paste `first` at its origin.
    pub fn new(
        first: RgbImgBuf,
        image_count: usize,
        subtitle_ratio: f64,
        policy: ShortImagePolicy,
    ) -> Result<Self, LibError> {
        validate_subtitle_ratio(subtitle_ratio)?;
        if image_count < 2 {
            return Err(LibError::TooFewImages { found: image_count });
        }

        let (width, first_height) = first.dimensions();
        let band_height = img_ops::subtitle_height(first_height, subtitle_ratio);
        let slots = image_count - 1;

        let canvas_height = u64::from(first_height) + u64::from(band_height) * slots as u64;
        if canvas_height > u64::from(u32::MAX) {
            return Err(LibError::CanvasTooLarge {
                width,
                height: canvas_height,
            });
        }

        if band_height == 0 {
            warn!(
                target: "compositor",
                "Subtitle band height is 0 (first image is {} rows tall, ratio {}). Only the first image will be visible.",
                first_height,
                subtitle_ratio
            );
        }

        let mut canvas = img_ops::blank_canvas(width, canvas_height as u32);
        imageops::replace(&mut canvas, &first, 0, 0);

        debug!(
            target: "compositor",
            "Allocated {}x{} canvas for {} subtitle bands of {} rows",
            width,
            canvas_height,
            slots,
            band_height
        );

        Ok(Self {
            canvas,
            first_height,
            band_height,
            slots,
            filled: 0,
            policy,
        })
    }

    /// Normalize `img` to the canvas width and copy its subtitle band into the
    /// next free slot.
    pub fn push(&mut self, img: RgbImgBuf) -> Result<Placement, ImgOpsError> {
        if self.filled == self.slots {
            return Err(ImgOpsError::CanvasFull { slots: self.slots });
        }

        let position = self.filled + 1;

        //a zero-row band takes no pixels, so don't pay for a resize.
        if self.band_height == 0 {
            self.filled += 1;
            return Ok(Placement {
                src_y: 0,
                height: 0,
                dest_y: self.first_height,
            });
        }

        let img = img_ops::normalize_width(img, self.canvas.width())?;
        let placement = img_ops::band_placement(
            img.height(),
            self.band_height,
            position,
            self.first_height,
            self.policy,
        )?;

        if placement.height < self.band_height {
            warn!(
                target: "compositor",
                "Image {} is only {} rows tall after resizing; its band is padded to {} rows",
                position,
                placement.height,
                self.band_height
            );
        }

        img_ops::apply_placement(&mut self.canvas, &img, &placement)?;
        trace!(target: "compositor", "Placed image {}: {:?}", position, placement);

        self.filled += 1;
        Ok(placement)
    }

    pub fn band_height(&self) -> u32 {
        self.band_height
    }

    pub fn first_height(&self) -> u32 {
        self.first_height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.canvas.dimensions()
    }

    pub fn is_complete(&self) -> bool {
        self.filled == self.slots
    }

    pub fn finish(self) -> RgbImgBuf {
        if !self.is_complete() {
            warn!(
                target: "compositor",
                "Only {} of {} subtitle bands were filled",
                self.filled,
                self.slots
            );
        }
        self.canvas
    }
}

/// Composite in-memory images: `images[0]` in full followed by the subtitle
/// band of each later image.
pub fn composite(
    images: impl IntoIterator<Item = RgbImgBuf>,
    subtitle_ratio: f64,
    policy: ShortImagePolicy,
) -> Result<RgbImgBuf, LibError> {
    let images = images.into_iter().collect::<Vec<_>>();
    let image_count = images.len();
    let mut images = images.into_iter();

    let first = images
        .next()
        .ok_or(LibError::TooFewImages { found: 0 })?;
    let mut compositor = Compositor::new(first, image_count, subtitle_ratio, policy)?;

    for (i, img) in images.enumerate() {
        compositor
            .push(img)
            .map_err(|source| LibError::Composite {
                source_name: format!("image {}", i + 1),
                source,
            })?;
    }

    Ok(compositor.finish())
}
