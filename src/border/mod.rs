//! Border detection and cropping
//!
//! Finds the tight bounding box of non-background pixels and crops to it.
//! Two background policies are supported: a tolerance around the top-left
//! pixel (with transparent pixels always counted as background) and a fixed
//! whiteness threshold.

pub mod background;
pub mod bounds;

pub use background::{
    ToleranceBackground, WhiteBackground, DEFAULT_TOLERANCE, DEFAULT_WHITE_THRESHOLD,
};
pub use bounds::{find_content_bounds, BoundingBox, EdgeTrim};

use image::{imageops, DynamicImage, GenericImageView, Rgba};
use std::time::Instant;

/// How background pixels are recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropMode {
    /// Per-channel distance from the top-left pixel, plus transparency
    Tolerance,
    /// Every channel at or above a whiteness cutoff
    Threshold,
}

impl CropMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tolerance => "tolerance",
            Self::Threshold => "threshold",
        }
    }
}

/// Result of cropping, including what was removed
#[derive(Debug, Clone)]
pub struct CropOutcome {
    pub image: DynamicImage,
    pub original_width: u32,
    pub original_height: u32,
    pub bounds: BoundingBox,
    /// Top-left reference color, only sampled in tolerance mode
    pub background: Option<Rgba<u8>>,
    pub time_ms: u64,
}

impl CropOutcome {
    pub fn trim(&self) -> EdgeTrim {
        self.bounds.trim(self.original_width, self.original_height)
    }
}

/// Crop `image` to the rectangle enclosing all of its non-background pixels.
///
/// Tolerance mode works on RGBA8 and returns RGBA8; threshold mode works on
/// RGB8 and returns RGB8. An image that is entirely background comes back
/// uncropped. The input is left untouched.
pub fn crop_to_content(image: &DynamicImage, sensitivity: u8, mode: CropMode) -> CropOutcome {
    let start = Instant::now();
    let (width, height) = image.dimensions();

    if width == 0 || height == 0 {
        return CropOutcome {
            image: image.clone(),
            original_width: width,
            original_height: height,
            bounds: BoundingBox::full(width, height),
            background: None,
            time_ms: 0,
        };
    }

    let (cropped, bounds, background) = match mode {
        CropMode::Tolerance => {
            let rgba = image.to_rgba8();
            let policy = ToleranceBackground::sample(&rgba, sensitivity);
            tracing::info!("Detected background color: {:?}", policy.reference.0);
            let bounds = find_content_bounds(&rgba, &policy);
            let cropped = imageops::crop_imm(
                &rgba,
                bounds.left,
                bounds.top,
                bounds.width(),
                bounds.height(),
            )
            .to_image();
            (
                DynamicImage::ImageRgba8(cropped),
                bounds,
                Some(policy.reference),
            )
        }
        CropMode::Threshold => {
            let rgb = image.to_rgb8();
            let policy = WhiteBackground {
                threshold: sensitivity,
            };
            let bounds = find_content_bounds(&rgb, &policy);
            let cropped = imageops::crop_imm(
                &rgb,
                bounds.left,
                bounds.top,
                bounds.width(),
                bounds.height(),
            )
            .to_image();
            (DynamicImage::ImageRgb8(cropped), bounds, None)
        }
    };

    CropOutcome {
        image: cropped,
        original_width: width,
        original_height: height,
        bounds,
        background,
        time_ms: start.elapsed().as_millis() as u64,
    }
}
