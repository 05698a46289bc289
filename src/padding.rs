use crate::error::EditError;
use image::{imageops, DynamicImage, GenericImageView, RgbaImage};
use std::time::Instant;

/// Padding added on each side when none is given, as a percentage of width
pub const DEFAULT_PADDING_PERCENT: u32 = 15;

/// Result of padding an image
#[derive(Debug, Clone)]
pub struct PadOutcome {
    pub image: RgbaImage,
    pub original_width: u32,
    pub original_height: u32,
    /// Pixels added on every side
    pub padding: u32,
    pub time_ms: u64,
}

/// Padding in pixels for an image `side` pixels wide, or `None` if it does
/// not fit in a `u32`
pub fn padding_for(side: u32, percent: u32) -> Option<u32> {
    let padding = u64::from(side).checked_mul(u64::from(percent))? / 100;
    u32::try_from(padding).ok()
}

/// Center `image` on a fully transparent canvas with `percent` of its width
/// added to every side. The original pixels, alpha included, are copied
/// unchanged.
pub fn pad(image: &DynamicImage, percent: u32) -> Result<PadOutcome, EditError> {
    let start = Instant::now();
    let (width, height) = image.dimensions();

    if width != height {
        tracing::warn!(
            "Padding non-square image {}x{}; padding is derived from the width",
            width,
            height
        );
    }

    let too_large = || EditError::PaddingTooLarge {
        width,
        height,
        percent,
    };
    let padding = padding_for(width, percent).ok_or_else(too_large)?;
    let grow = |side: u32| padding.checked_mul(2).and_then(|p| side.checked_add(p));
    let (new_width, new_height) = grow(width).zip(grow(height)).ok_or_else(too_large)?;

    let mut canvas = RgbaImage::new(new_width, new_height);
    imageops::replace(
        &mut canvas,
        &image.to_rgba8(),
        i64::from(padding),
        i64::from(padding),
    );

    Ok(PadOutcome {
        image: canvas,
        original_width: width,
        original_height: height,
        padding,
        time_ms: start.elapsed().as_millis() as u64,
    })
}
