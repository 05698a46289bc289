use image::{Pixel, Rgb, Rgba, RgbaImage};

/// Pixels with alpha below this are treated as empty space
pub const TRANSPARENT_ALPHA_CUTOFF: u8 = 10;

/// Default per-channel tolerance for corner-sampled backgrounds
pub const DEFAULT_TOLERANCE: u8 = 30;

/// Default whiteness threshold
pub const DEFAULT_WHITE_THRESHOLD: u8 = 250;

/// Decides whether a pixel belongs to the border being trimmed
pub trait Background {
    type Pixel: Pixel<Subpixel = u8>;

    fn is_background(&self, pixel: &Self::Pixel) -> bool;
}

/// Background is anything within `tolerance` of a reference color on every
/// RGB channel, plus anything nearly transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToleranceBackground {
    pub reference: Rgba<u8>,
    pub tolerance: u8,
}

impl ToleranceBackground {
    /// Build the policy from the top-left pixel of `image`.
    ///
    /// All four corners are read; if any of them falls outside the
    /// tolerance a warning is logged but the top-left corner still wins.
    pub fn sample(image: &RgbaImage, tolerance: u8) -> Self {
        let corners = corners(image);
        let background = Self {
            reference: corners[0],
            tolerance,
        };

        if !background.matches_corners(image) {
            tracing::warn!(
                "Image corners differ ({:?}); using top-left corner {:?} as background",
                corners.map(|c| c.0),
                background.reference.0
            );
        }

        background
    }

    /// Whether every corner of `image` would be classified as background
    pub fn matches_corners(&self, image: &RgbaImage) -> bool {
        corners(image).iter().all(|c| self.is_background(c))
    }
}

fn corners(image: &RgbaImage) -> [Rgba<u8>; 4] {
    let (width, height) = image.dimensions();
    [
        *image.get_pixel(0, 0),
        *image.get_pixel(width - 1, 0),
        *image.get_pixel(0, height - 1),
        *image.get_pixel(width - 1, height - 1),
    ]
}

impl Background for ToleranceBackground {
    type Pixel = Rgba<u8>;

    fn is_background(&self, pixel: &Rgba<u8>) -> bool {
        let [r, g, b, a] = pixel.0;
        if a < TRANSPARENT_ALPHA_CUTOFF {
            return true;
        }
        let [bg_r, bg_g, bg_b, _] = self.reference.0;
        r.abs_diff(bg_r) <= self.tolerance
            && g.abs_diff(bg_g) <= self.tolerance
            && b.abs_diff(bg_b) <= self.tolerance
    }
}

/// Background is any pixel whose channels are all at least `threshold`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhiteBackground {
    pub threshold: u8,
}

impl Background for WhiteBackground {
    type Pixel = Rgb<u8>;

    fn is_background(&self, pixel: &Rgb<u8>) -> bool {
        pixel.0.iter().all(|&c| c >= self.threshold)
    }
}
