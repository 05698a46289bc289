use super::background::Background;
use image::ImageBuffer;
use serde::Serialize;

/// Inclusive rectangle of rows `top..=bottom` and columns `left..=right`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

/// Pixels removed from each edge of the original image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeTrim {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl BoundingBox {
    /// The box covering a whole `width` x `height` image
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            top: 0,
            bottom: height.saturating_sub(1),
            left: 0,
            right: width.saturating_sub(1),
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top + 1
    }

    /// Amount trimmed from each edge of a `width` x `height` image
    pub fn trim(&self, width: u32, height: u32) -> EdgeTrim {
        EdgeTrim {
            top: self.top,
            bottom: height - self.bottom - 1,
            left: self.left,
            right: width - self.right - 1,
        }
    }
}

/// Find the tightest box around every pixel `background` rejects.
///
/// Each edge is searched on its own, from the outside in, and the first row
/// or column holding content wins. An edge that never finds content falls
/// back to the image edge, so an all-background image yields the full box.
/// The image must be non-empty.
pub fn find_content_bounds<B>(image: &ImageBuffer<B::Pixel, Vec<u8>>, background: &B) -> BoundingBox
where
    B: Background,
{
    let (width, height) = image.dimensions();

    let row_has_content =
        |y: u32| (0..width).any(|x| !background.is_background(image.get_pixel(x, y)));
    let column_has_content =
        |x: u32| (0..height).any(|y| !background.is_background(image.get_pixel(x, y)));

    let top = (0..height).find(|&y| row_has_content(y)).unwrap_or(0);
    let bottom = (0..height)
        .rev()
        .find(|&y| row_has_content(y))
        .unwrap_or(height - 1);
    let left = (0..width).find(|&x| column_has_content(x)).unwrap_or(0);
    let right = (0..width)
        .rev()
        .find(|&x| column_has_content(x))
        .unwrap_or(width - 1);

    let bounds = BoundingBox {
        top,
        bottom,
        left,
        right,
    };
    tracing::debug!(?bounds, "Content bounds for {}x{} image", width, height);
    bounds
}
