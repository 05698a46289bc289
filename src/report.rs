//! Run summaries printed after a successful edit

use crate::border::{CropMode, CropOutcome, EdgeTrim};
use crate::padding::PadOutcome;
use image::GenericImageView;
use serde::Serialize;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CropReport {
    pub mode: String,
    pub sensitivity: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<[u8; 4]>,
    pub original_size: Size,
    pub cropped_size: Size,
    pub removed: EdgeTrim,
    pub output: String,
    pub elapsed_ms: u64,
}

impl CropReport {
    pub fn new(outcome: &CropOutcome, mode: CropMode, sensitivity: u8, output: &Path) -> Self {
        let (width, height) = outcome.image.dimensions();
        Self {
            mode: mode.as_str().to_string(),
            sensitivity,
            background: outcome.background.map(|c| c.0),
            original_size: Size {
                width: outcome.original_width,
                height: outcome.original_height,
            },
            cropped_size: Size { width, height },
            removed: outcome.trim(),
            output: output.display().to_string(),
            elapsed_ms: outcome.time_ms,
        }
    }
}

impl fmt::Display for CropReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some([r, g, b, a]) = self.background {
            writeln!(f, "Detected background color: ({}, {}, {}, {})", r, g, b, a)?;
        }
        writeln!(f, "Original size: {}", self.original_size)?;
        writeln!(f, "Cropped size: {}", self.cropped_size)?;
        writeln!(
            f,
            "Removed border: top={}, bottom={}, left={}, right={}",
            self.removed.top, self.removed.bottom, self.removed.left, self.removed.right
        )?;
        write!(f, "Saved to: {}", self.output)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PadReport {
    pub percent: u32,
    pub padding: u32,
    pub original_size: Size,
    pub padded_size: Size,
    pub output: String,
    pub elapsed_ms: u64,
}

impl PadReport {
    pub fn new(outcome: &PadOutcome, percent: u32, output: &Path) -> Self {
        let (width, height) = outcome.image.dimensions();
        Self {
            percent,
            padding: outcome.padding,
            original_size: Size {
                width: outcome.original_width,
                height: outcome.original_height,
            },
            padded_size: Size { width, height },
            output: output.display().to_string(),
            elapsed_ms: outcome.time_ms,
        }
    }
}

impl fmt::Display for PadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created padded icon: {}", self.output)?;
        writeln!(f, "  Original size: {}", self.original_size)?;
        writeln!(f, "  New size: {}", self.padded_size)?;
        write!(f, "  Padding: {}px ({}%)", self.padding, self.percent)
    }
}
