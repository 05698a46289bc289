use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditError {
    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write image {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Padding of {percent}% is too large for a {width}x{height} image")]
    PaddingTooLarge { width: u32, height: u32, percent: u32 },
}

impl EditError {
    pub fn code(&self) -> &'static str {
        match self {
            EditError::NotFound { .. } => "NOT_FOUND",
            EditError::Decode { .. } => "DECODE_ERROR",
            EditError::Io { .. } => "IO_ERROR",
            EditError::PaddingTooLarge { .. } => "PADDING_TOO_LARGE",
        }
    }
}

/// Error body printed to stderr in `--json` mode
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl From<&anyhow::Error> for ErrorResponse {
    fn from(err: &anyhow::Error) -> Self {
        let code = err
            .downcast_ref::<EditError>()
            .map(EditError::code)
            .unwrap_or("INTERNAL_ERROR");

        Self {
            error: format!("{:#}", err),
            code: code.to_string(),
        }
    }
}
