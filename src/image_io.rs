use crate::error::EditError;
use image::{DynamicImage, ImageError, ImageFormat};
use std::io::ErrorKind;
use std::path::Path;

/// Load and decode an image from disk
pub fn load(path: &Path) -> Result<DynamicImage, EditError> {
    match std::fs::metadata(path) {
        Ok(_) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(EditError::NotFound {
                path: path.to_path_buf(),
            });
        }
        // Unreadable (permissions, a file used as a directory, ...)
        Err(err) => {
            return Err(EditError::Decode {
                path: path.to_path_buf(),
                source: ImageError::IoError(err),
            });
        }
    }

    let image = image::open(path).map_err(|source| EditError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "Loaded {:?} ({}x{}, {:?})",
        path,
        image.width(),
        image.height(),
        image.color()
    );

    Ok(image)
}

/// Encode `image` to `path`, inferring the format from the extension unless
/// `format` is given
pub fn save(image: &DynamicImage, path: &Path, format: Option<ImageFormat>) -> Result<(), EditError> {
    let result = match format {
        Some(format) => image.save_with_format(path, format),
        None => image.save(path),
    };

    result.map_err(|source| EditError::Io {
        path: path.to_path_buf(),
        source,
    })
}
