//! Decoding of member photos and the report logo.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use printpdf::image_crate::{self, DynamicImage};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("not a base64 image data URL")]
    NotDataUrl,

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("unreadable image: {0}")]
    Image(#[from] image_crate::ImageError),
}

/// Split `data:image/<format>;base64,<payload>` into format and raw bytes.
pub fn decode_data_url(data_url: &str) -> Result<(String, Vec<u8>), PhotoError> {
    let rest = data_url
        .trim()
        .strip_prefix("data:image/")
        .ok_or(PhotoError::NotDataUrl)?;
    let (format, payload) = rest.split_once(";base64,").ok_or(PhotoError::NotDataUrl)?;

    let bytes = STANDARD.decode(payload.trim())?;
    Ok((format.to_lowercase(), bytes))
}

/// Decode image bytes, flattening any alpha channel onto RGB.
pub fn load_image(bytes: &[u8]) -> Result<DynamicImage, PhotoError> {
    let image = image_crate::load_from_memory(bytes)?;
    Ok(DynamicImage::ImageRgb8(image.to_rgb8()))
}

pub fn load_photo(data_url: &str) -> Result<DynamicImage, PhotoError> {
    let (_, bytes) = decode_data_url(data_url)?;
    load_image(&bytes)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use std::io::Cursor;

    /// A tiny PNG as a data URL
    pub fn png_data_url() -> String {
        let mut bytes = Vec::new();
        DynamicImage::new_rgb8(4, 4)
            .write_to(&mut Cursor::new(&mut bytes), image_crate::ImageFormat::Png)
            .unwrap();
        format!("data:image/png;base64,{}", STANDARD.encode(bytes))
    }
}
