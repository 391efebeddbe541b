use image::{ImageFormat, RgbImage};

use crate::AppResult;

/// Decodes a JPEG payload into an RGB pixel buffer.
///
/// Anything that is not a well-formed JPEG, including an empty byte
/// sequence, fails with `AppError::DecodeFailure`.
pub fn decode_jpeg(bytes: &[u8]) -> AppResult<RgbImage> {
    let image = image::load_from_memory_with_format(bytes, ImageFormat::Jpeg)?;
    Ok(image.to_rgb8())
}
