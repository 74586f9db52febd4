//! Image provider: encoded bytes to normalized RGBA8.

use std::path::Path;

use log::debug;

use crate::{Image, ImageError};

use super::HostError;

/// Decodes any format the `image` crate was built with into an RGBA8 [`Image`].
///
/// Every source color type is converted to 8-bit RGBA with straight alpha.
///
/// # Errors
///
/// Returns [`ImageError::Decode`] if the bytes cannot be decoded.
pub fn decode_image(bytes: &[u8]) -> Result<Image, ImageError> {
	let decoded = image::load_from_memory(bytes).map_err(|e| ImageError::Decode(e.to_string()))?;
	let rgba = decoded.into_rgba8();
	let (width, height) = rgba.dimensions();
	Image::from_rgba(rgba.into_raw(), width, height)
}

/// Reads and decodes an image file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn load_image(path: &Path) -> Result<Image, HostError> {
	let bytes = std::fs::read(path).map_err(|source| HostError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	let image = decode_image(&bytes).map_err(|source| HostError::Image {
		path: path.to_path_buf(),
		source,
	})?;
	debug!("{}: decoded {}x{}", path.display(), image.width(), image.height());
	Ok(image)
}
