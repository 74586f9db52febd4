//! RGBA8 pixel buffers and borrowed views into them.

use crate::{config::constants::BYTES_PER_PIXEL, error::ImageError};

/// An owned, row-major RGBA8 image with non-premultiplied alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
	pixels: Vec<u8>,
	width: u32,
	height: u32,
	stride: usize,
}

impl Image {
	/// Wraps a pixel buffer with an explicit row stride.
	///
	/// # Arguments
	///
	/// * `pixels` - Pixel data, at least `stride * (height - 1) + width * 4` bytes
	/// * `width` - Width in pixels
	/// * `height` - Height in pixels
	/// * `stride` - Bytes per row, at least `width * 4`
	///
	/// # Errors
	///
	/// Returns an error if either dimension is zero, the stride is too small,
	/// or the buffer is shorter than the geometry requires.
	pub fn new(pixels: Vec<u8>, width: u32, height: u32, stride: usize) -> Result<Self, ImageError> {
		if width == 0 || height == 0 {
			return Err(ImageError::EmptyImage {
				width,
				height,
			});
		}
		let too_large = || ImageError::TooLarge {
			width,
			height,
		};

		let row_len = (width as usize).checked_mul(BYTES_PER_PIXEL).ok_or_else(too_large)?;
		if stride < row_len {
			return Err(ImageError::StrideTooSmall {
				stride,
				min: row_len,
			});
		}
		let expected = stride
			.checked_mul(height as usize - 1)
			.and_then(|len| len.checked_add(row_len))
			.ok_or_else(too_large)?;
		if pixels.len() < expected {
			return Err(ImageError::InsufficientData {
				expected,
				actual: pixels.len(),
			});
		}

		Ok(Self {
			pixels,
			width,
			height,
			stride,
		})
	}

	/// Wraps tightly packed pixels (`stride = width * 4`).
	pub fn from_rgba(pixels: Vec<u8>, width: u32, height: u32) -> Result<Self, ImageError> {
		Self::new(pixels, width, height, width as usize * BYTES_PER_PIXEL)
	}

	/// Width in pixels.
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Height in pixels.
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Bytes per row.
	pub fn stride(&self) -> usize {
		self.stride
	}

	/// Raw pixel buffer, including any row padding.
	pub fn pixels(&self) -> &[u8] {
		&self.pixels
	}

	/// Borrows the whole image as a view.
	pub fn view(&self) -> PixelView<'_> {
		PixelView::new(&self.pixels, self.width, self.height, self.stride)
	}
}

/// A borrowed rectangle of RGBA8 pixels.
///
/// Row `y` starts at byte `y * stride`; only the first `width * 4` bytes of
/// each row belong to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelView<'a> {
	data: &'a [u8],
	width: u32,
	height: u32,
	stride: usize,
}

impl<'a> PixelView<'a> {
	pub(crate) fn new(data: &'a [u8], width: u32, height: u32, stride: usize) -> Self {
		debug_assert!(data.len() >= stride * (height as usize - 1) + width as usize * BYTES_PER_PIXEL);
		Self {
			data,
			width,
			height,
			stride,
		}
	}

	/// Underlying bytes, starting at the first pixel of the view.
	pub fn data(&self) -> &'a [u8] {
		self.data
	}

	/// Width in pixels.
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Height in pixels.
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Bytes between the starts of consecutive rows.
	pub fn stride(&self) -> usize {
		self.stride
	}

	/// Pixels of one row, `width * 4` bytes.
	///
	/// # Panics
	///
	/// Panics if `y >= height`.
	pub fn row(&self, y: u32) -> &'a [u8] {
		assert!(y < self.height, "row {y} out of range (height {})", self.height);
		let start = y as usize * self.stride;
		&self.data[start..start + self.width as usize * BYTES_PER_PIXEL]
	}

	/// Iterates over the rows of the view.
	pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> {
		let view = *self;
		(0..self.height).map(move |y| view.row(y))
	}

	/// Returns the RGBA value at `(x, y)`, or `None` outside the view.
	pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
		if x >= self.width || y >= self.height {
			return None;
		}
		let start = y as usize * self.stride + x as usize * BYTES_PER_PIXEL;
		self.data[start..start + BYTES_PER_PIXEL].try_into().ok()
	}

	/// Copies the view into a tightly packed buffer.
	pub fn to_packed(&self) -> Vec<u8> {
		let mut packed = Vec::with_capacity(self.width as usize * self.height as usize * BYTES_PER_PIXEL);
		for row in self.rows() {
			packed.extend_from_slice(row);
		}
		packed
	}
}
