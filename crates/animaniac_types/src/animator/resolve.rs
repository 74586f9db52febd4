//! Frame-to-pixel resolution.
//!
//! A frame is served as a direct view into the source image whenever it has
//! the face's canonical size and lies entirely inside the image. Otherwise it
//! is composited onto a transparent face-sized canvas in a [`ScratchBuffer`],
//! positioned by its anchor and clipped against both the image and the canvas.

use log::trace;

use crate::{
	config::{Face, Frame, constants::BYTES_PER_PIXEL},
	error::ImageError,
};

use super::image::{Image, PixelView};

/// One fully transparent pixel, served when there is nothing to show.
static TRANSPARENT_PIXEL: [u8; BYTES_PER_PIXEL] = [0; BYTES_PER_PIXEL];

/// The 1x1 transparent view.
pub fn transparent() -> PixelView<'static> {
	PixelView::new(&TRANSPARENT_PIXEL, 1, 1, BYTES_PER_PIXEL)
}

/// Grow-only backing store for composited frames.
///
/// Owned by one animator; never shared. Capacity only increases, and the
/// requested prefix is zeroed on every use.
#[derive(Debug, Default)]
pub struct ScratchBuffer {
	buf: Vec<u8>,
}

impl ScratchBuffer {
	/// Creates an empty buffer. Nothing is allocated until first use.
	pub fn new() -> Self {
		Self::default()
	}

	/// Bytes currently allocated.
	pub fn len(&self) -> usize {
		self.buf.len()
	}

	/// Returns `true` if nothing has been allocated yet.
	pub fn is_empty(&self) -> bool {
		self.buf.is_empty()
	}

	/// Returns `len` zeroed bytes, growing the buffer if needed.
	///
	/// # Errors
	///
	/// Returns [`ImageError::Allocation`] if the buffer cannot grow.
	pub fn zeroed(&mut self, len: usize) -> Result<&mut [u8], ImageError> {
		if len > self.buf.len() {
			self.buf
				.try_reserve_exact(len - self.buf.len())
				.map_err(|_| ImageError::Allocation(len))?;
			self.buf.resize(len, 0);
		}
		let region = &mut self.buf[..len];
		region.fill(0);
		Ok(region)
	}
}

/// Source and destination rectangle of the pixels that survive clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyRect {
	/// Left edge in the source image
	pub src_x: usize,
	/// Top edge in the source image
	pub src_y: usize,
	/// Left edge on the canvas
	pub dst_x: usize,
	/// Top edge on the canvas
	pub dst_y: usize,
	/// Width in pixels (at least 1)
	pub width: usize,
	/// Height in pixels (at least 1)
	pub height: usize,
}

/// Places `frame` on a `canvas_w` x `canvas_h` canvas and clips it against the
/// canvas and a `image_w` x `image_h` source image.
///
/// Returns `None` when nothing is left to copy.
pub fn place_frame(
	frame: &Frame,
	canvas_w: u32,
	canvas_h: u32,
	image_w: u32,
	image_h: u32,
) -> Option<CopyRect> {
	let (canvas_w, canvas_h) = (i64::from(canvas_w), i64::from(canvas_h));
	let (image_w, image_h) = (i64::from(image_w), i64::from(image_h));
	let mut src_x = i64::from(frame.x());
	let mut src_y = i64::from(frame.y());
	let mut width = i64::from(frame.width());
	let mut height = i64::from(frame.height());

	let anchor = frame.anchor();
	let mut dst_x = anchor.horizontal().offset(canvas_w, width);
	let mut dst_y = anchor.vertical().offset(canvas_h, height);

	// Source off the top-left edge of the image.
	if src_x < 0 {
		dst_x -= src_x;
		width += src_x;
		src_x = 0;
	}
	if src_y < 0 {
		dst_y -= src_y;
		height += src_y;
		src_y = 0;
	}
	// Destination off the top-left edge of the canvas.
	if dst_x < 0 {
		src_x -= dst_x;
		width += dst_x;
		dst_x = 0;
	}
	if dst_y < 0 {
		src_y -= dst_y;
		height += dst_y;
		dst_y = 0;
	}
	width = width.min(image_w - src_x).min(canvas_w - dst_x);
	height = height.min(image_h - src_y).min(canvas_h - dst_y);

	if width <= 0 || height <= 0 {
		return None;
	}
	Some(CopyRect {
		src_x: src_x as usize,
		src_y: src_y as usize,
		dst_x: dst_x as usize,
		dst_y: dst_y as usize,
		width: width as usize,
		height: height as usize,
	})
}

/// Whether `frame` can be served straight from `image`.
pub fn is_direct(face: &Face, frame: &Frame, image: &Image) -> bool {
	let (x, y) = (i64::from(frame.x()), i64::from(frame.y()));
	frame.width() == face.width()
		&& frame.height() == face.height()
		&& x >= 0
		&& y >= 0
		&& x + i64::from(frame.width()) <= i64::from(image.width())
		&& y + i64::from(frame.height()) <= i64::from(image.height())
}

/// Resolves a frame of a face to pixels.
///
/// Without an image, face or frame, this is [`transparent`]. Views into the
/// source image or the scratch buffer are valid until either is next mutated.
///
/// # Errors
///
/// Fails only if the scratch buffer cannot grow.
pub fn resolve<'a>(
	image: Option<&'a Image>,
	face: Option<&Face>,
	frame_index: usize,
	scratch: &'a mut ScratchBuffer,
) -> Result<PixelView<'a>, ImageError> {
	let (Some(image), Some(face)) = (image, face) else {
		trace!("resolve: default");
		return Ok(transparent());
	};
	let Some(frame) = face.frame(frame_index) else {
		trace!("resolve: default");
		return Ok(transparent());
	};

	if is_direct(face, frame, image) {
		let offset = frame.y() as usize * image.stride() + frame.x() as usize * BYTES_PER_PIXEL;
		return Ok(PixelView::new(
			&image.pixels()[offset..],
			frame.width(),
			frame.height(),
			image.stride(),
		));
	}

	trace!("resolve: pad '{}' frame {frame_index}", face.name());
	pad(image, face, frame, scratch)
}

fn pad<'a>(
	image: &Image,
	face: &Face,
	frame: &Frame,
	scratch: &'a mut ScratchBuffer,
) -> Result<PixelView<'a>, ImageError> {
	let (canvas_w, canvas_h) = (face.width().max(1), face.height().max(1));
	let canvas_stride = canvas_w as usize * BYTES_PER_PIXEL;
	let len = canvas_stride
		.checked_mul(canvas_h as usize)
		.ok_or(ImageError::TooLarge {
			width: canvas_w,
			height: canvas_h,
		})?;
	let canvas = scratch.zeroed(len)?;

	if let Some(rect) = place_frame(frame, canvas_w, canvas_h, image.width(), image.height()) {
		let row_len = rect.width * BYTES_PER_PIXEL;
		let src = image.pixels();
		for row in 0..rect.height {
			let src_start = (rect.src_y + row) * image.stride() + rect.src_x * BYTES_PER_PIXEL;
			let dst_start = (rect.dst_y + row) * canvas_stride + rect.dst_x * BYTES_PER_PIXEL;
			canvas[dst_start..dst_start + row_len].copy_from_slice(&src[src_start..src_start + row_len]);
		}
	}

	Ok(PixelView::new(canvas, canvas_w, canvas_h, canvas_stride))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::Anchor;

	fn frame(x: i32, y: i32, w: u32, h: u32, anchor: Anchor) -> Frame {
		Frame::new(x, y, w, h, 1, anchor)
	}

	#[test]
	fn test_center_placement() {
		let rect = place_frame(&frame(0, 0, 4, 4, Anchor::Center), 10, 10, 32, 32).unwrap();
		assert_eq!((rect.dst_x, rect.dst_y), (3, 3));
		assert_eq!((rect.width, rect.height), (4, 4));
	}

	#[test]
	fn test_corner_placement() {
		let se = place_frame(&frame(0, 0, 4, 2, Anchor::SouthEast), 10, 8, 32, 32).unwrap();
		assert_eq!((se.dst_x, se.dst_y), (6, 6));
		let nw = place_frame(&frame(0, 0, 4, 2, Anchor::NorthWest), 10, 8, 32, 32).unwrap();
		assert_eq!((nw.dst_x, nw.dst_y), (0, 0));
		let s = place_frame(&frame(0, 0, 4, 2, Anchor::South), 10, 8, 32, 32).unwrap();
		assert_eq!((s.dst_x, s.dst_y), (3, 6));
	}

	#[test]
	fn test_matching_axis_ignores_anchor() {
		let rect = place_frame(&frame(0, 0, 10, 4, Anchor::SouthEast), 10, 10, 32, 32).unwrap();
		assert_eq!((rect.dst_x, rect.dst_y), (0, 6));
	}

	#[test]
	fn test_negative_source_shifts_destination() {
		let rect = place_frame(&frame(-2, -1, 4, 4, Anchor::NorthWest), 4, 4, 8, 8).unwrap();
		assert_eq!(
			rect,
			CopyRect {
				src_x: 0,
				src_y: 0,
				dst_x: 2,
				dst_y: 1,
				width: 2,
				height: 3,
			}
		);
	}

	#[test]
	fn test_oversized_frame_crops_center() {
		// 8x8 frame centered on a 4x4 canvas: offset -2 on both axes.
		let rect = place_frame(&frame(0, 0, 8, 8, Anchor::Center), 4, 4, 8, 8).unwrap();
		assert_eq!((rect.src_x, rect.src_y, rect.dst_x, rect.dst_y), (2, 2, 0, 0));
		assert_eq!((rect.width, rect.height), (4, 4));
	}

	#[test]
	fn test_clip_to_image() {
		let rect = place_frame(&frame(6, 6, 4, 4, Anchor::NorthWest), 4, 4, 8, 8).unwrap();
		assert_eq!((rect.width, rect.height), (2, 2));
		assert!(place_frame(&frame(8, 0, 4, 4, Anchor::NorthWest), 4, 4, 8, 8).is_none());
		assert!(place_frame(&frame(-4, 0, 4, 4, Anchor::NorthWest), 4, 4, 8, 8).is_none());
	}

	#[test]
	fn test_scratch_grows_only() {
		let mut scratch = ScratchBuffer::new();
		assert!(scratch.is_empty());
		scratch.zeroed(64).unwrap().fill(0xff);
		assert_eq!(scratch.len(), 64);
		let region = scratch.zeroed(16).unwrap();
		assert!(region.iter().all(|&b| b == 0));
		assert_eq!(scratch.len(), 64);
		scratch.zeroed(128).unwrap();
		assert_eq!(scratch.len(), 128);
	}
}
