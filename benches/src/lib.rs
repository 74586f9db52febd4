//! Benchmark helper utilities for animaniac
//!
//! Generates synthetic sprite sheets and configurations so the benchmarks need
//! no files on disk.

use std::fmt::Write;

use animaniac_types::{animator::Image, error::ImageError};

/// Generates a `width` x `height` RGBA8 sheet with a repeating gradient.
pub fn generate_sheet(width: u32, height: u32) -> Result<Image, ImageError> {
	let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
	for y in 0..height {
		for x in 0..width {
			pixels.extend_from_slice(&[x as u8, y as u8, (x ^ y) as u8, 0xff]);
		}
	}
	Image::from_rgba(pixels, width, height)
}

/// Generates a configuration with `faces` faces of `frames` frames each,
/// laid out row by row on a sheet of `cell` x `cell` tiles.
///
/// Needs at least two frames per face, since only odd frames carry a size.
/// Frame lines alternate between the terse and the fully spelled-out forms so
/// every branch of the frame parser is exercised.
pub fn generate_config(faces: usize, frames: usize, cell: u32) -> String {
	let mut text = String::from("# generated\n");
	for face in 0..faces {
		let _ = writeln!(text, "[face_{face}]");
		let _ = writeln!(text, "= rate 0x{:x}f", face % 7 + 1);
		for frame in 0..frames {
			let (x, y) = (frame as u32 * cell, face as u32 * cell);
			if frame % 2 == 0 {
				let _ = writeln!(text, "- {x} {y}");
			} else {
				let _ = writeln!(text, "- {x} {y} {cell} {cell} 100ms SE");
			}
		}
	}
	text
}

#[cfg(test)]
mod tests {
	use std::path::Path;

	use animaniac_types::config::{ParseOptions, load};

	use super::*;

	#[test]
	fn test_generated_config_loads() {
		let text = generate_config(3, 4, 16);
		let faces = load(text.as_bytes(), Path::new("gen.cfg"), &ParseOptions::default()).unwrap();
		assert_eq!(faces.len(), 3);
		assert!(faces.iter().all(|face| face.len() == 4));
	}

	#[test]
	fn test_generated_sheet() {
		let sheet = generate_sheet(16, 8).unwrap();
		assert_eq!((sheet.width(), sheet.height(), sheet.pixels().len()), (16, 8, 512));
	}
}
