//! End-to-end playback and frame resolution through the public facade.

use std::path::Path;

use animaniac::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// A `width` x `height` sheet where every pixel encodes its own position.
fn sheet(width: u32, height: u32) -> Image {
	let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
	for y in 0..height {
		for x in 0..width {
			pixels.extend_from_slice(&[x as u8 + 1, y as u8 + 1, 0x80, 0xff]);
		}
	}
	Image::from_rgba(pixels, width, height).unwrap()
}

fn animator(config: &str) -> Animator {
	let mut animator = Animator::new();
	animator.set_image(sheet(8, 8));
	animator.set_config(config.as_bytes(), Path::new("sheet.cfg")).unwrap();
	animator
}

#[test_log::test]
fn test_reload_restores_face_by_name() {
	let mut animator = animator("[idle]\n- 0 0 2 2 1f\n[walk]\n- 2 0 2 2 1f\n");
	animator.use_face_by_name("walk").unwrap();
	assert_eq!(animator.current_face_index(), 1);

	// `walk` moves to the front: playback follows it.
	animator
		.set_config(b"[walk]\n- 2 0 2 2 3f\n[idle]\n- 0 0 2 2 1f\n", "sheet.cfg")
		.unwrap();
	assert_eq!(animator.current_face_index(), 0);
	assert_eq!(animator.playback().countdown(), 3);
	assert!(animator.playback().is_dirty());

	// Gone entirely: back to face 0.
	animator.set_config(b"[run]\n- 4 0 2 2 1f\n", "sheet.cfg").unwrap();
	assert_eq!(animator.current_face().map(Face::name), Some("run"));
}

#[test_log::test]
fn test_failed_reload_changes_nothing() {
	let mut animator = animator("[a]\n= rate 3f\n- 0 0 2 2\n- 2 0 2 2\n[b]\n- 0 2 2 2 1f\n");
	animator.update().unwrap();
	animator.update().unwrap();
	let before = animator.playback().clone();

	let err = animator.set_config(b"[a]\n- 0 0 2 2 1f\n= bogus 1\n", "broken.cfg").unwrap_err();
	assert!(matches!(err, ConfigError::Syntax { line: 3, .. }));
	assert_eq!(err.to_string().split(':').next(), Some("broken.cfg"));

	let err = animator.set_config(b"[a]\n= size 2 2\n", "empty.cfg").unwrap_err();
	assert!(matches!(err, ConfigError::Validation { .. }));

	assert_eq!(animator.count_faces(), 2);
	assert_eq!(animator.playback(), &before);
}

#[test_log::test]
fn test_degenerate_resolve() {
	let mut animator = Animator::new();
	let view = animator.image_view().unwrap();
	assert_eq!((view.width(), view.height()), (1, 1));
	assert_eq!(view.pixel(0, 0), Some([0, 0, 0, 0]));

	// Image but no faces.
	animator.set_image(sheet(4, 4));
	let view = animator.image_view().unwrap();
	assert_eq!((view.width(), view.height()), (1, 1));
	assert_eq!(view.pixel(0, 0), Some([0, 0, 0, 0]));

	// Faces but no image.
	let mut animator = Animator::new();
	animator.set_config(b"[a]\n- 0 0 2 2 1f\n", "a.cfg").unwrap();
	assert_eq!(animator.image_view().unwrap().to_packed(), vec![0; 4]);
}

#[test_log::test]
fn test_pad_centers_small_frame() {
	let mut animator = animator("[dot]\n= size 7 7\n- 5 6 1 1 1f\n");
	let view = animator.image_view().unwrap();
	assert_eq!((view.width(), view.height()), (7, 7));
	for y in 0..7 {
		for x in 0..7 {
			let expected = if (x, y) == (3, 3) { [6, 7, 0x80, 0xff] } else { [0; 4] };
			assert_eq!(view.pixel(x, y), Some(expected), "pixel ({x}, {y})");
		}
	}
}

#[test_log::test]
fn test_pad_anchor_corners() {
	let mut animator = animator("[a]\n= size 4 4\n- 0 0 2 2 1f SE\n- 0 0 2 2 1f NW\n");
	let view = animator.image_view().unwrap();
	assert_eq!(view.pixel(2, 2), Some([1, 1, 0x80, 0xff]));
	assert_eq!(view.pixel(1, 1), Some([0; 4]));

	// One-tick frames: the first update already advances.
	animator.update().unwrap();
	assert_eq!(animator.current_frame_index(), 1);
	let view = animator.image_view().unwrap();
	assert_eq!(view.pixel(0, 0), Some([1, 1, 0x80, 0xff]));
	assert_eq!(view.pixel(3, 3), Some([0; 4]));
}

#[test_log::test]
fn test_direct_view_keeps_stride() {
	let mut pixels = vec![0u8; 20 * 3];
	pixels[20 + 4..20 + 8].copy_from_slice(&[9, 9, 9, 9]);
	let mut animator = Animator::new();
	animator.set_image_rgba(pixels, 4, 3, 20).unwrap();
	animator.set_config(b"[a]\n- 1 1 2 2 1f\n", "a.cfg").unwrap();

	let base = animator.image().unwrap().pixels().as_ptr() as usize;
	let view = animator.image_view().unwrap();
	assert_eq!(view.stride(), 20);
	assert_eq!(view.data().as_ptr() as usize, base + 20 + 4);
	assert_eq!(view.pixel(0, 0), Some([9, 9, 9, 9]));
}

#[test_log::test]
fn test_new_image_forces_change() {
	let mut animator = animator("[a]\n= rate 10f\n- 0 0 2 2\n");
	assert_eq!(animator.update().unwrap(), Tick::Changed);
	assert_eq!(animator.update().unwrap(), Tick::Unchanged);

	animator.set_image(sheet(4, 4));
	assert_eq!(animator.update().unwrap(), Tick::Changed);
	assert_eq!(animator.update().unwrap(), Tick::Unchanged);
	assert_eq!(animator.current_frame_index(), 0);
}

#[test_log::test]
fn test_bad_image_keeps_previous() {
	let mut animator = animator("[a]\n- 0 0 2 2 1f\n");
	let err = animator.set_image_rgba(vec![0; 8], 4, 4, 16).unwrap_err();
	assert!(matches!(err, ImageError::InsufficientData { .. }));
	assert_eq!(animator.image().map(Image::width), Some(8));
}

#[test_log::test]
fn test_face_switching_errors() {
	let mut animator = animator("[a]\n- 0 0 2 2 1f\n[b]\n- 2 2 2 2 1f\n");
	assert!(matches!(
		animator.use_face_by_name("c"),
		Err(PlaybackError::UnknownFace(name)) if name == "c"
	));
	assert!(matches!(
		animator.use_face(2),
		Err(PlaybackError::FaceOutOfRange { index: 2, total: 2 })
	));
	assert_eq!(animator.current_face_index(), 0);
	assert_eq!(animator.face_name(1), Some("b"));
	assert_eq!(animator.face_name(2), None);
}

fn align_offset(align: i64, canvas: i64, span: i64) -> i64 {
	match align {
		0 => 0,
		1 => (canvas - span) / 2,
		_ => canvas - span,
	}
}

/// Every canvas pixel is either the source pixel the anchor maps it to, or
/// transparent. Nothing outside the image or the canvas is ever touched.
#[test_log::test]
fn test_resolve_bounds_sweep() {
	let mut rng = SmallRng::seed_from_u64(0x2545_f491_4f6c_dd1d);

	for _ in 0..2000 {
		let (image_w, image_h): (i64, i64) = (rng.random_range(1..=8), rng.random_range(1..=8));
		let (face_w, face_h): (i64, i64) = (rng.random_range(1..=8), rng.random_range(1..=8));
		let (frame_x, frame_y): (i64, i64) = (rng.random_range(-10..=10), rng.random_range(-10..=10));
		let (frame_w, frame_h): (i64, i64) = (rng.random_range(1..=10), rng.random_range(1..=10));
		let anchor_index: i64 = rng.random_range(0..=8);
		let anchor = Anchor::ALL[anchor_index as usize];

		let config = format!(
			"[f]\n= size {face_w} {face_h}\n- {frame_x} {frame_y} {frame_w} {frame_h} 1f {anchor}\n"
		);
		let mut animator = Animator::new();
		animator.set_image(sheet(image_w as u32, image_h as u32));
		animator.set_config(config.as_bytes(), "sweep.cfg").unwrap();
		let view = animator.image_view().unwrap();
		assert_eq!((i64::from(view.width()), i64::from(view.height())), (face_w, face_h), "{config}");

		let dst_x = align_offset(anchor_index % 3, face_w, frame_w);
		let dst_y = align_offset(anchor_index / 3, face_h, frame_h);
		for cy in 0..face_h {
			for cx in 0..face_w {
				let (rel_x, rel_y) = (cx - dst_x, cy - dst_y);
				let (src_x, src_y) = (frame_x + rel_x, frame_y + rel_y);
				let covered = (0..frame_w).contains(&rel_x)
					&& (0..frame_h).contains(&rel_y)
					&& (0..image_w).contains(&src_x)
					&& (0..image_h).contains(&src_y);
				let expected = if covered {
					[src_x as u8 + 1, src_y as u8 + 1, 0x80, 0xff]
				} else {
					[0; 4]
				};
				assert_eq!(view.pixel(cx as u32, cy as u32), Some(expected), "({cx}, {cy}) in {config}");
			}
		}
	}
}

#[test_log::test]
fn test_text_round_trip() {
	let animator = animator("[a]\n= rate 100ms\n= anchor S\n- 0 0 2 2\n- 2 0 4 4 3f NE\n");
	let text = config::to_text(animator.faces());
	let reparsed = config::load(text.as_bytes(), Path::new("again.cfg"), animator.options()).unwrap();
	assert_eq!(reparsed, animator.faces());
}

/// Collects the width of every frame presented over `ticks` ticks.
fn presented_widths(animator: &mut Animator, ticks: usize) -> Result<Vec<u32>, AnimatorError> {
	let mut widths = Vec::new();
	for _ in 0..ticks {
		if animator.update()?.is_changed() {
			widths.push(animator.image_view()?.width());
		}
	}
	Ok(widths)
}

#[test_log::test]
fn test_umbrella_error() {
	let mut animator = Animator::new();
	animator.set_image(sheet(8, 8));
	let result: Result<(), AnimatorError> = animator
		.set_config(b"- 0 0 1 1\n", "orphan.cfg")
		.map_err(AnimatorError::from);
	assert!(matches!(result, Err(AnimatorError::Config(ConfigError::Syntax { line: 1, .. }))));

	animator.set_config(b"[a]\n- 0 0 2 2 1f\n- 0 0 3 3 2f\n", "a.cfg").unwrap();
	assert_eq!(presented_widths(&mut animator, 6).unwrap(), vec![3, 3, 3, 3]);
}
