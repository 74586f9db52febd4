//! Defaulting and validation of parsed face definitions.
//!
//! Runs once over the whole list, in declaration order. For each face:
//!
//! 1. At least one frame is required.
//! 2. An unset anchor becomes `CTR`.
//! 3. An unset size is the per-axis maximum of the frames' explicit sizes;
//!    if no frame has one the face is rejected.
//! 4. Each frame inherits size, anchor and duration from the face. A frame
//!    with no duration in a face with no rate is rejected.

use crate::error::ValidationError;

use super::{
	face::{Face, FaceDef},
	frame::Frame,
};

/// Resolves every optional field, producing faces ready for playback.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered. Nothing is returned on
/// failure, so callers can keep their previous faces.
pub fn validate(defs: Vec<FaceDef>) -> Result<Vec<Face>, ValidationError> {
	if defs.is_empty() {
		return Err(ValidationError::NoFaces);
	}
	defs.into_iter().map(resolve_face).collect()
}

fn resolve_face(def: FaceDef) -> Result<Face, ValidationError> {
	let FaceDef {
		name,
		rate,
		size,
		anchor,
		frames,
	} = def;

	if frames.is_empty() {
		return Err(ValidationError::NoFrames(name));
	}

	let anchor = anchor.unwrap_or_default();

	let (width, height) = match size {
		Some(size) => size,
		None => frames
			.iter()
			.filter_map(|frame| frame.size)
			.fold((0, 0), |(w, h), (fw, fh)| (w.max(fw), h.max(fh))),
	};
	if width == 0 || height == 0 {
		return Err(ValidationError::UnknownSize(name));
	}

	let mut resolved = Vec::with_capacity(frames.len());
	for frame in frames {
		let (frame_width, frame_height) = frame.size.unwrap_or((width, height));
		let Some(duration) = frame.duration.or(rate) else {
			return Err(ValidationError::MissingDuration(name));
		};
		resolved.push(Frame::new(
			frame.x,
			frame.y,
			frame_width,
			frame_height,
			duration,
			frame.anchor.unwrap_or(anchor),
		));
	}

	Ok(Face::new(name, rate, width, height, anchor, resolved))
}

/// Index of the first face named exactly `name`.
///
/// Names are not required to be unique; the earliest declaration wins.
pub fn find_face(faces: &[Face], name: &str) -> Option<usize> {
	faces.iter().position(|face| face.name() == name)
}
