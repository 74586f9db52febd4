//! Tick-driven playback state.
//!
//! The state is just `(face, frame, countdown, dirty)`. Behavior follows from
//! whether `face` indexes into the current face list:
//!
//! - `countdown > 1`: count down; report a change only if `dirty` was set.
//! - otherwise, with a valid face: advance to the next frame (wrapping), load
//!   its duration into `countdown` and report a change.
//! - otherwise: nothing to play.

use log::{error, trace};

use crate::{config::Face, error::PlaybackError};

/// Result of one playback tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
	/// The displayed image changed; resolve and present it again
	Changed,
	/// Nothing to redraw
	Unchanged,
}

impl Tick {
	/// Returns `true` for [`Tick::Changed`].
	pub fn is_changed(self) -> bool {
		matches!(self, Self::Changed)
	}
}

/// Position of playback within a face list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playback {
	face: usize,
	frame: usize,
	countdown: u32,
	dirty: bool,
}

impl Playback {
	/// Creates a stopped playback state on face 0.
	pub fn new() -> Self {
		Self::default()
	}

	/// Active face index. May be out of range while no faces are loaded.
	pub fn face_index(&self) -> usize {
		self.face
	}

	/// Active frame index within the face.
	pub fn frame_index(&self) -> usize {
		self.frame
	}

	/// Ticks left before the next frame.
	pub fn countdown(&self) -> u32 {
		self.countdown
	}

	/// Whether the next tick is forced to report a change.
	pub fn is_dirty(&self) -> bool {
		self.dirty
	}

	/// Forces the next tick to report a change.
	pub fn mark_dirty(&mut self) {
		self.dirty = true;
	}

	/// Advances one tick.
	///
	/// A frame advance reports the change itself, so it also clears a pending
	/// dirty flag; a forced change is never reported twice.
	///
	/// # Errors
	///
	/// Returns [`PlaybackError::EmptyFace`] if the active face has no frames,
	/// which validation never lets through.
	pub fn update(&mut self, faces: &[Face]) -> Result<Tick, PlaybackError> {
		if self.countdown > 1 {
			self.countdown -= 1;
			return Ok(if std::mem::take(&mut self.dirty) {
				Tick::Changed
			} else {
				Tick::Unchanged
			});
		}

		let Some(face) = faces.get(self.face) else {
			return Ok(Tick::Unchanged);
		};
		if face.is_empty() {
			error!("Face '{}' somehow has no frames", face.name());
			return Err(PlaybackError::EmptyFace(face.name().to_string()));
		}

		self.frame += 1;
		if self.frame >= face.len() {
			self.frame = 0;
		}
		self.countdown = face.frames()[self.frame].duration();
		// The change is being reported now.
		self.dirty = false;
		trace!("face {} advanced to frame {} for {} tick(s)", self.face, self.frame, self.countdown);
		Ok(Tick::Changed)
	}

	/// Switches to another face, starting at its first frame.
	///
	/// Selecting the already active face is a no-op.
	///
	/// # Errors
	///
	/// Fails without changing anything if `index` is out of range or the face
	/// has no frames.
	pub fn use_face(&mut self, faces: &[Face], index: usize) -> Result<(), PlaybackError> {
		let face = faces.get(index).ok_or(PlaybackError::FaceOutOfRange {
			index,
			total: faces.len(),
		})?;
		if index == self.face {
			return Ok(());
		}
		let first = face.frame(0).ok_or_else(|| PlaybackError::EmptyFace(face.name().to_string()))?;

		self.face = index;
		self.frame = 0;
		self.countdown = first.duration();
		self.dirty = true;
		Ok(())
	}

	/// Restarts playback on `index` after the face list was replaced.
	///
	/// Out-of-range indices fall back to face 0.
	pub fn restart(&mut self, faces: &[Face], index: usize) {
		self.face = if index < faces.len() { index } else { 0 };
		self.frame = 0;
		self.countdown = faces.get(self.face).and_then(|face| face.frame(0)).map_or(0, |frame| frame.duration());
		self.dirty = true;
	}
}
