//! Display sinks: where resolved frames end up.

use std::{
	collections::VecDeque,
	path::{Path, PathBuf},
};

use image::RgbaImage;
use log::{debug, trace};

use crate::PixelView;

use super::HostError;

/// Receives every frame the animator reports as changed.
///
/// The view is only valid for the duration of the call; sinks that keep
/// frames must copy them.
pub trait DisplaySink {
	/// Shows `view`.
	///
	/// # Errors
	///
	/// Returns [`HostError::Sink`] or [`HostError::Io`] if the frame could
	/// not be presented. The host stops on sink errors.
	fn present(&mut self, view: &PixelView<'_>) -> Result<(), HostError>;
}

impl<S: DisplaySink + ?Sized> DisplaySink for Box<S> {
	fn present(&mut self, view: &PixelView<'_>) -> Result<(), HostError> {
		(**self).present(view)
	}
}

/// A presented frame, tightly packed RGBA8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFrame {
	/// Width in pixels
	pub width: u32,
	/// Height in pixels
	pub height: u32,
	/// `width * height * 4` bytes
	pub pixels: Vec<u8>,
}

/// Keeps the most recent frames in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
	frames: VecDeque<RecordedFrame>,
	limit: Option<usize>,
	presented: u64,
}

impl RecordingSink {
	/// Creates a sink keeping every frame.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a sink keeping at most `limit` frames, dropping the oldest.
	pub fn with_limit(limit: usize) -> Self {
		Self {
			limit: Some(limit),
			..Self::default()
		}
	}

	/// Frames kept so far, oldest first.
	pub fn frames(&self) -> &VecDeque<RecordedFrame> {
		&self.frames
	}

	/// Most recently presented frame.
	pub fn last(&self) -> Option<&RecordedFrame> {
		self.frames.back()
	}

	/// Total number of frames presented, including dropped ones.
	pub fn presented(&self) -> u64 {
		self.presented
	}
}

impl DisplaySink for RecordingSink {
	fn present(&mut self, view: &PixelView<'_>) -> Result<(), HostError> {
		self.presented += 1;
		if self.limit == Some(0) {
			return Ok(());
		}
		if self.limit.is_some_and(|limit| self.frames.len() >= limit) {
			self.frames.pop_front();
		}
		self.frames.push_back(RecordedFrame {
			width: view.width(),
			height: view.height(),
			pixels: view.to_packed(),
		});
		Ok(())
	}
}

/// Writes each presented frame as a numbered PNG file.
#[derive(Debug)]
pub struct PngDumpSink {
	dir: PathBuf,
	next: u32,
}

impl PngDumpSink {
	/// Creates a sink writing into `dir`, creating it if needed.
	///
	/// # Errors
	///
	/// Returns [`HostError::Io`] if the directory cannot be created.
	pub fn new(dir: impl Into<PathBuf>) -> Result<Self, HostError> {
		let dir = dir.into();
		std::fs::create_dir_all(&dir).map_err(|source| HostError::Io {
			path: dir.clone(),
			source,
		})?;
		debug!("dumping frames into {}", dir.display());
		Ok(Self { dir, next: 0 })
	}

	/// Output directory.
	pub fn dir(&self) -> &Path {
		&self.dir
	}

	/// Number of files written.
	pub fn written(&self) -> u32 {
		self.next
	}

	/// Path the frame numbered `index` is written to.
	pub fn frame_path(&self, index: u32) -> PathBuf {
		self.dir.join(format!("frame_{index:05}.png"))
	}
}

impl DisplaySink for PngDumpSink {
	fn present(&mut self, view: &PixelView<'_>) -> Result<(), HostError> {
		let path = self.frame_path(self.next);
		let buffer = RgbaImage::from_raw(view.width(), view.height(), view.to_packed())
			.ok_or_else(|| HostError::Sink(format!("{}x{} frame does not fit", view.width(), view.height())))?;
		buffer
			.save(&path)
			.map_err(|e| HostError::Sink(format!("{}: {e}", path.display())))?;
		trace!("wrote {}", path.display());
		self.next += 1;
		Ok(())
	}
}
