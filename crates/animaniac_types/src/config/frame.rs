//! Frame definitions, before and after defaulting.

use serde::Serialize;

use super::anchor::Anchor;

/// A frame as written in the configuration, with optional fields unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameDef {
	/// Source rectangle left edge
	pub x: i32,
	/// Source rectangle top edge
	pub y: i32,
	/// Source rectangle size, inherited from the face when absent
	pub size: Option<(u32, u32)>,
	/// Display duration in ticks, inherited from the face rate when absent
	pub duration: Option<u32>,
	/// Placement anchor, inherited from the face when absent
	pub anchor: Option<Anchor>,
}

impl FrameDef {
	/// Creates a frame at `(x, y)` with every optional field unset.
	pub fn at(x: i32, y: i32) -> Self {
		Self {
			x,
			y,
			..Self::default()
		}
	}

	/// Sets the source size.
	pub fn with_size(mut self, width: u32, height: u32) -> Self {
		self.size = Some((width, height));
		self
	}

	/// Sets the duration in ticks.
	pub fn with_duration(mut self, ticks: u32) -> Self {
		self.duration = Some(ticks);
		self
	}

	/// Sets the anchor.
	pub fn with_anchor(mut self, anchor: Anchor) -> Self {
		self.anchor = Some(anchor);
		self
	}
}

/// A fully resolved frame: a rectangle of the source image shown for a number of ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Frame {
	x: i32,
	y: i32,
	width: u32,
	height: u32,
	duration: u32,
	anchor: Anchor,
}

impl Frame {
	/// Creates a resolved frame.
	pub fn new(x: i32, y: i32, width: u32, height: u32, duration: u32, anchor: Anchor) -> Self {
		Self {
			x,
			y,
			width,
			height,
			duration,
			anchor,
		}
	}

	/// Source rectangle left edge.
	pub fn x(&self) -> i32 {
		self.x
	}

	/// Source rectangle top edge.
	pub fn y(&self) -> i32 {
		self.y
	}

	/// Source rectangle width.
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Source rectangle height.
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Display duration in ticks (always at least 1).
	pub fn duration(&self) -> u32 {
		self.duration
	}

	/// Placement anchor.
	pub fn anchor(&self) -> Anchor {
		self.anchor
	}
}

impl std::fmt::Display for Frame {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"- {} {} {} {} {}f {}",
			self.x, self.y, self.width, self.height, self.duration, self.anchor
		)
	}
}
