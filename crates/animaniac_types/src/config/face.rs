//! Face definitions: named clips made of frames.

use serde::Serialize;

use super::{
	anchor::Anchor,
	frame::{Frame, FrameDef},
};

/// A face as written in the configuration, with optional fields unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FaceDef {
	/// Face name, 1 to 64 bytes of printable ASCII
	pub name: String,
	/// Default frame duration in ticks
	pub rate: Option<u32>,
	/// Canonical size; inferred from the frames when absent
	pub size: Option<(u32, u32)>,
	/// Default anchor; `CTR` when absent
	pub anchor: Option<Anchor>,
	/// Frames in playback order
	pub frames: Vec<FrameDef>,
}

impl FaceDef {
	/// Creates an empty face definition.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}
}

/// A validated face. Every frame has a size, a duration and an anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Face {
	name: String,
	rate: Option<u32>,
	width: u32,
	height: u32,
	anchor: Anchor,
	frames: Vec<Frame>,
}

impl Face {
	pub(crate) fn new(
		name: String,
		rate: Option<u32>,
		width: u32,
		height: u32,
		anchor: Anchor,
		frames: Vec<Frame>,
	) -> Self {
		Self {
			name,
			rate,
			width,
			height,
			anchor,
			frames,
		}
	}

	/// Face name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Default frame duration in ticks, if the face declared one.
	pub fn rate(&self) -> Option<u32> {
		self.rate
	}

	/// Canonical width; every resolved image of this face has it.
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Canonical height.
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Default anchor.
	pub fn anchor(&self) -> Anchor {
		self.anchor
	}

	/// Frames in playback order (never empty).
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Returns a frame by index.
	pub fn frame(&self, index: usize) -> Option<&Frame> {
		self.frames.get(index)
	}

	/// Number of frames.
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Returns `true` if the face has no frames.
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Total ticks for one pass over every frame.
	pub fn cycle_ticks(&self) -> u64 {
		self.frames.iter().map(|frame| u64::from(frame.duration())).sum()
	}
}

/// Writes the face back in configuration syntax, with every frame field explicit.
impl std::fmt::Display for Face {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		writeln!(f, "[{}]", self.name)?;
		if let Some(rate) = self.rate {
			writeln!(f, "= rate {rate}f")?;
		}
		writeln!(f, "= size {} {}", self.width, self.height)?;
		writeln!(f, "= anchor {}", self.anchor)?;
		for frame in &self.frames {
			writeln!(f, "{frame}")?;
		}
		Ok(())
	}
}
