//! Anchor points used to place a frame inside its face's canvas.

use serde::Serialize;

/// Placement of a frame along one axis of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
	/// Left or top edge
	Start,
	/// Centered
	Center,
	/// Right or bottom edge
	End,
}

impl Align {
	/// Offset of a `src`-long span inside a `dst`-long span.
	///
	/// Equal lengths always place at zero. Centering truncates toward zero,
	/// so a span larger than the canvas gets a negative offset.
	pub fn offset(self, dst: i64, src: i64) -> i64 {
		if dst == src {
			return 0;
		}
		match self {
			Self::Start => 0,
			Self::Center => (dst - src) / 2,
			Self::End => dst - src,
		}
	}
}

/// One of nine alignment points: corners, edge midpoints and center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Anchor {
	/// Top-left, `NW`
	NorthWest,
	/// Top-center, `N`
	North,
	/// Top-right, `NE`
	NorthEast,
	/// Middle-left, `W`
	West,
	/// Middle, `CTR`
	#[default]
	Center,
	/// Middle-right, `E`
	East,
	/// Bottom-left, `SW`
	SouthWest,
	/// Bottom-center, `S`
	South,
	/// Bottom-right, `SE`
	SouthEast,
}

impl Anchor {
	/// All anchors, in reading order.
	pub const ALL: [Self; 9] = [
		Self::NorthWest,
		Self::North,
		Self::NorthEast,
		Self::West,
		Self::Center,
		Self::East,
		Self::SouthWest,
		Self::South,
		Self::SouthEast,
	];

	/// Matches a token exactly (case-sensitive).
	pub fn from_token(token: &[u8]) -> Option<Self> {
		match token {
			b"NW" => Some(Self::NorthWest),
			b"N" => Some(Self::North),
			b"NE" => Some(Self::NorthEast),
			b"W" => Some(Self::West),
			b"CTR" => Some(Self::Center),
			b"E" => Some(Self::East),
			b"SW" => Some(Self::SouthWest),
			b"S" => Some(Self::South),
			b"SE" => Some(Self::SouthEast),
			_ => None,
		}
	}

	/// The configuration token for this anchor.
	pub fn token(self) -> &'static str {
		match self {
			Self::NorthWest => "NW",
			Self::North => "N",
			Self::NorthEast => "NE",
			Self::West => "W",
			Self::Center => "CTR",
			Self::East => "E",
			Self::SouthWest => "SW",
			Self::South => "S",
			Self::SouthEast => "SE",
		}
	}

	/// Horizontal placement.
	pub fn horizontal(self) -> Align {
		match self {
			Self::NorthWest | Self::West | Self::SouthWest => Align::Start,
			Self::NorthEast | Self::East | Self::SouthEast => Align::End,
			Self::North | Self::Center | Self::South => Align::Center,
		}
	}

	/// Vertical placement.
	pub fn vertical(self) -> Align {
		match self {
			Self::NorthWest | Self::North | Self::NorthEast => Align::Start,
			Self::SouthWest | Self::South | Self::SouthEast => Align::End,
			Self::West | Self::Center | Self::East => Align::Center,
		}
	}
}

impl std::fmt::Display for Anchor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.token())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_token_round_trip() {
		for anchor in Anchor::ALL {
			assert_eq!(Anchor::from_token(anchor.token().as_bytes()), Some(anchor));
		}
	}

	#[test]
	fn test_tokens_are_case_sensitive() {
		assert_eq!(Anchor::from_token(b"ctr"), None);
		assert_eq!(Anchor::from_token(b"nw"), None);
		assert_eq!(Anchor::from_token(b"CENTER"), None);
		assert_eq!(Anchor::from_token(b""), None);
	}

	#[test]
	fn test_alignment() {
		assert_eq!(Anchor::SouthEast.horizontal(), Align::End);
		assert_eq!(Anchor::SouthEast.vertical(), Align::End);
		assert_eq!(Anchor::North.horizontal(), Align::Center);
		assert_eq!(Anchor::North.vertical(), Align::Start);
		assert_eq!(Anchor::West.vertical(), Align::Center);
	}

	#[test]
	fn test_align_offset() {
		assert_eq!(Align::Center.offset(10, 4), 3);
		assert_eq!(Align::Center.offset(10, 3), 3);
		assert_eq!(Align::Center.offset(4, 7), -1);
		assert_eq!(Align::End.offset(10, 4), 6);
		assert_eq!(Align::End.offset(4, 4), 0);
		assert_eq!(Align::Start.offset(10, 4), 0);
	}
}
