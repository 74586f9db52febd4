//! Error types for configuration parsing, image handling and playback.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the token evaluators (integers, durations, anchors).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
	/// No integer token at the start of the input
	#[error("Expected an integer")]
	NoInteger,

	/// A digit that is not valid in the active base
	#[error("Invalid digit '{digit}' for base {base}")]
	InvalidDigit {
		/// Offending character
		digit: char,
		/// Active base
		base: u32,
	},

	/// Value does not fit in a 32-bit signed integer
	#[error("Integer out of range")]
	Overflow,

	/// Duration token without a recognized unit
	#[error("Duration must be 'Nhz', 'Nms', or 'Nf'")]
	UnknownUnit,

	/// Duration token with text left over after the number
	#[error("Unexpected text after duration value")]
	TrailingInput,

	/// Frequency of zero or less
	#[error("Frequency must be positive, found {0}hz")]
	NonPositiveFrequency(i32),

	/// Anchor token not among the nine known names
	#[error("Expected one of: NW N NE W CTR E SW S SE")]
	UnknownAnchor,
}

/// Line-level syntax errors in configuration text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
	/// Face introducer without a name
	#[error("Face name must not be empty")]
	EmptyFaceName,

	/// Face name exceeds the length limit
	#[error("Limit {limit} bytes for face names (found {len})")]
	FaceNameTooLong {
		/// Length found
		len: usize,
		/// Maximum allowed length
		limit: usize,
	},

	/// Face name with a byte outside printable ASCII
	#[error("Illegal byte 0x{0:02x} in face name")]
	IllegalFaceNameByte(u8),

	/// Field or frame line before any face introducer
	#[error("Expected face introducer on its own line: [NAME]")]
	MissingFace,

	/// `=` line with no key
	#[error("Expected '= KEY VALUE...'")]
	MissingFieldKey,

	/// Key other than `rate`, `size` or `anchor`
	#[error("Unknown face field '{0}', expected 'rate', 'size', or 'anchor'")]
	UnknownField(String),

	/// Field value that failed to evaluate
	#[error("Failed to assign face field '{key}' = '{value}': {source}")]
	InvalidField {
		/// Field key
		key: String,
		/// Raw field value
		value: String,
		/// Evaluation failure
		source: EvalError,
	},

	/// Size with a zero or negative component
	#[error("Size must be positive, found {width}x{height}")]
	NonPositiveSize {
		/// Width found
		width: i32,
		/// Height found
		height: i32,
	},

	/// Frame line that failed to decode
	#[error("Failed to decode frame: {0}")]
	InvalidFrame(#[source] EvalError),

	/// Line starting with something other than `[`, `=` or `-`
	#[error("Line must begin with one of: '[' '=' '-'")]
	UnexpectedLine,
}

/// Semantic errors found while applying defaults to a parsed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	/// Configuration declares no faces
	#[error("Must declare at least one face")]
	NoFaces,

	/// Face declares no frames
	#[error("Face '{0}' must declare at least one frame")]
	NoFrames(String),

	/// Face has no `size` and none of its frames has one either
	#[error("Unable to infer dimensions for face '{0}'")]
	UnknownSize(String),

	/// Frame without a duration in a face without a default rate
	#[error("Face '{0}' has a frame with no duration, and no default rate")]
	MissingDuration(String),
}

/// Errors that abort a configuration replacement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
	/// Syntax error on a specific line
	#[error("{}:{line}: {source}", path.display())]
	Syntax {
		/// Path the text was read from
		path: PathBuf,
		/// 1-based line number
		line: usize,
		/// Cause
		source: SyntaxError,
	},

	/// Validation error for the configuration as a whole
	#[error("{}: {source}", path.display())]
	Validation {
		/// Path the text was read from
		path: PathBuf,
		/// Cause
		source: ValidationError,
	},
}

/// Errors related to pixel buffers.
#[derive(Debug, Error)]
pub enum ImageError {
	/// Width or height of zero
	#[error("Image dimensions must be positive, found {width}x{height}")]
	EmptyImage {
		/// Width found
		width: u32,
		/// Height found
		height: u32,
	},

	/// Row stride smaller than one row of pixels
	#[error("Stride {stride} is smaller than {min} bytes per row")]
	StrideTooSmall {
		/// Stride given
		stride: usize,
		/// Minimum stride for the width
		min: usize,
	},

	/// Pixel buffer shorter than its declared geometry
	#[error("Insufficient data: expected {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// Bytes required by width, height and stride
		expected: usize,
		/// Bytes supplied
		actual: usize,
	},

	/// Geometry too large to address
	#[error("Image geometry {width}x{height} overflows the address space")]
	TooLarge {
		/// Width found
		width: u32,
		/// Height found
		height: u32,
	},

	/// Allocation failure while growing the scratch buffer
	#[error("Failed to allocate {0} bytes for frame composition")]
	Allocation(usize),

	/// Upstream decoder or format conversion failure
	#[error("Failed to decode image: {0}")]
	Decode(String),
}

/// Errors raised while switching faces or advancing playback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
	/// Face index outside the face list
	#[error("Face index {index} out of range (total faces: {total})")]
	FaceOutOfRange {
		/// Requested index
		index: usize,
		/// Number of faces
		total: usize,
	},

	/// No face has the requested name
	#[error("No face named '{0}'")]
	UnknownFace(String),

	/// Committed face with no frames
	#[error("Face '{0}' somehow has no frames")]
	EmptyFace(String),
}

/// Umbrella error for every animator operation.
#[derive(Debug, Error)]
pub enum AnimatorError {
	/// Configuration error
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// Image error
	#[error(transparent)]
	Image(#[from] ImageError),

	/// Playback error
	#[error(transparent)]
	Playback(#[from] PlaybackError),
}
