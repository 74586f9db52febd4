//! Face configuration format.
//!
//! A configuration describes the named clips ("faces") of a sprite sheet. It is
//! plain text, read one line at a time. Each line is trimmed of bytes `<= 0x20`
//! and classified by its first byte:
//!
//! ```text
//! # comment
//! [NAME]                        begin a face (closing bracket optional)
//! = rate DURATION               default frame duration
//! = size W H                    canonical size (inferred from frames if absent)
//! = anchor ANCHOR               default anchor (CTR if absent)
//! - X Y [W H] [DURATION] [ANCHOR]
//! ```
//!
//! Durations are `Nf` (ticks), `Nhz` or `Nms`. Anchors are one of
//! `NW N NE W CTR E SW S SE`. Integers accept a sign and a `0x`, `0o`, `0b`
//! or `0d` prefix.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use animaniac_types::config::{self, ParseOptions};
//!
//! let text = b"\
//! [idle]
//! = rate 10f
//! - 0 0 16 16
//! - 16 0 16 16 20f
//!
//! [blink]
//! = size 16 16
//! - 0 16 4f
//! ";
//!
//! let faces = config::load(text, Path::new("sprite.cfg"), &ParseOptions::default()).unwrap();
//! assert_eq!(faces.len(), 2);
//! assert_eq!(faces[0].frames()[1].duration(), 20);
//! assert_eq!(faces[1].frames()[0].width(), 16);
//! ```
//!
//! Parsing and validation are separate passes: [`parser::parse`] builds
//! [`FaceDef`]s with optional fields, and [`validate::validate`] resolves them
//! into [`Face`]s. [`load`] runs both.

use std::path::Path;

use crate::error::ConfigError;

pub mod anchor;
pub mod constants;
pub mod eval;
pub mod face;
pub mod frame;
pub mod parse_options;
pub mod parser;
pub mod validate;


pub use self::anchor::{Align, Anchor};
pub use self::face::{Face, FaceDef};
pub use self::frame::{Frame, FrameDef};
pub use self::parse_options::ParseOptions;
pub use self::validate::find_face;

/// Parses and validates configuration text.
///
/// # Errors
///
/// Returns [`ConfigError::Syntax`] with the offending line, or
/// [`ConfigError::Validation`] if the faces are incomplete.
pub fn load(src: &[u8], path: &Path, options: &ParseOptions) -> Result<Vec<Face>, ConfigError> {
	let defs = parser::parse(src, path, options)?;
	validate::validate(defs).map_err(|source| ConfigError::Validation {
		path: path.to_path_buf(),
		source,
	})
}

/// Writes faces back as configuration text.
///
/// Every frame is written with explicit size, duration (in ticks) and anchor,
/// so the output does not depend on the tick rate it is re-read with.
pub fn to_text(faces: &[Face]) -> String {
	faces.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}
