//! Line-oriented parser for face configuration text.
//!
//! The parser only checks syntax. It produces [`FaceDef`]s whose optional
//! fields are still unresolved; see [`super::validate`] for the defaulting pass.

use std::path::Path;

use log::debug;

use crate::error::{ConfigError, SyntaxError};

use super::{
	constants::{
		COMMENT_INTRODUCER, FACE_INTRODUCER, FACE_NAME_LIMIT, FACE_TERMINATOR, FIELD_INTRODUCER,
		FRAME_INTRODUCER, is_space, trim,
	},
	eval::{eval_anchor, eval_duration, eval_int},
	face::FaceDef,
	frame::FrameDef,
	parse_options::ParseOptions,
};

/// Parses configuration text into unvalidated face definitions.
///
/// # Arguments
///
/// * `src` - Raw configuration bytes
/// * `path` - Where the text came from, for error messages only
/// * `options` - Tick rate used for duration conversion
///
/// # Errors
///
/// Returns [`ConfigError::Syntax`] for the first line that fails to parse.
pub fn parse(
	src: &[u8],
	path: &Path,
	options: &ParseOptions,
) -> Result<Vec<FaceDef>, ConfigError> {
	let mut parser = Parser::new(options);
	for (index, line) in src.split(|&b| b == b'\n').enumerate() {
		parser.line(line).map_err(|source| ConfigError::Syntax {
			path: path.to_path_buf(),
			line: index + 1,
			source,
		})?;
	}

	debug!("{}: parsed {} face(s)", path.display(), parser.faces.len());
	Ok(parser.faces)
}

struct Parser<'o> {
	options: &'o ParseOptions,
	faces: Vec<FaceDef>,
}

impl<'o> Parser<'o> {
	fn new(options: &'o ParseOptions) -> Self {
		Self {
			options,
			faces: Vec::new(),
		}
	}

	fn line(&mut self, line: &[u8]) -> Result<(), SyntaxError> {
		let line = trim(line);
		let Some((&introducer, rest)) = line.split_first() else {
			return Ok(());
		};

		match introducer {
			COMMENT_INTRODUCER => Ok(()),
			FACE_INTRODUCER => {
				let name = parse_face_name(rest)?;
				self.faces.push(FaceDef::new(name));
				Ok(())
			}
			_ => {
				let tick_rate = self.options.tick_rate;
				let face = self.faces.last_mut().ok_or(SyntaxError::MissingFace)?;
				match introducer {
					FIELD_INTRODUCER => set_face_field(face, rest, tick_rate),
					FRAME_INTRODUCER => {
						face.frames.push(parse_frame(rest, tick_rate)?);
						Ok(())
					}
					_ => Err(SyntaxError::UnexpectedLine),
				}
			}
		}
	}
}

fn parse_face_name(src: &[u8]) -> Result<String, SyntaxError> {
	let name = src.strip_suffix(&[FACE_TERMINATOR]).unwrap_or(src);
	if name.is_empty() {
		return Err(SyntaxError::EmptyFaceName);
	}
	if name.len() > FACE_NAME_LIMIT {
		return Err(SyntaxError::FaceNameTooLong {
			len: name.len(),
			limit: FACE_NAME_LIMIT,
		});
	}
	if let Some(&byte) = name.iter().find(|&&b| !(0x20..=0x7e).contains(&b)) {
		return Err(SyntaxError::IllegalFaceNameByte(byte));
	}
	Ok(name.iter().copied().map(char::from).collect())
}

fn split_token(src: &[u8]) -> (&[u8], &[u8]) {
	let len = src.iter().position(|&b| is_space(b)).unwrap_or(src.len());
	let (token, rest) = src.split_at(len);
	(token, trim(rest))
}

fn set_face_field(face: &mut FaceDef, src: &[u8], tick_rate: u32) -> Result<(), SyntaxError> {
	let (key, value) = split_token(trim(src));
	if key.is_empty() {
		return Err(SyntaxError::MissingFieldKey);
	}
	let invalid = |source| SyntaxError::InvalidField {
		key: String::from_utf8_lossy(key).into_owned(),
		value: String::from_utf8_lossy(value).into_owned(),
		source,
	};

	match key {
		b"rate" => {
			face.rate = Some(eval_duration(value, tick_rate).map_err(invalid)?);
		}
		b"size" => {
			// Anything after the second integer is ignored.
			let (width, used) = eval_int(value).map_err(invalid)?;
			let (height, _) = eval_int(&value[used..]).map_err(invalid)?;
			face.size = Some(positive_size(width, height)?);
		}
		b"anchor" => {
			face.anchor = Some(eval_anchor(value).map_err(invalid)?);
		}
		_ => return Err(SyntaxError::UnknownField(String::from_utf8_lossy(key).into_owned())),
	}
	Ok(())
}

fn positive_size(width: i32, height: i32) -> Result<(u32, u32), SyntaxError> {
	if width < 1 || height < 1 {
		return Err(SyntaxError::NonPositiveSize {
			width,
			height,
		});
	}
	Ok((width as u32, height as u32))
}

/// `X Y [W H] [DURATION] [ANCHOR]`
fn parse_frame(src: &[u8], tick_rate: u32) -> Result<FrameDef, SyntaxError> {
	let (x, mut pos) = eval_int(src).map_err(SyntaxError::InvalidFrame)?;
	let (y, used) = eval_int(&src[pos..]).map_err(SyntaxError::InvalidFrame)?;
	pos += used;
	let mut frame = FrameDef::at(x, y);

	// A third integer commits to a full (W, H) pair.
	if let Ok((width, used)) = eval_int(&src[pos..]) {
		pos += used;
		let (height, used) = eval_int(&src[pos..]).map_err(SyntaxError::InvalidFrame)?;
		pos += used;
		frame.size = Some(positive_size(width, height)?);
	}

	if src.get(pos).is_some_and(u8::is_ascii_digit) {
		let (token, rest) = split_token(&src[pos..]);
		frame.duration = Some(eval_duration(token, tick_rate).map_err(SyntaxError::InvalidFrame)?);
		pos = src.len() - rest.len();
	}

	if pos < src.len() {
		frame.anchor = Some(eval_anchor(&src[pos..]).map_err(SyntaxError::InvalidFrame)?);
	}

	Ok(frame)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{config::anchor::Anchor, error::EvalError};

	fn frame(src: &str) -> Result<FrameDef, SyntaxError> {
		parse_frame(src.as_bytes(), 60)
	}

	#[test]
	fn test_frame_position_only() {
		assert_eq!(frame(" 3 -4"), Ok(FrameDef::at(3, -4)));
	}

	#[test]
	fn test_frame_all_fields() {
		assert_eq!(
			frame(" 0 16 8 8 10f SE"),
			Ok(FrameDef::at(0, 16).with_size(8, 8).with_duration(10).with_anchor(Anchor::SouthEast))
		);
	}

	#[test]
	fn test_frame_duration_without_size() {
		assert_eq!(frame(" 1 2 30hz"), Ok(FrameDef::at(1, 2).with_duration(2)));
		assert_eq!(frame(" 1 2 50ms N"), Ok(FrameDef::at(1, 2).with_duration(3).with_anchor(Anchor::North)));
	}

	#[test]
	fn test_frame_anchor_only() {
		assert_eq!(frame(" 1 2 CTR"), Ok(FrameDef::at(1, 2).with_anchor(Anchor::Center)));
	}

	#[test]
	fn test_frame_rejects_lone_width() {
		assert_eq!(frame(" 1 2 16"), Err(SyntaxError::InvalidFrame(EvalError::NoInteger)));
		assert!(frame(" 1 2 16 5f").is_err());
	}

	#[test]
	fn test_frame_rejects_bad_tokens() {
		assert!(frame("").is_err());
		assert!(frame(" 1").is_err());
		assert!(frame(" 1 2 4 4 10").is_err());
		assert!(frame(" 1 2 4 4 10f ctr").is_err());
		assert!(frame(" 1 2 4 4 10f CTR extra").is_err());
		assert_eq!(
			frame(" 1 2 0 4"),
			Err(SyntaxError::NonPositiveSize {
				width: 0,
				height: 4
			})
		);
	}

	#[test]
	fn test_face_name() {
		assert_eq!(parse_face_name(b"idle]"), Ok("idle".to_string()));
		assert_eq!(parse_face_name(b"idle"), Ok("idle".to_string()));
		assert_eq!(parse_face_name(b"a]]"), Ok("a]".to_string()));
		assert_eq!(parse_face_name(b"]"), Err(SyntaxError::EmptyFaceName));
		assert_eq!(parse_face_name(b""), Err(SyntaxError::EmptyFaceName));
		assert_eq!(parse_face_name(b"a\tb]"), Err(SyntaxError::IllegalFaceNameByte(0x09)));
		assert_eq!(parse_face_name(&[b'x'; 64]).map(|name| name.len()), Ok(64));
		assert_eq!(
			parse_face_name(&[b'x'; 65]),
			Err(SyntaxError::FaceNameTooLong {
				len: 65,
				limit: 64
			})
		);
	}

	#[test]
	fn test_face_fields() {
		let mut face = FaceDef::new("f");
		set_face_field(&mut face, b" rate 10f", 60).unwrap();
		set_face_field(&mut face, b" size 0x10 8", 60).unwrap();
		set_face_field(&mut face, b"anchor   NW", 60).unwrap();
		assert_eq!(face.rate, Some(10));
		assert_eq!(face.size, Some((16, 8)));
		assert_eq!(face.anchor, Some(Anchor::NorthWest));
	}

	#[test]
	fn test_face_field_errors() {
		let mut face = FaceDef::new("f");
		assert_eq!(set_face_field(&mut face, b"", 60), Err(SyntaxError::MissingFieldKey));
		assert_eq!(
			set_face_field(&mut face, b" speed 3f", 60),
			Err(SyntaxError::UnknownField("speed".to_string()))
		);
		assert!(matches!(
			set_face_field(&mut face, b" size 16", 60),
			Err(SyntaxError::InvalidField { .. })
		));
		assert!(matches!(
			set_face_field(&mut face, b" size -1 4", 60),
			Err(SyntaxError::NonPositiveSize { .. })
		));
		assert!(matches!(
			set_face_field(&mut face, b" rate 10", 60),
			Err(SyntaxError::InvalidField {
				source: EvalError::UnknownUnit,
				..
			})
		));
		assert_eq!(face, FaceDef::new("f"));
	}
}
