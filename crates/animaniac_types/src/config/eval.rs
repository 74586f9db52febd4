//! Token evaluators for integers, durations and anchors.
//!
//! Each evaluator works on a byte slice whose length bounds the token. None of
//! them allocate.
//!
//! # Integers
//!
//! ```text
//! [space] [+|-] [0x|0o|0b|0d] DIGITS [space]
//! ```
//!
//! Digits are `0-9a-zA-Z` (values 0 to 35) and must be below the base. The
//! value must fit in an `i32`.
//!
//! # Durations
//!
//! A plain integer followed by a unit, converted to ticks at the host's base
//! tick rate `R`:
//!
//! | Token  | Ticks                      |
//! |--------|----------------------------|
//! | `Nhz`  | `max(1, R / N)`            |
//! | `Nms`  | `max(1, round(N * R / 1000))` |
//! | `Nf`   | `max(1, N)`                |

use crate::error::EvalError;

use super::{anchor::Anchor, constants::is_space};

/// Unit suffix of a duration token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
	/// Frequency, `hz`
	Hertz,
	/// Milliseconds, `ms`
	Millis,
	/// Ticks, `f`
	Frames,
}

impl DurationUnit {
	/// Splits a token into its numeric prefix and unit.
	///
	/// Suffixes are checked in the order `hz`, `ms`, `f`.
	pub fn split(token: &[u8]) -> Option<(&[u8], Self)> {
		if let Some(prefix) = token.strip_suffix(b"hz") {
			Some((prefix, Self::Hertz))
		} else if let Some(prefix) = token.strip_suffix(b"ms") {
			Some((prefix, Self::Millis))
		} else {
			token.strip_suffix(b"f").map(|prefix| (prefix, Self::Frames))
		}
	}
}

fn digit_value(byte: u8) -> Option<u32> {
	match byte {
		b'0'..=b'9' => Some(u32::from(byte - b'0')),
		b'a'..=b'z' => Some(u32::from(byte - b'a') + 10),
		b'A'..=b'Z' => Some(u32::from(byte - b'A') + 10),
		_ => None,
	}
}

fn skip_space(src: &[u8], mut pos: usize) -> usize {
	while pos < src.len() && is_space(src[pos]) {
		pos += 1;
	}
	pos
}

/// Evaluates the integer at the start of `src`.
///
/// Returns the value and the number of bytes consumed, including leading and
/// trailing whitespace, so consecutive integers can be read by advancing the
/// slice.
///
/// # Examples
///
/// ```
/// use animaniac_types::config::eval::eval_int;
///
/// assert_eq!(eval_int(b"  12 34"), Ok((12, 5)));
/// assert_eq!(eval_int(b"-0x1f"), Ok((-31, 5)));
/// assert!(eval_int(b"abc").is_err());
/// ```
pub fn eval_int(src: &[u8]) -> Result<(i32, usize), EvalError> {
	let mut pos = skip_space(src, 0);
	if pos >= src.len() {
		return Err(EvalError::NoInteger);
	}

	let mut negative = false;
	match src[pos] {
		b'-' => {
			negative = true;
			pos += 1;
		}
		b'+' => pos += 1,
		_ => {}
	}
	if pos >= src.len() || !src[pos].is_ascii_digit() {
		return Err(EvalError::NoInteger);
	}

	let mut base = 10;
	if src[pos] == b'0' && pos + 2 < src.len() && !is_space(src[pos + 2]) {
		let prefixed = match src[pos + 1] {
			b'x' => Some(16),
			b'd' => Some(10),
			b'o' => Some(8),
			b'b' => Some(2),
			_ => None,
		};
		if let Some(prefixed) = prefixed {
			base = prefixed;
			pos += 2;
		}
	}

	let mut value: i32 = 0;
	let start = pos;
	while pos < src.len() && !is_space(src[pos]) {
		let byte = src[pos];
		let digit = digit_value(byte).filter(|&d| d < base).ok_or(EvalError::InvalidDigit {
			digit: char::from(byte),
			base,
		})?;
		// Accumulating negatives directly keeps i32::MIN reachable.
		value = value.checked_mul(base as i32).ok_or(EvalError::Overflow)?;
		value = if negative {
			value.checked_sub(digit as i32)
		} else {
			value.checked_add(digit as i32)
		}
		.ok_or(EvalError::Overflow)?;
		pos += 1;
	}
	if pos == start {
		return Err(EvalError::NoInteger);
	}

	Ok((value, skip_space(src, pos)))
}

/// Evaluates a duration token into ticks at `tick_rate` Hz.
///
/// The whole token must be consumed: `10f` is fine, `10 f` and `1.5f` are not.
///
/// # Examples
///
/// ```
/// use animaniac_types::config::eval::eval_duration;
///
/// assert_eq!(eval_duration(b"12hz", 60), Ok(5));
/// assert_eq!(eval_duration(b"100ms", 60), Ok(6));
/// assert_eq!(eval_duration(b"3f", 60), Ok(3));
/// ```
pub fn eval_duration(token: &[u8], tick_rate: u32) -> Result<u32, EvalError> {
	let (digits, unit) = DurationUnit::split(token).ok_or(EvalError::UnknownUnit)?;
	let (n, consumed) = eval_int(digits)?;
	if consumed != digits.len() {
		return Err(EvalError::TrailingInput);
	}

	let rate = u64::from(tick_rate);
	let ticks = match unit {
		DurationUnit::Hertz => {
			if n <= 0 {
				return Err(EvalError::NonPositiveFrequency(n));
			}
			rate / n as u64
		}
		DurationUnit::Millis => {
			if n <= 0 {
				1
			} else {
				(n as u64 * rate + 500) / 1000
			}
		}
		DurationUnit::Frames => n.max(1) as u64,
	};

	Ok(u32::try_from(ticks).unwrap_or(u32::MAX).max(1))
}

/// Evaluates an anchor token (`NW N NE W CTR E SW S SE`).
pub fn eval_anchor(token: &[u8]) -> Result<Anchor, EvalError> {
	Anchor::from_token(token).ok_or(EvalError::UnknownAnchor)
}
