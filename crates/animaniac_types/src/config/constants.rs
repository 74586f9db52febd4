//! Configuration format constants.

/// Maximum length of a face name, in bytes
pub const FACE_NAME_LIMIT: usize = 64;

/// Nominal base tick rate, in Hz
pub const DEFAULT_TICK_RATE: u32 = 60;

/// Highest tick rate a host may drive the animator at, in Hz
pub const MAX_TICK_RATE: u32 = 1000;

/// Introduces a face: `[NAME]`
pub const FACE_INTRODUCER: u8 = b'[';

/// Optional terminator of a face introducer
pub const FACE_TERMINATOR: u8 = b']';

/// Introduces a face field: `= KEY VALUE`
pub const FIELD_INTRODUCER: u8 = b'=';

/// Introduces a frame: `- X Y [W H] [DURATION] [ANCHOR]`
pub const FRAME_INTRODUCER: u8 = b'-';

/// Introduces a comment line
pub const COMMENT_INTRODUCER: u8 = b'#';

/// Bytes per RGBA8 pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// Returns `true` for the bytes the format treats as whitespace (0x00-0x20).
#[inline]
pub fn is_space(byte: u8) -> bool {
	byte <= 0x20
}

/// Strips leading and trailing whitespace bytes.
pub fn trim(mut src: &[u8]) -> &[u8] {
	while let [first, rest @ ..] = src {
		if !is_space(*first) {
			break;
		}
		src = rest;
	}
	while let [rest @ .., last] = src {
		if !is_space(*last) {
			break;
		}
		src = rest;
	}
	src
}
