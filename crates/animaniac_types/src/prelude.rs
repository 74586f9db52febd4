//! Prelude module for `animaniac_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```
//! use animaniac_types::prelude::*;
//!
//! let animator = Animator::with_options(ParseOptions::new(30));
//! assert_eq!(animator.options().tick_rate, 30);
//! ```

// Engine types
#[doc(inline)]
pub use crate::animator::{Animator, Image, PixelView, Playback, ScratchBuffer, Tick};

// Configuration types
#[doc(inline)]
pub use crate::config::{
	Align, Anchor, Face, FaceDef, Frame, FrameDef, ParseOptions,
	constants::{DEFAULT_TICK_RATE, FACE_NAME_LIMIT, MAX_TICK_RATE},
};

// Errors
#[doc(inline)]
pub use crate::error::{
	AnimatorError, ConfigError, EvalError, ImageError, PlaybackError, SyntaxError, ValidationError,
};

// Re-export the config module for advanced usage
#[doc(inline)]
pub use crate::config;
