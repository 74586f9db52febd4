//! This module is separated into its own crate to keep the public facade of `animaniac` stable, and should not be used directly.

/// `use animaniac::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export animaniac_types for convenience
pub use animaniac_types;

// Re-export commonly used types at crate root
pub use animaniac_types::animator::{Animator, Image, PixelView, Tick};
pub use animaniac_types::config::{Face, Frame, ParseOptions};
pub use animaniac_types::error::{AnimatorError, ConfigError, ImageError, PlaybackError};
