//! Prelude module for `animaniac_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use animaniac_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let mut animator = Animator::new();
//! assert_eq!(animator.update().unwrap(), Tick::Unchanged);
//!
//! let anchor = Anchor::default();
//! assert_eq!(anchor.token(), "CTR");
//! ```

// Re-export everything from animaniac_types::prelude
#[doc(inline)]
pub use animaniac_types::prelude::*;

// Re-export the entire animaniac_types module for advanced usage
#[doc(inline)]
pub use animaniac_types;
