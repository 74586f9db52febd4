//! This crate provides the animation engine of the `animaniac` project.
//!
//! # Modules
//!
//! - **config**: The face configuration language: token evaluators, the line
//!   parser, and the defaulting pass that turns definitions into playable faces
//! - **animator**: The engine itself: committed image and faces, the tick-driven
//!   playback state machine, and frame-to-pixel resolution
//! - **error**: Error types shared by both
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use animaniac_types::prelude::*;
//!
//! let mut animator = Animator::new();
//! animator.set_config(b"[idle]\n= rate 10f\n- 0 0 8 8\n", "idle.cfg").unwrap();
//! assert_eq!(animator.count_faces(), 1);
//! assert_eq!(animator.face_name(0), Some("idle"));
//!
//! // Nothing to show until an image arrives.
//! let view = animator.image_view().unwrap();
//! assert_eq!((view.width(), view.height(), view.stride()), (1, 1, 4));
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use std::path::Path;
//! use animaniac_types::config::{self, ParseOptions};
//!
//! let path = Path::new("sprite.cfg");
//! let text = std::fs::read(path).unwrap();
//! let faces = config::load(&text, path, &ParseOptions::new(30)).unwrap();
//! ```

pub mod animator;
pub mod config;
pub mod error;

/// `use animaniac_types::prelude::*;` to import commonly used items.
pub mod prelude;
