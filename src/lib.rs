#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `animaniac` plays sprite-sheet animations described by a small text
//! configuration, reloading the image and the configuration whenever they
//! change on disk.
//!
//! The engine lives in [`animaniac_types`] and is re-exported here. The
//! [`host`] module provides the collaborators a runnable player needs around
//! it: image decoding, tick pacing, file watching and display sinks.
//!
pub use animaniac_internal::*;

pub mod host;
