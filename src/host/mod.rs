//! Host-side collaborators of the animator.
//!
//! The engine performs no I/O. Everything here feeds it or consumes its
//! output:
//!
//! - [`decode`]: turns encoded image bytes into an RGBA8 [`Image`](crate::Image)
//! - [`clock`]: paces ticks at a fixed rate
//! - [`watch`]: reports file changes and shutdown requests as [`HostEvent`]s
//!   over a channel
//! - [`sink`]: receives resolved frames
//! - [`app`]: the main loop tying them together

use std::path::PathBuf;

use thiserror::Error;

use crate::{ConfigError, ImageError, PlaybackError};

pub mod app;
pub mod clock;
pub mod decode;
pub mod sink;
pub mod watch;

pub use app::{App, AppConfig, StopReason};
pub use clock::Clock;
pub use sink::{DisplaySink, PngDumpSink, RecordedFrame, RecordingSink};
pub use watch::{FileWatcher, spawn_stdin_listener};

/// Messages delivered to the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
	/// A watched file changed and has been quiet for the debounce period
	FileChanged(PathBuf),
	/// The host should shut down
	Quit,
}

/// Errors raised by host collaborators.
#[derive(Debug, Error)]
pub enum HostError {
	/// File could not be read
	#[error("{}: {source}", path.display())]
	Io {
		/// File involved
		path: PathBuf,
		/// Underlying error
		source: std::io::Error,
	},

	/// Tick rate outside `1..=1000`
	#[error("Invalid tick rate {0} Hz, expected 1..=1000")]
	InvalidRate(u32),

	/// Image could not be decoded or composed
	#[error("{}: {source}", path.display())]
	Image {
		/// File involved
		path: PathBuf,
		/// Underlying error
		source: ImageError,
	},

	/// Configuration rejected
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// Playback failure
	#[error(transparent)]
	Playback(#[from] PlaybackError),

	/// The platform file watcher could not be created
	#[error("Failed to create file watcher: {0}")]
	WatchInit(#[source] notify::Error),

	/// A directory could not be watched
	#[error("Failed to watch {}: {source}", path.display())]
	Watch {
		/// Directory involved
		path: PathBuf,
		/// Underlying error
		source: notify::Error,
	},

	/// Display sink failure
	#[error("Failed to present frame: {0}")]
	Sink(String),
}

/// Guesses the configuration path for an image: same path, `.cfg` extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use animaniac::host::default_config_path;
///
/// assert_eq!(default_config_path(Path::new("art/hero.png")), Path::new("art/hero.cfg"));
/// assert_eq!(default_config_path(Path::new("hero")), Path::new("hero.cfg"));
/// ```
pub fn default_config_path(image_path: &std::path::Path) -> PathBuf {
	image_path.with_extension("cfg")
}
