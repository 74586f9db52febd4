//! File change and shutdown notifications, delivered as [`HostEvent`]s.
//!
//! File changes come from the platform watcher through a debouncer, so an
//! editor writing a file in several steps produces a single event. Each file's
//! parent directory is watched instead of the file itself, which keeps the
//! watch alive across editors that save by renaming a temporary file.

use std::{
	collections::{HashMap, HashSet},
	io::BufRead,
	path::{Path, PathBuf},
	sync::mpsc::Sender,
	thread,
	time::Duration,
};

use log::{debug, trace, warn};
use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{DebounceEventResult, DebouncedEventKind, Debouncer, new_debouncer};

use super::{HostError, HostEvent};

/// Quiet period a file needs before its change is reported.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Watches a fixed set of files and forwards their changes.
///
/// Events are sent from the watcher's own thread; dropping the watcher stops
/// them. Changes to other files in the same directories are ignored.
pub struct FileWatcher {
	_debouncer: Debouncer<RecommendedWatcher>,
	files: Vec<PathBuf>,
}

impl std::fmt::Debug for FileWatcher {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FileWatcher").field("files", &self.files).finish_non_exhaustive()
	}
}

impl FileWatcher {
	/// Watches `files` with the default debounce period.
	///
	/// # Errors
	///
	/// Returns an error if the platform watcher cannot be created or a
	/// file's directory cannot be watched.
	pub fn new(sender: Sender<HostEvent>, files: &[PathBuf]) -> Result<Self, HostError> {
		Self::with_debounce(sender, files, DEFAULT_DEBOUNCE)
	}

	/// Watches `files`, reporting each change after `debounce` without
	/// further changes.
	///
	/// Files do not need to exist yet, but their directories do. Every event
	/// carries the path exactly as given here.
	///
	/// # Errors
	///
	/// Returns an error if the platform watcher cannot be created or a
	/// file's directory cannot be watched.
	pub fn with_debounce(
		sender: Sender<HostEvent>,
		files: &[PathBuf],
		debounce: Duration,
	) -> Result<Self, HostError> {
		let mut targets = HashMap::new();
		let mut dirs = HashSet::new();
		for file in files {
			let (dir, canonical) = resolve_target(file)?;
			targets.insert(canonical, file.clone());
			dirs.insert(dir);
		}

		let mut debouncer =
			new_debouncer(debounce, move |result: DebounceEventResult| forward(&targets, &sender, result))
				.map_err(HostError::WatchInit)?;
		for dir in &dirs {
			debouncer.watcher().watch(dir, RecursiveMode::NonRecursive).map_err(|source| {
				HostError::Watch {
					path: dir.clone(),
					source,
				}
			})?;
			debug!("watching {}", dir.display());
		}

		Ok(Self {
			_debouncer: debouncer,
			files: files.to_vec(),
		})
	}

	/// Files being watched, as given.
	pub fn files(&self) -> &[PathBuf] {
		&self.files
	}
}

/// Canonical directory and canonical path of a file that may not exist yet.
fn resolve_target(file: &Path) -> Result<(PathBuf, PathBuf), HostError> {
	let parent = match file.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};
	let dir = parent.canonicalize().map_err(|source| HostError::Io {
		path: parent.to_path_buf(),
		source,
	})?;
	let canonical = match file.file_name() {
		Some(name) => dir.join(name),
		None => dir.clone(),
	};
	Ok((dir, canonical))
}

fn forward(targets: &HashMap<PathBuf, PathBuf>, sender: &Sender<HostEvent>, result: DebounceEventResult) {
	let events = match result {
		Ok(events) => events,
		Err(err) => {
			warn!("file watcher error: {err}");
			return;
		}
	};

	for event in events {
		if !matches!(event.kind, DebouncedEventKind::Any) {
			continue;
		}
		let Some(file) = targets.get(&event.path) else {
			trace!("ignoring change to {}", event.path.display());
			continue;
		};
		if sender.send(HostEvent::FileChanged(file.clone())).is_err() {
			debug!("event receiver gone, dropping change to {}", file.display());
			return;
		}
	}
}

/// Sends [`HostEvent::Quit`] once standard input reaches end of file.
///
/// Lines read before that are ignored.
pub fn spawn_stdin_listener(sender: Sender<HostEvent>) -> thread::JoinHandle<()> {
	thread::spawn(move || {
		let stdin = std::io::stdin();
		for line in stdin.lock().lines() {
			if line.is_err() {
				break;
			}
		}
		debug!("stdin closed");
		request_quit(&sender);
	})
}

/// Sends [`HostEvent::Quit`], returning whether anyone was listening.
fn request_quit(sender: &Sender<HostEvent>) -> bool {
	let delivered = sender.send(HostEvent::Quit).is_ok();
	if !delivered {
		debug!("event receiver gone, quit request dropped");
	}
	delivered
}
