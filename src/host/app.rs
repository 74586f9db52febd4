//! The player loop: pacing, ticking, presenting and hot reloading.

use std::{
	path::{Path, PathBuf},
	sync::mpsc::{self, Receiver, Sender, TryRecvError},
};

use log::{debug, info, warn};

use crate::{Animator, ParseOptions, Tick, animaniac_types::config::constants::DEFAULT_TICK_RATE};

use super::{Clock, DisplaySink, FileWatcher, HostError, HostEvent, decode, default_config_path};

/// Settings for an [`App`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
	/// Sprite sheet
	pub image_path: PathBuf,
	/// Animation configuration
	pub config_path: PathBuf,
	/// Tick rate in Hz, also used to convert config durations
	pub rate: u32,
	/// Face to start with instead of face 0
	pub initial_face: Option<String>,
	/// Stop after this many ticks
	pub max_ticks: Option<u64>,
	/// Reload the image and configuration when they change on disk
	pub watch: bool,
}

impl AppConfig {
	/// Settings for playing `image_path` with its default configuration path.
	pub fn new(image_path: impl Into<PathBuf>) -> Self {
		let image_path = image_path.into();
		Self {
			config_path: default_config_path(&image_path),
			image_path,
			rate: DEFAULT_TICK_RATE,
			initial_face: None,
			max_ticks: None,
			watch: false,
		}
	}
}

/// Why [`App::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
	/// The tick limit was reached
	TickLimit,
	/// A [`HostEvent::Quit`] was received
	Quit,
}

/// An animator wired to files on disk and a display sink.
#[derive(Debug)]
pub struct App<S: DisplaySink> {
	config: AppConfig,
	animator: Animator,
	sink: S,
	sender: Sender<HostEvent>,
	events: Receiver<HostEvent>,
	watcher: Option<FileWatcher>,
	ticks: u64,
	presented: u64,
}

impl<S: DisplaySink> App<S> {
	/// Loads the image and configuration and selects the initial face.
	///
	/// # Errors
	///
	/// Unlike reloads, failing to load either file here is fatal, as is an
	/// unknown initial face, a rate outside `1..=1000` or, with
	/// [`AppConfig::watch`], a watcher that cannot start.
	pub fn new(config: AppConfig, sink: S) -> Result<Self, HostError> {
		let options = ParseOptions::new(config.rate);
		if options.tick_rate != config.rate {
			return Err(HostError::InvalidRate(config.rate));
		}

		let (sender, events) = mpsc::channel();
		let mut app = Self {
			animator: Animator::with_options(options),
			sink,
			sender,
			events,
			watcher: None,
			ticks: 0,
			presented: 0,
			config,
		};
		app.load_image()?;
		app.load_config()?;
		if let Some(name) = &app.config.initial_face {
			app.animator.use_face_by_name(name)?;
		}
		if app.config.watch {
			let files = [app.config.image_path.clone(), app.config.config_path.clone()];
			app.watcher = Some(FileWatcher::new(app.sender.clone(), &files)?);
		}
		Ok(app)
	}

	/// Settings this app was created with.
	pub fn config(&self) -> &AppConfig {
		&self.config
	}

	/// The animator being driven.
	pub fn animator(&self) -> &Animator {
		&self.animator
	}

	/// Mutable access to the animator, e.g. to switch faces.
	pub fn animator_mut(&mut self) -> &mut Animator {
		&mut self.animator
	}

	/// The display sink.
	pub fn sink(&self) -> &S {
		&self.sink
	}

	/// Consumes the app, returning its sink.
	pub fn into_sink(self) -> S {
		self.sink
	}

	/// A sender other threads can use to deliver [`HostEvent`]s.
	pub fn sender(&self) -> Sender<HostEvent> {
		self.sender.clone()
	}

	/// Ticks run so far.
	pub fn ticks(&self) -> u64 {
		self.ticks
	}

	/// Frames handed to the sink so far.
	pub fn presented(&self) -> u64 {
		self.presented
	}

	/// Reads, decodes and commits the image file.
	///
	/// # Errors
	///
	/// Returns an error, keeping the current image, if the file cannot be read
	/// or decoded.
	pub fn load_image(&mut self) -> Result<(), HostError> {
		let image = decode::load_image(&self.config.image_path)?;
		self.animator.set_image(image);
		Ok(())
	}

	/// Reads and commits the configuration file.
	///
	/// # Errors
	///
	/// Returns an error, keeping the current faces and playback, if the file
	/// cannot be read or is rejected.
	pub fn load_config(&mut self) -> Result<(), HostError> {
		let path = &self.config.config_path;
		let src = std::fs::read(path).map_err(|source| HostError::Io {
			path: path.clone(),
			source,
		})?;
		self.animator.set_config(&src, path)?;
		Ok(())
	}

	/// Applies one event. Returns `false` if the app should stop.
	///
	/// Reload failures are logged and playback continues with the previous
	/// state.
	pub fn handle_event(&mut self, event: HostEvent) -> bool {
		match event {
			HostEvent::Quit => {
				info!("quit requested");
				false
			}
			HostEvent::FileChanged(path) => {
				if let Err(err) = self.reload(&path) {
					warn!("reload failed, keeping previous state: {err}");
				}
				true
			}
		}
	}

	fn reload(&mut self, path: &Path) -> Result<(), HostError> {
		if path == self.config.image_path {
			info!("{} changed, reloading image", path.display());
			self.load_image()
		} else if path == self.config.config_path {
			info!("{} changed, reloading configuration", path.display());
			self.load_config()
		} else {
			debug!("ignoring change to {}", path.display());
			Ok(())
		}
	}

	/// Advances one tick, presenting the frame if it changed.
	///
	/// # Errors
	///
	/// Fails if playback, frame composition or the sink fails.
	pub fn step(&mut self) -> Result<Tick, HostError> {
		let tick = self.animator.update()?;
		self.ticks += 1;
		if tick.is_changed() {
			let view = self.animator.image_view().map_err(|source| HostError::Image {
				path: self.config.image_path.clone(),
				source,
			})?;
			self.sink.present(&view)?;
			self.presented += 1;
		}
		Ok(tick)
	}

	/// Whether file changes are being watched.
	pub fn is_watching(&self) -> bool {
		self.watcher.is_some()
	}

	/// Applies all pending events without blocking.
	///
	/// Returns `false` if a [`HostEvent::Quit`] was received.
	pub fn pump_events(&mut self) -> bool {
		loop {
			match self.events.try_recv() {
				Ok(event) => {
					if !self.handle_event(event) {
						return false;
					}
				}
				// The app holds a sender itself, so the channel never disconnects.
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => return true,
			}
		}
	}

	/// Runs the paced loop until the tick limit or a quit request.
	///
	/// # Errors
	///
	/// Stops at the first failing [`App::step`].
	pub fn run(&mut self) -> Result<StopReason, HostError> {
		let mut clock = Clock::new(self.config.rate)?;
		info!(
			"playing {} at {} Hz, face '{}'",
			self.config.image_path.display(),
			self.config.rate,
			self.animator.current_face().map_or("", |face| face.name())
		);

		let reason = loop {
			if self.config.max_ticks.is_some_and(|limit| self.ticks >= limit) {
				break StopReason::TickLimit;
			}
			clock.wait();
			if !self.pump_events() {
				break StopReason::Quit;
			}
			self.step()?;
		};

		info!(
			"stopped after {} tick(s), {} frame(s) presented, {} skipped deadline(s)",
			self.ticks,
			self.presented,
			clock.skips()
		);
		Ok(reason)
	}
}
