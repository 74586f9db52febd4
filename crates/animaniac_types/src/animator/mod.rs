//! The animator engine: committed image, committed faces, playback state.
//!
//! An [`Animator`] starts with no image and no faces. The host feeds it
//! decoded images ([`Animator::set_image`]) and configuration text
//! ([`Animator::set_config`]) whenever they change, calls
//! [`Animator::update`] once per tick, and re-reads [`Animator::image_view`]
//! whenever the update reports [`Tick::Changed`].
//!
//! Both replacements are atomic: on failure the previous image or faces stay
//! in place and playback continues undisturbed.
//!
//! # Examples
//!
//! ```
//! use animaniac_types::animator::{Animator, Image, Tick};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut animator = Animator::new();
//!
//! // A 4x2 sheet: two 2x2 frames side by side.
//! let pixels: Vec<u8> = (0..32).collect();
//! animator.set_image(Image::from_rgba(pixels, 4, 2)?);
//! animator.set_config(b"[spin]\n= rate 2f\n- 0 0 2 2\n- 2 0 2 2\n", "spin.cfg")?;
//!
//! // The first tick reports the pending change.
//! assert_eq!(animator.update()?, Tick::Changed);
//! let view = animator.image_view()?;
//! assert_eq!((view.width(), view.height()), (2, 2));
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use log::{debug, info, warn};

use crate::{
	config::{self, Face, ParseOptions, find_face},
	error::{ConfigError, ImageError, PlaybackError},
};

pub mod image;
pub mod player;
pub mod resolve;

pub use self::image::{Image, PixelView};
pub use self::player::{Playback, Tick};
pub use self::resolve::ScratchBuffer;

/// Sprite-sheet animation engine.
///
/// Single-threaded and synchronous; hosts that share one across threads must
/// serialize access themselves.
#[derive(Debug, Default)]
pub struct Animator {
	options: ParseOptions,
	image: Option<Image>,
	faces: Vec<Face>,
	playback: Playback,
	scratch: ScratchBuffer,
}

impl Animator {
	/// Creates an empty animator for a 60 Hz host.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty animator with custom parse options.
	pub fn with_options(options: ParseOptions) -> Self {
		Self {
			options,
			..Self::default()
		}
	}

	/// Parse options used by [`Animator::set_config`].
	pub fn options(&self) -> &ParseOptions {
		&self.options
	}

	/// Commits a new image, releasing the previous one, and marks the display dirty.
	pub fn set_image(&mut self, image: Image) {
		debug!("committing {}x{} image", image.width(), image.height());
		self.image = Some(image);
		self.playback.mark_dirty();
	}

	/// Commits raw RGBA8 pixels.
	///
	/// # Errors
	///
	/// Returns an error, leaving the current image in place, if the geometry
	/// does not match the buffer.
	pub fn set_image_rgba(
		&mut self,
		pixels: Vec<u8>,
		width: u32,
		height: u32,
		stride: usize,
	) -> Result<(), ImageError> {
		let image = Image::new(pixels, width, height, stride)?;
		self.set_image(image);
		Ok(())
	}

	/// Replaces the whole face list from configuration text.
	///
	/// Playback restarts at the first frame of the face named like the
	/// previously active one, or face 0 if there is none.
	///
	/// # Errors
	///
	/// Returns a [`ConfigError`] naming `path` and, for syntax errors, the
	/// line. The current faces and playback state are kept.
	pub fn set_config(&mut self, src: &[u8], path: impl AsRef<Path>) -> Result<(), ConfigError> {
		let path = path.as_ref();
		let faces = config::load(src, path, &self.options).inspect_err(|err| warn!("{err}"))?;

		let previous = self.current_face().map(|face| face.name().to_string());
		let index = previous.as_deref().and_then(|name| find_face(&faces, name)).unwrap_or(0);

		info!("{}: loaded {} face(s), playing '{}'", path.display(), faces.len(), faces[index].name());
		self.faces = faces;
		self.playback.restart(&self.faces, index);
		Ok(())
	}

	/// Number of faces.
	pub fn count_faces(&self) -> usize {
		self.faces.len()
	}

	/// Name of the face at `index`.
	pub fn face_name(&self, index: usize) -> Option<&str> {
		self.faces.get(index).map(Face::name)
	}

	/// All committed faces.
	pub fn faces(&self) -> &[Face] {
		&self.faces
	}

	/// The active face, if any.
	pub fn current_face(&self) -> Option<&Face> {
		self.faces.get(self.playback.face_index())
	}

	/// Index of the active face.
	pub fn current_face_index(&self) -> usize {
		self.playback.face_index()
	}

	/// Index of the displayed frame within the active face.
	pub fn current_frame_index(&self) -> usize {
		self.playback.frame_index()
	}

	/// Playback state.
	pub fn playback(&self) -> &Playback {
		&self.playback
	}

	/// The committed image, if any.
	pub fn image(&self) -> Option<&Image> {
		self.image.as_ref()
	}

	/// Returns `true` once an image has been committed.
	pub fn has_image(&self) -> bool {
		self.image.is_some()
	}

	/// Switches to the face at `index`.
	///
	/// # Errors
	///
	/// Fails without side effects if `index` is out of range.
	pub fn use_face(&mut self, index: usize) -> Result<(), PlaybackError> {
		self.playback.use_face(&self.faces, index)
	}

	/// Switches to the first face named exactly `name`.
	///
	/// # Errors
	///
	/// Fails without side effects if no face has that name.
	pub fn use_face_by_name(&mut self, name: &str) -> Result<(), PlaybackError> {
		let index = find_face(&self.faces, name).ok_or_else(|| PlaybackError::UnknownFace(name.to_string()))?;
		self.use_face(index)
	}

	/// Advances playback by one tick.
	///
	/// # Errors
	///
	/// Only if a committed face has no frames, which validation prevents.
	pub fn update(&mut self) -> Result<Tick, PlaybackError> {
		self.playback.update(&self.faces)
	}

	/// Resolves the current frame to pixels.
	///
	/// The view borrows the animator, so it cannot outlive the next mutation.
	///
	/// # Errors
	///
	/// Fails only if the composition buffer cannot grow.
	pub fn image_view(&mut self) -> Result<PixelView<'_>, ImageError> {
		let face = self.faces.get(self.playback.face_index());
		resolve::resolve(self.image.as_ref(), face, self.playback.frame_index(), &mut self.scratch)
	}
}
