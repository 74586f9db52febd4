//! Options controlling how configuration text is evaluated.

use super::constants::{DEFAULT_TICK_RATE, MAX_TICK_RATE};

/// Options for parsing face configurations.
///
/// Durations in the configuration may be written in hertz or milliseconds;
/// those are converted to ticks of the host's base rate, so the parser must
/// know it.
///
/// # Examples
///
/// ```
/// use animaniac_types::config::ParseOptions;
///
/// // The nominal 60 Hz
/// let options = ParseOptions::default();
/// assert_eq!(options.tick_rate, 60);
///
/// // A host ticking at 30 Hz
/// let options = ParseOptions::new(30);
/// assert_eq!(options.tick_rate, 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
	/// Base tick rate in Hz used to convert `hz` and `ms` durations
	pub tick_rate: u32,
}

impl Default for ParseOptions {
	fn default() -> Self {
		Self {
			tick_rate: DEFAULT_TICK_RATE,
		}
	}
}

impl ParseOptions {
	/// Creates options for a host ticking at `tick_rate` Hz.
	///
	/// The rate is clamped to `1..=1000`.
	pub fn new(tick_rate: u32) -> Self {
		Self {
			tick_rate: tick_rate.clamp(1, MAX_TICK_RATE),
		}
	}
}
