//! Fixed-rate tick pacing.

use std::time::{Duration, Instant};

use log::debug;

use crate::animaniac_types::config::constants::MAX_TICK_RATE;

use super::HostError;

/// How far the next deadline may run ahead of now before the clock re-bases.
const MAX_LEAD: Duration = Duration::from_secs(2);

/// Extra sleep added past each deadline, so waking up lands after it.
const SLEEP_EXTRA: Duration = Duration::from_micros(100);

/// Paces a loop at a fixed tick rate.
///
/// Missed deadlines are not caught up: if a tick is late by more than a
/// period the schedule restarts from now and the miss is counted as a skip.
#[derive(Debug)]
pub struct Clock {
	period: Duration,
	next: Instant,
	ticks: u64,
	skips: u64,
}

impl Clock {
	/// Creates a clock ticking at `rate_hz`, with the first tick due immediately.
	///
	/// # Errors
	///
	/// Returns [`HostError::InvalidRate`] unless `1 <= rate_hz <= 1000`.
	pub fn new(rate_hz: u32) -> Result<Self, HostError> {
		Self::starting_at(rate_hz, Instant::now())
	}

	/// Creates a clock whose first tick is due at `start`.
	///
	/// # Errors
	///
	/// Returns [`HostError::InvalidRate`] unless `1 <= rate_hz <= 1000`.
	pub fn starting_at(rate_hz: u32, start: Instant) -> Result<Self, HostError> {
		if !(1..=MAX_TICK_RATE).contains(&rate_hz) {
			return Err(HostError::InvalidRate(rate_hz));
		}
		Ok(Self {
			period: Duration::from_secs(1) / rate_hz,
			next: start,
			ticks: 0,
			skips: 0,
		})
	}

	/// Duration of one tick.
	pub fn period(&self) -> Duration {
		self.period
	}

	/// Ticks completed so far.
	pub fn ticks(&self) -> u64 {
		self.ticks
	}

	/// Deadlines missed or re-based so far.
	pub fn skips(&self) -> u64 {
		self.skips
	}

	/// Checks the schedule at `now`.
	///
	/// Returns `None` when a tick is due (and schedules the next one), or how
	/// long to wait otherwise.
	pub fn poll(&mut self, now: Instant) -> Option<Duration> {
		if now >= self.next {
			self.next += self.period;
			if self.next < now {
				self.skips += 1;
				self.next = now + self.period;
			}
			self.ticks += 1;
			return None;
		}

		let remaining = self.next - now;
		if remaining > MAX_LEAD {
			debug!("clock is {remaining:?} ahead, re-basing");
			self.skips += 1;
			self.next = now + self.period;
			self.ticks += 1;
			return None;
		}
		Some(remaining)
	}

	/// Blocks until the next tick is due.
	pub fn wait(&mut self) {
		while let Some(remaining) = self.poll(Instant::now()) {
			std::thread::sleep(remaining + SLEEP_EXTRA);
		}
	}
}
