//! Timeline playback: a cursor over recorded steps, driven by a fixed-period
//! semantic clock.
//!
//! Moving backward replays from scratch: the sink is reset and steps
//! `0..=cursor` are applied again. Timelines are small, and replay keeps the
//! shown state a pure function of `(steps, cursor)`.

use std::time::Duration;

use log::debug;

use super::scene::RenderSink;
use super::step::Step;

/// Delay between automatically applied steps.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(700);

/// Where the player is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
	/// No timeline loaded.
	#[default]
	Idle,
	/// Timeline loaded, nothing applied by playback yet.
	Prepared,
	/// Steps are applied on every full interval.
	Playing,
	/// Halted by the user; the cursor is kept.
	Paused,
	/// Playback reached the last step.
	Stopped,
}

/// Owns one timeline and a cursor into it.
#[derive(Clone, Debug)]
pub struct Player {
	steps: Vec<Step>,
	cursor: Option<usize>,
	state: PlaybackState,
	interval: Duration,
	elapsed: Duration,
	idle_status: String,
}

impl Default for Player {
	fn default() -> Self {
		Self::new(DEFAULT_STEP_INTERVAL)
	}
}

impl Player {
	/// An idle player applying one step per `interval` while playing.
	pub fn new(interval: Duration) -> Self {
		Self {
			steps: Vec::new(),
			cursor: None,
			state: PlaybackState::Idle,
			interval,
			elapsed: Duration::ZERO,
			idle_status: "Ready.".to_string(),
		}
	}

	/// Replaces the timeline and rewinds the cursor. Nothing is applied.
	pub fn load(&mut self, steps: Vec<Step>) {
		debug!("Loading timeline of {} steps", steps.len());
		self.steps = steps;
		self.cursor = None;
		self.elapsed = Duration::ZERO;
		self.set_state(if self.steps.is_empty() {
			PlaybackState::Idle
		} else {
			PlaybackState::Prepared
		});
	}

	/// Drops the timeline and resets the sink, totals included.
	pub fn clear(&mut self, sink: &mut impl RenderSink) {
		self.load(Vec::new());
		sink.reset_all_to_neutral();
		sink.clear_totals();
	}

	/// Starts or resumes auto-play. No-op once the last step is applied.
	pub fn play(&mut self) {
		if self.at_end() {
			return;
		}
		if matches!(
			self.state,
			PlaybackState::Prepared | PlaybackState::Paused | PlaybackState::Stopped
		) {
			self.elapsed = Duration::ZERO;
			self.set_state(PlaybackState::Playing);
		}
	}

	/// Halts auto-play, keeping the cursor.
	pub fn pause(&mut self) {
		if self.state == PlaybackState::Playing {
			self.elapsed = Duration::ZERO;
			self.set_state(PlaybackState::Paused);
		}
	}

	/// Halts auto-play as finished, keeping the cursor.
	pub fn stop(&mut self) {
		if self.state == PlaybackState::Playing {
			self.elapsed = Duration::ZERO;
			self.set_state(PlaybackState::Stopped);
		}
	}

	/// Play when halted, pause when playing.
	pub fn toggle(&mut self) {
		if self.is_playing() {
			self.pause();
		} else {
			self.play();
		}
	}

	/// Advances the clock by `dt`, applying one step per full interval.
	/// Returns how many steps were applied.
	pub fn tick(&mut self, dt: Duration, sink: &mut impl RenderSink) -> usize {
		if self.state != PlaybackState::Playing {
			return 0;
		}
		self.elapsed += dt;
		let mut applied = 0;
		while self.elapsed >= self.interval {
			self.elapsed -= self.interval;
			if !self.advance(sink) {
				break;
			}
			applied += 1;
			if self.at_end() {
				break;
			}
		}
		if self.at_end() {
			self.elapsed = Duration::ZERO;
			self.set_state(PlaybackState::Stopped);
		}
		applied
	}

	/// Applies the next step. Pauses auto-play first.
	pub fn step_forward(&mut self, sink: &mut impl RenderSink) -> bool {
		self.pause();
		let moved = self.advance(sink);
		if self.at_end() && self.state != PlaybackState::Idle {
			self.set_state(PlaybackState::Stopped);
		} else if moved && self.state == PlaybackState::Prepared {
			self.set_state(PlaybackState::Paused);
		}
		moved
	}

	/// Moves the cursor back one step by replaying from the start.
	/// Pauses auto-play first.
	pub fn step_backward(&mut self, sink: &mut impl RenderSink) -> bool {
		self.pause();
		let Some(cursor) = self.cursor else {
			return false;
		};
		self.seek(cursor.checked_sub(1), sink);
		if self.state == PlaybackState::Stopped {
			self.set_state(PlaybackState::Paused);
		}
		true
	}

	/// Resets the sink and replays steps up to and including `target`.
	/// `None` leaves nothing applied. Targets past the end are clamped.
	pub fn seek(&mut self, target: Option<usize>, sink: &mut impl RenderSink) {
		let target = target.map(|t| t.min(self.steps.len().saturating_sub(1)));
		sink.reset_all_to_neutral();
		sink.clear_totals();
		sink.set_status_text(&self.idle_status);
		if let Some(t) = target.filter(|_| !self.steps.is_empty()) {
			for step in &self.steps[..=t] {
				step.apply(sink);
			}
			self.cursor = Some(t);
		} else {
			self.cursor = None;
		}
	}

	/// Back to "nothing applied": neutral sink, cursor rewound.
	pub fn rewind(&mut self, sink: &mut impl RenderSink) {
		self.pause();
		self.seek(None, sink);
		if !self.steps.is_empty() {
			self.set_state(PlaybackState::Prepared);
		}
	}

	fn advance(&mut self, sink: &mut impl RenderSink) -> bool {
		let next = self.cursor.map_or(0, |c| c + 1);
		let Some(step) = self.steps.get(next) else {
			return false;
		};
		step.apply(sink);
		self.cursor = Some(next);
		true
	}

	fn set_state(&mut self, state: PlaybackState) {
		if self.state != state {
			debug!("Playback {:?} -> {:?}", self.state, state);
			self.state = state;
		}
	}

	/// True when there is nothing left to apply.
	pub fn at_end(&self) -> bool {
		self.steps.is_empty() || self.cursor == Some(self.steps.len() - 1)
	}

	/// True while auto-play is running.
	pub fn is_playing(&self) -> bool {
		self.state == PlaybackState::Playing
	}

	/// Current lifecycle state.
	pub fn state(&self) -> PlaybackState {
		self.state
	}

	/// Index of the last applied step; `None` when nothing is applied.
	pub fn cursor(&self) -> Option<usize> {
		self.cursor
	}

	/// Number of steps in the loaded timeline.
	pub fn len(&self) -> usize {
		self.steps.len()
	}

	/// True when no timeline is loaded.
	pub fn is_empty(&self) -> bool {
		self.steps.is_empty()
	}
}
