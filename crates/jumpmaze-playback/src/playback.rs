//! Playback driver: steps a search on a timer.
//!
//! [`Playback`] wraps a running [`Search`] and turns user actions and clock
//! ticks into cursor moves. Stepping forward replays recorded steps first and
//! only advances the search once the cursor reaches the newest step, so
//! rewinding and replaying never re-runs search logic.

use std::time::{Duration, Instant};

use jumpmaze_search::{Search, SearchStep};

use crate::render::status_text;

/// Default delay between automatic steps.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(150);

pub const STATUS_READY: &str = "press play or next to start";
pub const STATUS_RUNNING: &str = "running...";
pub const STATUS_PAUSED: &str = "paused, press play or next";
pub const STATUS_NEXT: &str = "next step";
pub const STATUS_PREVIOUS: &str = "previous step";

/// User requests understood by [`Playback::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackAction {
    /// Start stepping automatically.
    Play,
    /// Stop automatic stepping.
    Pause,
    /// Toggle between play and pause.
    TogglePause,
    /// Pause and show the next step.
    Next,
    /// Pause and show the previous step.
    Back,
}

/// Configuration for creating a [`Playback`].
pub struct PlaybackConfig {
    pub search: Box<dyn Search>,
    pub interval: Duration,
}

impl PlaybackConfig {
    /// Configuration with the default step interval.
    pub fn new(search: Box<dyn Search>) -> Self {
        Self {
            search,
            interval: DEFAULT_INTERVAL,
        }
    }
}

/// Timer-paced playback of a search.
pub struct Playback {
    search: Box<dyn Search>,
    interval: Duration,
    playing: bool,
    last_step: Option<Instant>,
    status: String,
}

impl Playback {
    /// Create a paused playback showing the search's first step.
    pub fn new(cfg: PlaybackConfig) -> Self {
        Self {
            search: cfg.search,
            interval: cfg.interval,
            playing: false,
            last_step: None,
            status: STATUS_READY.to_string(),
        }
    }

    /// Apply a user action at time `now`. Returns whether the displayed
    /// state changed.
    pub fn update(&mut self, action: PlaybackAction, now: Instant) -> bool {
        match action {
            PlaybackAction::Play => self.play(now),
            PlaybackAction::Pause => self.pause(),
            PlaybackAction::TogglePause => {
                if self.playing {
                    self.pause()
                } else {
                    self.play(now)
                }
            }
            PlaybackAction::Next => {
                self.playing = false;
                self.search.step_forward();
                self.status = STATUS_NEXT.to_string();
                true
            }
            PlaybackAction::Back => {
                self.playing = false;
                self.search.step_backward();
                self.status = STATUS_PREVIOUS.to_string();
                true
            }
        }
    }

    /// Advance playback if the interval has elapsed since the last step.
    /// Returns whether a step was taken.
    ///
    /// Playback stops by itself once the newest step is shown and the
    /// search has finished; the status then shows the search's outcome.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.playing {
            return false;
        }
        if let Some(last) = self.last_step {
            if now.saturating_duration_since(last) < self.interval {
                return false;
            }
        }
        self.last_step = Some(now);
        let stepped = self.search.step_forward();
        if !stepped || self.finished() {
            self.playing = false;
            self.status = self.search.message().to_string();
            log::debug!("playback stopped: {}", self.status);
        }
        stepped
    }

    /// When the next automatic step is due, if playing.
    pub fn next_deadline(&self) -> Option<Instant> {
        if !self.playing {
            return None;
        }
        Some(match self.last_step {
            Some(last) => last + self.interval,
            None => Instant::now(),
        })
    }

    /// The step currently shown.
    pub fn current(&self) -> Option<&SearchStep> {
        self.search.current()
    }

    /// The status line to display for the current step.
    pub fn status_line(&self) -> String {
        status_text(self.current(), &self.status)
    }

    /// The caller-facing status, independent of the current step.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn search(&self) -> &dyn Search {
        self.search.as_ref()
    }

    /// Whether the newest step is shown and the search is over.
    pub fn finished(&self) -> bool {
        self.search.state().is_terminal() && self.search.history().at_end()
    }

    fn play(&mut self, now: Instant) -> bool {
        if self.finished() {
            self.status = self.search.message().to_string();
            return false;
        }
        self.playing = true;
        self.last_step = Some(now);
        self.status = STATUS_RUNNING.to_string();
        true
    }

    fn pause(&mut self) -> bool {
        let was_playing = self.playing;
        self.playing = false;
        self.status = STATUS_PAUSED.to_string();
        was_playing
    }
}
