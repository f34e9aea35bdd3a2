//! Skill ticker rotation.
//!
//! The ticker cycles through `config.skills` on the home view. The timer
//! that drives it belongs to the host; this type only tracks which item is
//! current and whether a tick should advance it.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker {
    len: usize,
    index: usize,
    /// `None` once stopped, or when rotation is disabled.
    interval: Option<Duration>,
    pause_on_hover: bool,
    paused: bool,
}

impl Ticker {
    /// A ticker over `len` items. An interval of 0 disables rotation.
    pub fn new(len: usize, interval_ms: u64, pause_on_hover: bool) -> Self {
        let interval = (interval_ms > 0 && len > 1).then(|| Duration::from_millis(interval_ms));
        Self {
            len,
            index: 0,
            interval,
            pause_on_hover,
            paused: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Interval the host should schedule `tick` at, if any.
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some() && !self.paused
    }

    /// Advance to the next item. Returns the new index if it moved.
    pub fn tick(&mut self) -> Option<usize> {
        if !self.is_running() {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }

    /// Pointer entered (`true`) or left (`false`) the ticker.
    pub fn hover(&mut self, inside: bool) {
        if self.pause_on_hover {
            self.paused = inside;
        }
    }

    /// Clear the timer. Ticks are ignored afterwards.
    pub fn stop(&mut self) {
        self.interval = None;
    }
}
