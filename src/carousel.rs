//! Auto-advancing slide carousels
//!
//! A carousel owns no timer. The event loop passes the current instant to
//! [`Carousel::tick`] on every frame, so a carousel that is dropped with its
//! page can never fire again.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    index: usize,
    interval: Duration,
    last_advance: Instant,
    paused: bool,
}

impl Carousel {
    pub fn new(len: usize, interval: Duration, now: Instant) -> Self {
        Self {
            len,
            index: 0,
            interval,
            last_advance: now,
            paused: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Advance one slide if the interval has elapsed. Returns whether the
    /// slide changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.paused || self.len < 2 {
            return false;
        }
        if now.saturating_duration_since(self.last_advance) < self.interval {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        self.last_advance = now;
        true
    }

    /// Stop auto-advance (pointer hovering the slide)
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume auto-advance with a full interval before the next slide
    pub fn resume(&mut self, now: Instant) {
        self.paused = false;
        self.last_advance = now;
    }

    pub fn toggle_pause(&mut self, now: Instant) {
        if self.paused {
            self.resume(now);
        } else {
            self.pause();
        }
    }

    /// Show a given slide and restart the interval
    pub fn select(&mut self, index: usize, now: Instant) {
        if index < self.len {
            self.index = index;
            self.last_advance = now;
        }
    }

    pub fn next(&mut self, now: Instant) {
        if self.len > 0 {
            self.select((self.index + 1) % self.len, now);
        }
    }

    pub fn previous(&mut self, now: Instant) {
        if self.len > 0 {
            self.select((self.index + self.len - 1) % self.len, now);
        }
    }
}
