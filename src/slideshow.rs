use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::render::screen::Screen;

/// Timed slideshow over an ordered image list.
///
/// The pending advance is modeled as a deadline rather than an armed OS
/// timer: the event loop asks for [`deadline`](Self::deadline), sleeps until
/// it, and calls [`fire_due`](Self::fire_due). At most one deadline is
/// outstanding at a time.
#[derive(Debug)]
pub struct Slideshow {
    images: Vec<PathBuf>,
    cursor: usize,
    dwell: Duration,
    deadline: Option<Instant>,
}

impl Slideshow {
    /// `images` must be non-empty; the catalog guarantees this.
    pub fn new(images: Vec<PathBuf>, dwell: Duration) -> Self {
        debug_assert!(!images.is_empty());
        Self {
            images,
            cursor: 0,
            dwell,
            deadline: None,
        }
    }

    /// Present the image at the cursor, advance circularly, and arm the
    /// next deadline.
    pub fn start<S: Screen>(&mut self, now: Instant, screen: &mut S) {
        self.advance(now, screen);
    }

    /// Run the pending advance if its deadline has been reached; re-arms
    /// itself, so the slideshow keeps cycling without outside help.
    pub fn fire_due<S: Screen>(&mut self, now: Instant, screen: &mut S) {
        if self.deadline.is_some_and(|due| now >= due) {
            self.advance(now, screen);
        }
    }

    /// Revoke the pending advance. Safe to call when nothing is armed.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn advance<S: Screen>(&mut self, now: Instant, screen: &mut S) {
        screen.present(&self.images[self.cursor]);
        self.cursor = (self.cursor + 1) % self.images.len();
        self.deadline = Some(now + self.dwell);
    }
}
