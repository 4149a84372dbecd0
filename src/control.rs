use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::info;

use crate::catalog::Catalog;
use crate::input::Inputs;
use crate::render::screen::Screen;
use crate::slideshow::Slideshow;

/// Which image source is currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Fixed,
    Sequence,
}

/// What the event loop must do after a poll tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Schedule the next tick at the poll cadence.
    Continue,
    /// The shutdown button was pressed for the first time: release the
    /// hardware, run the shutdown command, and stop polling.
    Shutdown,
}

/// Mode state machine driving the display.
///
/// Owns the slideshow scheduler and the shutdown latch. All methods are
/// synchronous and take the current instant, so tests drive them with
/// scripted inputs and a recording screen.
pub struct Controller {
    fixed_image: PathBuf,
    slides: Slideshow,
    mode: Option<Mode>,
    shutdown_latched: bool,
}

impl Controller {
    pub fn new(catalog: Catalog, dwell: Duration) -> Self {
        Self {
            fixed_image: catalog.fixed_image,
            slides: Slideshow::new(catalog.sequence_images, dwell),
            mode: None,
            shutdown_latched: false,
        }
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn slides(&self) -> &Slideshow {
        &self.slides
    }

    /// Establish the initial mode from the switch level so the right image
    /// is on screen before the first scheduled tick. The shutdown button is
    /// not consulted here.
    pub fn startup<I: Inputs, S: Screen>(&mut self, now: Instant, inputs: &mut I, screen: &mut S) {
        let engaged = inputs.switch_engaged();
        self.apply_switch(engaged, now, screen);
    }

    /// Evaluate one poll tick. The shutdown check strictly precedes the
    /// switch check; once the latch is set the tick is inert.
    pub fn tick<I: Inputs, S: Screen>(
        &mut self,
        now: Instant,
        inputs: &mut I,
        screen: &mut S,
    ) -> TickOutcome {
        if self.shutdown_latched {
            return TickOutcome::Continue;
        }

        if inputs.shutdown_pressed() {
            self.shutdown_latched = true;
            self.slides.cancel();
            info!("shutdown button pressed");
            return TickOutcome::Shutdown;
        }

        self.apply_switch(inputs.switch_engaged(), now, screen);
        TickOutcome::Continue
    }

    /// Run the slideshow advance if its deadline has passed. The mode guard
    /// mirrors the scheduler's ownership rule: a deadline is only armed
    /// while in sequence mode.
    pub fn run_due_slides<S: Screen>(&mut self, now: Instant, screen: &mut S) {
        if self.mode == Some(Mode::Sequence) {
            self.slides.fire_due(now, screen);
        }
    }

    /// Deadline of the pending slideshow advance, if any.
    pub fn next_slide_deadline(&self) -> Option<Instant> {
        self.slides.deadline()
    }

    fn apply_switch<S: Screen>(&mut self, engaged: bool, now: Instant, screen: &mut S) {
        if engaged {
            if self.mode != Some(Mode::Fixed) {
                self.slides.cancel();
                info!(image = %self.fixed_image.display(), "switch engaged; presenting fixed image");
                screen.present(&self.fixed_image);
                self.mode = Some(Mode::Fixed);
            }
        } else if self.mode != Some(Mode::Sequence) {
            info!("switch released; starting slideshow");
            self.mode = Some(Mode::Sequence);
            self.slides.start(now, screen);
        }
    }
}
