//! End-to-end transitions of the mode state machine, driven with scripted
//! input levels and a recording screen.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use switch_frame::catalog::Catalog;
use switch_frame::control::{Controller, Mode, TickOutcome};
use switch_frame::input::Inputs;
use switch_frame::render::screen::Screen;

const POLL: Duration = Duration::from_millis(200);
const DWELL: Duration = Duration::from_secs(10);

struct Levels {
    switch_low: bool,
    shutdown_low: bool,
}

impl Levels {
    fn released() -> Self {
        Self {
            switch_low: false,
            shutdown_low: false,
        }
    }

    fn engaged() -> Self {
        Self {
            switch_low: true,
            shutdown_low: false,
        }
    }
}

impl Inputs for Levels {
    fn switch_engaged(&mut self) -> bool {
        self.switch_low
    }

    fn shutdown_pressed(&mut self) -> bool {
        self.shutdown_low
    }
}

#[derive(Default)]
struct RecordingScreen {
    shown: Vec<PathBuf>,
}

impl Screen for RecordingScreen {
    fn present(&mut self, image: &Path) {
        self.shown.push(image.to_path_buf());
    }
}

fn controller(sequence: &[&str]) -> Controller {
    let catalog = Catalog {
        fixed_image: PathBuf::from("fixed.png"),
        sequence_images: sequence.iter().map(PathBuf::from).collect(),
    };
    Controller::new(catalog, DWELL)
}

#[test]
fn inactive_switch_at_startup_enters_sequence_mode() {
    let mut ctl = controller(&["a.png", "b.png", "c.png"]);
    let mut inputs = Levels::released();
    let mut screen = RecordingScreen::default();

    ctl.startup(Instant::now(), &mut inputs, &mut screen);

    assert_eq!(ctl.mode(), Some(Mode::Sequence));
    assert_eq!(screen.shown, vec![PathBuf::from("a.png")]);
    assert_eq!(ctl.slides().cursor(), 1);
    assert!(ctl.next_slide_deadline().is_some());
}

#[test]
fn engaged_switch_at_startup_enters_fixed_mode() {
    let mut ctl = controller(&["a.png", "b.png"]);
    let mut inputs = Levels::engaged();
    let mut screen = RecordingScreen::default();

    ctl.startup(Instant::now(), &mut inputs, &mut screen);

    assert_eq!(ctl.mode(), Some(Mode::Fixed));
    assert_eq!(screen.shown, vec![PathBuf::from("fixed.png")]);
    assert!(ctl.next_slide_deadline().is_none());
}

#[test]
fn sequence_ticks_do_not_re_present() {
    let mut ctl = controller(&["a.png", "b.png"]);
    let mut inputs = Levels::released();
    let mut screen = RecordingScreen::default();
    let start = Instant::now();

    ctl.startup(start, &mut inputs, &mut screen);
    for i in 1..=10u32 {
        let now = start + POLL * i;
        assert_eq!(
            ctl.tick(now, &mut inputs, &mut screen),
            TickOutcome::Continue
        );
        ctl.run_due_slides(now, &mut screen);
    }

    // ten ticks within the dwell time: only the startup presentation
    assert_eq!(screen.shown.len(), 1);
}

#[test]
fn slideshow_advances_on_its_own_deadline_and_wraps() {
    let mut ctl = controller(&["a.png", "b.png", "c.png"]);
    let mut inputs = Levels::released();
    let mut screen = RecordingScreen::default();

    ctl.startup(Instant::now(), &mut inputs, &mut screen);
    for _ in 0..3 {
        let due = ctl.next_slide_deadline().unwrap();
        ctl.run_due_slides(due, &mut screen);
    }

    assert_eq!(
        screen.shown,
        ["a.png", "b.png", "c.png", "a.png"]
            .iter()
            .map(PathBuf::from)
            .collect::<Vec<_>>()
    );
    assert_eq!(ctl.slides().cursor(), 1);
}

#[test]
fn engaging_the_switch_mid_sequence_cancels_the_pending_advance() {
    let mut ctl = controller(&["a.png", "b.png"]);
    let mut screen = RecordingScreen::default();
    let start = Instant::now();

    let mut inputs = Levels::released();
    ctl.startup(start, &mut inputs, &mut screen);
    let pending = ctl.next_slide_deadline().unwrap();

    let mut inputs = Levels::engaged();
    ctl.tick(start + POLL, &mut inputs, &mut screen);

    assert_eq!(ctl.mode(), Some(Mode::Fixed));
    assert_eq!(screen.shown.last().unwrap(), Path::new("fixed.png"));
    assert!(ctl.next_slide_deadline().is_none());

    // the revoked deadline must not fire
    ctl.run_due_slides(pending + Duration::from_secs(1), &mut screen);
    assert_eq!(screen.shown.len(), 2);
}

#[test]
fn releasing_the_switch_resumes_the_slideshow_where_it_left_off() {
    let mut ctl = controller(&["a.png", "b.png", "c.png"]);
    let mut screen = RecordingScreen::default();
    let start = Instant::now();

    let mut inputs = Levels::released();
    ctl.startup(start, &mut inputs, &mut screen); // shows a.png

    let mut inputs = Levels::engaged();
    ctl.tick(start + POLL, &mut inputs, &mut screen); // shows fixed.png

    let mut inputs = Levels::released();
    ctl.tick(start + POLL * 2, &mut inputs, &mut screen); // resumes

    assert_eq!(
        screen.shown,
        ["a.png", "fixed.png", "b.png"]
            .iter()
            .map(PathBuf::from)
            .collect::<Vec<_>>()
    );
    assert_eq!(ctl.mode(), Some(Mode::Sequence));
}

#[test]
fn shutdown_fires_once_and_makes_later_ticks_inert() {
    let mut ctl = controller(&["a.png", "b.png"]);
    let mut screen = RecordingScreen::default();
    let start = Instant::now();

    let mut inputs = Levels::released();
    ctl.startup(start, &mut inputs, &mut screen);

    let mut inputs = Levels {
        switch_low: false,
        shutdown_low: true,
    };
    assert_eq!(
        ctl.tick(start + POLL, &mut inputs, &mut screen),
        TickOutcome::Shutdown
    );
    assert_eq!(
        ctl.tick(start + POLL * 2, &mut inputs, &mut screen),
        TickOutcome::Continue
    );

    // nothing was presented after the latch, and the slideshow is dead
    assert_eq!(screen.shown, vec![PathBuf::from("a.png")]);
    assert!(ctl.next_slide_deadline().is_none());
}
