//! Window event loop driving the poll tick and the slideshow deadline.
//!
//! Everything runs on this one thread: input sampling, mode transitions,
//! slideshow advances and rendering. The loop sleeps until the earlier of
//! the next poll tick and the pending slideshow deadline.

use std::process::Command;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{error, info};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window, WindowAttributes, WindowId},
};

use crate::catalog::Catalog;
use crate::config::Configuration;
use crate::control::{Controller, TickOutcome};
use crate::input::GpioInputs;
use crate::render::screen::WindowScreen;

/// Run the display until quit or shutdown.
///
/// # Errors
/// Returns an error if the GPIO pins, the window or the GPU surface cannot
/// be acquired.
pub fn run(cfg: Configuration, catalog: Catalog) -> Result<()> {
    let inputs = GpioInputs::new(cfg.switch_pin, cfg.shutdown_pin)?;
    let controller = Controller::new(catalog, cfg.slide_interval);

    let event_loop = EventLoop::new().context("create event loop")?;
    let mut app = App {
        cfg,
        controller,
        inputs: Some(inputs),
        window: None,
        screen: None,
        next_poll: None,
    };
    event_loop.run_app(&mut app).context("event loop failed")?;
    Ok(())
}

struct App {
    cfg: Configuration,
    controller: Controller,
    // None once released (quit or shutdown); dropping resets the pins
    inputs: Option<GpioInputs>,
    window: Option<Arc<Window>>,
    screen: Option<WindowScreen>,
    next_poll: Option<Instant>,
}

impl App {
    /// Leave the loop without shutting the machine down.
    fn quit(&mut self, event_loop: &ActiveEventLoop) {
        info!("quit requested; releasing inputs and closing");
        self.inputs = None;
        self.next_poll = None;
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.screen.is_some() {
            return;
        }

        let attrs = WindowAttributes::default().with_title("switch-frame");
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));
        window.set_fullscreen(Some(Fullscreen::Borderless(window.current_monitor())));
        window.set_cursor_visible(false);

        let mut screen =
            WindowScreen::new(window.clone(), self.cfg.canvas.width, self.cfg.canvas.height)
                .expect("initialize renderer");

        // show the right image immediately instead of waiting a poll interval
        let now = Instant::now();
        if let Some(inputs) = self.inputs.as_mut() {
            self.controller.startup(now, inputs, &mut screen);
        }

        self.window = Some(window);
        self.screen = Some(screen);
        self.next_poll = Some(now + self.cfg.poll_interval);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(win) = &self.window else { return };
        if win.id() != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.quit(event_loop),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Released
                    && let PhysicalKey::Code(KeyCode::Escape | KeyCode::KeyQ) = event.physical_key
                {
                    self.quit(event_loop);
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(screen) = self.screen.as_mut() {
                    screen.resize(size);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(screen) = self.screen.as_mut() {
                    screen.draw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(screen) = self.screen.as_mut() else {
            return;
        };
        let now = Instant::now();

        if self.next_poll.is_some_and(|due| now >= due) {
            let Some(inputs) = self.inputs.as_mut() else {
                return;
            };
            match self.controller.tick(now, inputs, screen) {
                TickOutcome::Shutdown => {
                    // release the pins before powering off
                    self.inputs = None;
                    self.next_poll = None;
                    run_shutdown(&self.cfg.shutdown_command);
                    event_loop.exit();
                    return;
                }
                TickOutcome::Continue => {
                    self.next_poll = Some(now + self.cfg.poll_interval);
                }
            }
        }

        self.controller.run_due_slides(now, screen);

        let mut wake = self.next_poll;
        if let Some(slide) = self.controller.next_slide_deadline() {
            wake = Some(wake.map_or(slide, |poll| poll.min(slide)));
        }
        match wake {
            Some(at) => event_loop.set_control_flow(ControlFlow::WaitUntil(at)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}

fn run_shutdown(command: &str) {
    info!(command, "issuing shutdown command");
    match Command::new("sh").arg("-c").arg(command).status() {
        Ok(status) if status.success() => {}
        Ok(status) => error!("shutdown command exited with status {status}"),
        Err(err) => error!("failed to spawn shutdown command: {err}"),
    }
}
