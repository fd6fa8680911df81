use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use crossterm::event;
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use crate::core::input::InputEvent;
use crate::core::terminal::TuiRenderer;
use crate::game::controller::GameController;

/// Fixed-rate loop: drain input, draw, sleep until the next tick.
pub struct Engine {
    controller: GameController,
    frame_time: Duration,
}

impl Engine {
    pub fn new(controller: GameController, fps: u32) -> Self {
        let frame_time = Duration::from_secs(1) / fps.max(1);
        Self { controller, frame_time }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        info!(frame_ms = self.frame_time.as_millis() as u64, "engine started");
        let mut frames: u64 = 0;

        loop {
            let frame_start = Instant::now();

            // INPUT (non-blocking, everything queued since last frame)
            while event::poll(Duration::ZERO).context("polling terminal events")? {
                let raw = event::read().context("reading terminal event")?;
                let Some(input) = InputEvent::from_terminal(&raw) else {
                    continue;
                };
                if let ControlFlow::Break(()) = self.controller.handle_event(input) {
                    info!(frames, "engine stopped");
                    return Ok(());
                }
            }

            // RENDER
            terminal
                .draw(|f| self.controller.draw(&mut TuiRenderer::new(f)))
                .context("drawing frame")?;
            frames += 1;

            // PACE
            match self.frame_time.checked_sub(frame_start.elapsed()) {
                Some(rest) => std::thread::sleep(rest),
                None => debug!(frames, "frame overran its budget"),
            }
        }
    }
}
