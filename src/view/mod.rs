//! Terminal rendering of round events.

use std::io::Write;

use crate::error::ViewError;
use crate::event::RoundEvent;
use crate::options::ViewMode;
use crate::simulation::{Floor, RoundObserver};

mod cards;
mod casino;
mod player;
mod table;

pub use cards::card_art;
pub use player::{PlayerStatus, render as render_player};
pub use casino::render as render_casino;
pub use table::{Tally, render as render_table};

/// Renders each tick to a writer according to a view mode.
#[derive(Debug)]
pub struct Terminal<W: Write> {
    out: W,
    view: ViewMode,
}

impl<W: Write> Terminal<W> {
    /// Creates a terminal writing to `out`.
    pub const fn new(out: W, view: ViewMode) -> Self {
        Self { out, view }
    }

    /// Consumes the terminal and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, floor: &Floor<'_>, events: &[&RoundEvent]) -> Result<(), ViewError> {
        match &self.view {
            ViewMode::Casino => casino::render(&mut self.out, floor, events)?,
            ViewMode::Table(_) => {
                for event in events {
                    table::render(&mut self.out, floor, event)?;
                }
            }
            ViewMode::Player(name) => {
                if !events.is_empty() {
                    player::render(&mut self.out, floor, name, events)?;
                }
            }
        }
        Ok(())
    }
}

impl<W: Write> RoundObserver for Terminal<W> {
    fn on_tick(&mut self, floor: &Floor<'_>, events: &[&RoundEvent]) {
        match self.render(floor, events) {
            Ok(()) => {}
            Err(ViewError::UnknownTrackedPlayer(name)) => {
                log::warn!("tracked player {name} not found");
                if let Err(err) = writeln!(self.out, "\nPlayer {name} no longer in simulation.") {
                    log::warn!("failed to write view: {err}");
                }
            }
            Err(err) => log::warn!("{err}"),
        }
    }
}

/// Formats simulated seconds as `HH:MM:SS`.
#[must_use]
pub fn clock(sim_time: u64) -> String {
    let hours = sim_time / 3600;
    let minutes = (sim_time % 3600) / 60;
    let seconds = sim_time % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Formats an amount with thousands separators, e.g. `-12,345`.
#[must_use]
pub fn grouped(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Like [`grouped`] but always carries a sign, e.g. `+1,200`.
#[must_use]
pub fn signed(amount: i64) -> String {
    if amount < 0 {
        grouped(amount)
    } else {
        format!("+{}", grouped(amount))
    }
}
