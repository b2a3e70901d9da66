use std::io::{self, Write};

use crate::event::RoundEvent;
use crate::simulation::Floor;

use super::{clock, grouped, signed};

const WIDTH: usize = 60;

/// Writes the whole-floor summary followed by one line per table.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn render<W: Write>(out: &mut W, floor: &Floor<'_>, events: &[&RoundEvent]) -> io::Result<()> {
    let counts = floor.roster().counts();

    writeln!(out, "\n{}", "=".repeat(WIDTH))?;
    writeln!(out, "⏱  SIMULATION TIME: {}", clock(floor.sim_time))?;
    writeln!(out, "🏦 CASINO PROFIT: {}", signed(floor.casino.profit()))?;
    let hands = i64::try_from(floor.casino.hands_played()).unwrap_or(i64::MAX);
    writeln!(out, "🃏 HANDS PLAYED: {}", grouped(hands))?;
    writeln!(
        out,
        "🎲 Active: {} | ⏳ Waiting: {} | 🚪 Finished: {}",
        counts.active, counts.waiting, counts.finished
    )?;
    writeln!(out, "{}", "-".repeat(WIDTH))?;

    for event in events {
        writeln!(
            out,
            "Table {} | Players {}/{} | Profit Δ {:+}",
            event.table_id,
            event.seated(),
            event.seats_after.len(),
            event.profit_delta
        )?;
    }

    writeln!(out, "{}", "=".repeat(WIDTH))
}
