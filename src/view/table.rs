use std::io::{self, Write};

use crate::event::RoundEvent;
use crate::simulation::Floor;

use super::{clock, grouped, signed};

const WIDTH: usize = 61;

/// Round results of one table grouped by outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    /// Players who won, with the amount won.
    pub winners: Vec<(String, i64)>,
    /// Players who lost, with the amount lost.
    pub losers: Vec<(String, i64)>,
    /// Players who pushed.
    pub pushes: Vec<String>,
    /// Sum of all decided stakes.
    pub total_bets: i64,
    /// Sum paid out to winners.
    pub winnings: i64,
    /// Sum collected from losers.
    pub losses: i64,
}

impl Tally {
    /// Groups the results of `event`.
    #[must_use]
    pub fn of(event: &RoundEvent) -> Self {
        let mut tally = Self::default();
        for result in &event.results {
            let name = result.player_name.clone();
            match result.delta {
                d if d < 0 => {
                    tally.winners.push((name, -d));
                    tally.winnings -= d;
                    tally.total_bets -= d;
                }
                d if d > 0 => {
                    tally.losers.push((name, d));
                    tally.losses += d;
                    tally.total_bets += d;
                }
                _ => tally.pushes.push(name),
            }
        }
        tally
    }
}

fn outcome_text(event: &RoundEvent, seat: usize, name: &str) -> String {
    event
        .results
        .iter()
        .find(|r| r.seat == seat && r.player_name == name)
        .map_or_else(
            || "-".to_owned(),
            |r| match r.delta {
                d if d > 0 => format!("Lost {d}"),
                d if d < 0 => format!("Won {}", -d),
                _ => "Push".to_owned(),
            },
        )
}

fn boxed_line<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "│ {text:<width$} │", width = WIDTH - 2)
}

/// Writes the detailed breakdown of one table's round.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn render<W: Write>(out: &mut W, floor: &Floor<'_>, event: &RoundEvent) -> io::Result<()> {
    let rule = "─".repeat(WIDTH);
    let header = format!(
        "TABLE {} | ROUND {}   ⏱ {}   Δ {:+} Profit",
        event.table_id,
        event.round,
        clock(floor.sim_time),
        event.profit_delta
    );

    writeln!(out, "\n┌{rule}┐")?;
    writeln!(out, "│{header:^WIDTH$}│")?;
    writeln!(out, "├{rule}┤")?;
    writeln!(out, "│ Seat │ Player        │ Money      │ Rounds │ Outcome        │")?;
    writeln!(out, "│──────┼───────────────┼────────────┼────────┼────────────────│")?;

    for snapshot in &event.seats_after {
        let seat = snapshot.seat;
        match &snapshot.occupant {
            None => writeln!(
                out,
                "│ {seat:^3}  │ {:<13} │ {:>10} │ {:>6} │ {:<13}  │",
                "- empty -", "-", "-", ""
            )?,
            Some(occupant) => writeln!(
                out,
                "│ {seat:^3}  │ {:<13} │ {:>10} │ {:>6} │ {:<13}  │",
                occupant.name,
                grouped(occupant.balance),
                occupant.rounds_left,
                outcome_text(event, seat, &occupant.name)
            )?,
        }
    }
    writeln!(out, "└{rule}┘")?;

    let tally = Tally::of(event);
    writeln!(out, "\n┌{rule}┐")?;
    writeln!(out, "│{:^WIDTH$}│", "ROUND RESULTS")?;
    writeln!(out, "├{rule}┤")?;

    if !tally.winners.is_empty() {
        let names: Vec<String> = tally
            .winners
            .iter()
            .map(|(name, amount)| format!("{name} (+{amount})"))
            .collect();
        boxed_line(out, &format!("Winners: {}", names.join(", ")))?;
    }
    if !tally.losers.is_empty() {
        let names: Vec<String> = tally
            .losers
            .iter()
            .map(|(name, amount)| format!("{name} (-{amount})"))
            .collect();
        boxed_line(out, &format!("Losers:  {}", names.join(", ")))?;
    }
    if !tally.pushes.is_empty() {
        boxed_line(out, &format!("Push:    {}", tally.pushes.join(", ")))?;
    }

    writeln!(out, "├{rule}┤")?;
    boxed_line(out, &format!("Total Bets: {}", grouped(tally.total_bets)))?;
    boxed_line(out, &format!("Total Winnings: {}", grouped(tally.winnings)))?;
    boxed_line(out, &format!("Total Losses: {}", grouped(tally.losses)))?;
    writeln!(out, "├{rule}┤")?;
    boxed_line(
        out,
        &format!(
            "Total: {} Won | {} Lost | {} Push",
            tally.winners.len(),
            tally.losers.len(),
            tally.pushes.len()
        ),
    )?;
    writeln!(out, "└{rule}┘")?;

    writeln!(out, "\nTOTAL CASINO PROFIT: {}", signed(floor.casino.profit()))?;
    writeln!(out, "{}", "-".repeat(WIDTH + 2))
}
