use std::fmt;
use std::io::Write;

use crate::error::ViewError;
use crate::event::RoundEvent;
use crate::player::{Entry, Outcome};
use crate::roster::{Located, Whereabouts};
use crate::simulation::Floor;

use super::{card_art, clock, signed};

const BOX_WIDTH: usize = 78;

/// What a tracked player is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Seated at the table of the latest event.
    Playing,
    /// In the waiting pool.
    Waiting,
    /// In the finished pool.
    Resting,
    /// Seated at another table.
    Idle,
}

impl PlayerStatus {
    /// Classifies a player relative to the latest event they played in.
    #[must_use]
    pub fn classify(latest: &RoundEvent, located: &Located<'_>) -> Self {
        if latest.seat_of(located.player.name()).is_some() {
            return Self::Playing;
        }
        match located.whereabouts {
            Whereabouts::Waiting => Self::Waiting,
            Whereabouts::Finished => Self::Resting,
            Whereabouts::Seated { .. } => Self::Idle,
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Playing => "PLAYING",
            Self::Waiting => "WAITING",
            Self::Resting => "RESTING",
            Self::Idle => "IDLE",
        })
    }
}

fn outcome_label(entry: Entry) -> String {
    match entry {
        Entry(Outcome::Win, stake) => format!("✅ WIN  +{stake}"),
        Entry(Outcome::Loss, stake) => format!("❌ LOSS -{stake}"),
        Entry(Outcome::Push, _) => "⚖️ PUSH".to_owned(),
    }
}

fn boxed<W: Write>(out: &mut W, text: &str) -> std::io::Result<()> {
    writeln!(out, "│ {text:<width$} │", width = BOX_WIDTH - 2)
}

/// Writes the live view of the tracked player.
///
/// `events` are the events of this tick in which the player played; the last
/// one is shown.
///
/// # Errors
///
/// Returns [`ViewError::UnknownTrackedPlayer`] if the player is in no pool,
/// or an I/O error if writing fails.
pub fn render<W: Write>(
    out: &mut W,
    floor: &Floor<'_>,
    name: &str,
    events: &[&RoundEvent],
) -> Result<(), ViewError> {
    let roster = floor.roster();
    let Some(located) = roster.locate(name) else {
        return Err(ViewError::UnknownTrackedPlayer(name.to_owned()));
    };
    let Some(latest) = events.last() else {
        return Ok(());
    };
    let player = located.player;
    let status = PlayerStatus::classify(latest, &located);
    let (balance, rounds_left) = latest
        .seat_of(player.name())
        .map_or((player.balance, player.rounds_left), |(_, o)| {
            (o.balance, o.rounds_left)
        });
    let history = &player.history;
    let last = history.last().map(outcome_label).unwrap_or_default();
    let rule = "─".repeat(BOX_WIDTH);

    writeln!(out, "\n┌{rule}┐")?;
    boxed(
        out,
        &format!(
            "PLAYER VIEW | {} ({status}) | {last}   ⏱ {}",
            player.name(),
            clock(floor.sim_time)
        ),
    )?;
    writeln!(out, "├{rule}┤")?;
    boxed(out, &format!("Money Left: {balance}"))?;
    boxed(out, &format!("Rounds Left: {rounds_left}"))?;
    writeln!(out, "│{rule}│")?;
    boxed(
        out,
        &format!(
            "Win Rate (last {} hands): {:.1}%",
            history.len(),
            history.win_rate()
        ),
    )?;
    boxed(out, &format!("Average Bet: {:.2}", history.average_bet()))?;
    writeln!(out, "├{rule}┤")?;

    boxed(out, "Last Hand:")?;
    match latest.result_for(player.name()) {
        Some(result) => {
            match latest.hands.get(&result.seat) {
                Some(cards) => {
                    for line in card_art(cards) {
                        boxed(out, &line)?;
                    }
                }
                None => boxed(out, "  (Hand data missing)")?,
            }
            boxed(out, "Dealer Hand:")?;
            for line in card_art(&latest.dealer_hand) {
                boxed(out, &line)?;
            }
        }
        None => boxed(out, "  (Player did not play this round)")?,
    }

    writeln!(out, "├{rule}┤")?;
    boxed(out, "Recent Outcomes:")?;
    for entry in history.iter() {
        boxed(out, &outcome_label(*entry))?;
    }
    writeln!(out, "└{rule}┘")?;
    writeln!(out, "🏦 Casino Profit: {}", signed(floor.casino.profit()))?;
    Ok(())
}
