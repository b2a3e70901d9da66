//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use bjfloor::{
    Card, Category, Floor, History, Player, Rank, RosterError, RosterStore, RoundEvent,
    RoundObserver, Suit,
};

pub const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

pub fn player(id: u32, name: &str, balance: i64, rounds_left: i64) -> Player {
    Player {
        first_name: name.to_owned(),
        last_name: "Tester".to_owned(),
        email: format!("{}{id}@example.com", name.to_lowercase()),
        id,
        category: Category::Casual,
        balance,
        rounds_left,
        history: History::new(),
    }
}

/// Records every tick it is shown.
#[derive(Default)]
pub struct Recorder {
    pub ticks: Vec<Tick>,
}

pub struct Tick {
    pub sim_time: u64,
    pub events: Vec<RoundEvent>,
    pub player_ids: Vec<u32>,
    pub finished: Vec<Player>,
    pub waiting: usize,
}

impl RoundObserver for Recorder {
    fn on_tick(&mut self, floor: &Floor<'_>, events: &[&RoundEvent]) {
        self.ticks.push(Tick {
            sim_time: floor.sim_time,
            events: events.iter().map(|e| (*e).clone()).collect(),
            player_ids: floor.roster().players().iter().map(|p| p.id).collect(),
            finished: floor.casino.finished().to_vec(),
            waiting: floor.waiting.len(),
        });
    }
}

/// Keeps every snapshot in memory.
#[derive(Default)]
pub struct MemoryStore {
    pub snapshots: Vec<Vec<Player>>,
    pub fail: bool,
}

impl RosterStore for MemoryStore {
    fn store(&mut self, players: &[&Player]) -> Result<(), RosterError> {
        if self.fail {
            return Err(RosterError::Io(std::io::Error::other("disk full")));
        }
        self.snapshots
            .push(players.iter().map(|p| (*p).clone()).collect());
        Ok(())
    }
}

pub fn temp_path(name: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "bjfloor-test-{}-{n}-{name}",
        std::process::id()
    ))
}
