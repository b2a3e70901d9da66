//! The tick-driven simulation loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::casino::Casino;
use crate::error::{RoundError, SimulationError};
use crate::event::RoundEvent;
use crate::options::CasinoOptions;
use crate::pool::WaitingPool;
use crate::roster::{Roster, RosterStore};

/// Simulated seconds per tick.
pub const TICK_SECONDS: u64 = 10;

/// Finished players are revived whenever the clock is a multiple of this.
pub const REVIVAL_INTERVAL: u64 = 1800;

/// Longest sleep between interrupt checks while pausing.
const PAUSE_SLICE: Duration = Duration::from_millis(50);

/// Shared flag asking a running simulation to stop.
///
/// Clones share the same flag, so one can be handed to a signal handler.
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    /// Creates a flag that is not raised.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks the simulation to stop.
    pub fn request(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns whether a stop was requested.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// State of the floor handed to observers after a tick.
#[derive(Debug, Clone, Copy)]
pub struct Floor<'a> {
    /// The casino.
    pub casino: &'a Casino,
    /// Players waiting for a seat.
    pub waiting: &'a WaitingPool,
    /// Simulated seconds elapsed.
    pub sim_time: u64,
}

impl<'a> Floor<'a> {
    /// Returns a roster over the floor.
    #[must_use]
    pub const fn roster(&self) -> Roster<'a> {
        Roster::new(self.casino, self.waiting)
    }
}

/// Receives the events of each tick, already filtered by the view mode.
pub trait RoundObserver {
    /// Called once per tick after every table has played.
    fn on_tick(&mut self, floor: &Floor<'_>, events: &[&RoundEvent]);
}

/// A simulation run over a casino and its waiting pool.
#[derive(Debug, Clone)]
pub struct Simulation {
    casino: Casino,
    waiting: WaitingPool,
    options: CasinoOptions,
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Creates a simulation with the given seed.
    #[must_use]
    pub fn new(casino: Casino, waiting: WaitingPool, options: CasinoOptions, seed: u64) -> Self {
        Self {
            casino,
            waiting,
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the casino.
    #[must_use]
    pub const fn casino(&self) -> &Casino {
        &self.casino
    }

    /// Returns the waiting pool.
    #[must_use]
    pub const fn waiting(&self) -> &WaitingPool {
        &self.waiting
    }

    /// Returns the options.
    #[must_use]
    pub const fn options(&self) -> &CasinoOptions {
        &self.options
    }

    /// Consumes the simulation and returns the casino and waiting pool.
    #[must_use]
    pub fn into_parts(self) -> (Casino, WaitingPool) {
        (self.casino, self.waiting)
    }

    /// Returns the number of ticks a full run plays.
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.options.duration_minutes.saturating_mul(60) / TICK_SECONDS
    }

    /// Runs the simulation and returns the simulated seconds elapsed.
    ///
    /// Each tick plays one round at every table, hands the events picked by
    /// the view mode to `observer`, pauses for the tick delay, revives
    /// finished players on revival boundaries, stores a roster snapshot and
    /// refills seats. The run ends after the configured duration or as soon
    /// as `stop` is raised. A final snapshot is stored either way.
    ///
    /// # Errors
    ///
    /// Returns an error if a round fails. The final snapshot is still stored.
    pub fn run(
        &mut self,
        observer: &mut dyn RoundObserver,
        store: &mut dyn RosterStore,
        stop: &StopFlag,
    ) -> Result<u64, SimulationError> {
        let ticks = self.tick_count();
        let seated = self.casino.fill_empty_seats(&mut self.waiting);
        log::info!(
            "starting simulation: {} tables, {} seated, {} waiting, {} ticks",
            self.casino.tables().len(),
            seated,
            self.waiting.len(),
            ticks
        );

        let mut sim_time = 0;
        let outcome = self.run_ticks(ticks, &mut sim_time, observer, store, stop);
        self.snapshot(store);
        outcome?;

        log::info!(
            "simulation ended at {}s: profit {}, {} hands played",
            sim_time,
            self.casino.profit(),
            self.casino.hands_played()
        );
        Ok(sim_time)
    }

    fn run_ticks(
        &mut self,
        ticks: u64,
        sim_time: &mut u64,
        observer: &mut dyn RoundObserver,
        store: &mut dyn RosterStore,
        stop: &StopFlag,
    ) -> Result<(), SimulationError> {
        for _ in 0..ticks {
            if stop.is_requested() {
                log::warn!("interrupt received, stopping at {}s", *sim_time);
                break;
            }

            let events = self.play_tick()?;
            *sim_time += TICK_SECONDS;

            let floor = Floor {
                casino: &self.casino,
                waiting: &self.waiting,
                sim_time: *sim_time,
            };
            observer.on_tick(&floor, &self.options.view.select(&events));

            if pause(self.options.tick_delay, stop) {
                log::warn!("interrupt received, stopping at {}s", *sim_time);
                break;
            }

            if *sim_time % REVIVAL_INTERVAL == 0 {
                let revived = self.casino.revive_finished(&mut self.waiting, &mut self.rng);
                if revived > 0 {
                    log::info!("{revived} players have returned to the floor");
                }
            }

            self.snapshot(store);
            self.casino.fill_empty_seats(&mut self.waiting);
        }
        Ok(())
    }

    /// Plays one round at every table, in table order.
    fn play_tick(&mut self) -> Result<Vec<RoundEvent>, RoundError> {
        let mut events = Vec::with_capacity(self.casino.tables().len());
        for table in 0..self.casino.tables().len() {
            let event = self
                .casino
                .play_round(table, &mut self.waiting, &mut self.rng)?;
            log::debug!(
                "table {} round {} profit {:+}",
                event.table_id,
                event.round,
                event.profit_delta
            );
            events.push(event);
        }
        Ok(events)
    }

    fn snapshot(&self, store: &mut dyn RosterStore) {
        let players = Roster::new(&self.casino, &self.waiting).players();
        if let Err(err) = store.store(&players) {
            log::warn!("roster snapshot failed: {err}");
        }
    }
}

/// Sleeps for `delay`, waking early if `stop` is raised.
///
/// Returns whether a stop was requested.
fn pause(delay: Duration, stop: &StopFlag) -> bool {
    let deadline = Instant::now() + delay;
    loop {
        if stop.is_requested() {
            return true;
        }
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return false;
        }
        thread::sleep(remaining.min(PAUSE_SLICE));
    }
}
