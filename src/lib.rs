//! A tick-driven blackjack casino floor simulator.
//!
//! A [`Casino`] owns its tables, the players who have finished a session and
//! the house ledger. Each call to [`Casino::play_round`] plays one round at a
//! table: seated players bet, everyone (dealer included) draws to 18, hands
//! are settled, and finished players are swapped for players from the
//! [`WaitingPool`]. [`Simulation`] drives rounds on every table over a
//! simulated clock and hands the resulting [`RoundEvent`]s to an observer.
//!
//! # Example
//!
//! ```no_run
//! use bjfloor::{Casino, CasinoOptions, JsonRoster, Simulation, StopFlag, Terminal, WaitingPool};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let waiting: WaitingPool = bjfloor::factory::generate_pool(40, &mut rng).unwrap().into();
//! let options = CasinoOptions::default();
//! let casino = Casino::with_tables("Golden Ace", options.decks, &[6, 6, 4]).unwrap();
//!
//! let mut terminal = Terminal::new(std::io::stdout(), options.view.clone());
//! let mut store = JsonRoster::new("data/players.json");
//! let mut simulation = Simulation::new(casino, waiting, options, 42);
//! let seconds = simulation.run(&mut terminal, &mut store, &StopFlag::new()).unwrap();
//! println!("simulated {seconds} seconds");
//! ```

pub mod card;
pub mod casino;
pub mod error;
pub mod event;
pub mod factory;
pub mod hand;
pub mod options;
pub mod player;
pub mod pool;
pub mod roster;
pub mod shoe;
pub mod simulation;
pub mod table;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use casino::{Casino, resolve};
pub use error::{ConfigError, RosterError, RoundError, ShoeExhausted, SimulationError, ViewError};
pub use event::{Occupant, RoundEvent, SeatResult, SeatSnapshot};
pub use hand::Hand;
pub use options::{CasinoOptions, ViewMode};
pub use player::{Category, Entry, History, Outcome, Player};
pub use pool::WaitingPool;
pub use roster::{JsonRoster, Located, PoolCounts, Roster, RosterStore, Whereabouts};
pub use shoe::Shoe;
pub use simulation::{Floor, RoundObserver, Simulation, StopFlag};
pub use table::{Seat, Table};
pub use view::Terminal;
