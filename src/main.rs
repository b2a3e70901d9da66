//! Command-line front end for the casino floor simulator.

use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bjfloor::{
    Casino, CasinoOptions, ConfigError, JsonRoster, Player, Simulation, StopFlag, Terminal,
    ViewMode, factory, roster,
};

const WIDTH: usize = 60;

/// Pause between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Speed {
    /// One second per round.
    Slow,
    /// Half a second per round.
    Medium,
    /// 0.15 seconds per round.
    Fast,
}

impl Speed {
    const fn delay(self) -> Duration {
        match self {
            Self::Slow => Duration::from_millis(1000),
            Self::Medium => Duration::from_millis(500),
            Self::Fast => Duration::from_millis(150),
        }
    }
}

/// What to follow while the simulation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    /// Overview of all tables.
    Casino,
    /// One table, chosen with --table.
    Table,
    /// One player by first name, chosen with --player.
    Player,
}

#[derive(Debug, Parser)]
#[command(name = "bjfloor", version)]
#[command(about = "Simulate a blackjack casino floor over simulated time")]
struct Cli {
    /// Casino name.
    #[arg(long, default_value = "Casino")]
    name: String,

    /// Number of tables.
    #[arg(short, long, default_value_t = 3)]
    #[arg(value_parser = clap::value_parser!(u16).range(1..=20))]
    tables: u16,

    /// Seats per table: one value for every table, or one per table.
    #[arg(short, long, value_delimiter = ',', default_value = "6")]
    #[arg(value_parser = clap::value_parser!(u16).range(1..=10))]
    seats: Vec<u16>,

    /// Simulated duration in minutes.
    #[arg(short, long, default_value_t = 32)]
    minutes: u64,

    /// Display speed.
    #[arg(long, value_enum, default_value_t = Speed::Medium)]
    speed: Speed,

    /// Pause between ticks in milliseconds, overriding --speed.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// View mode.
    #[arg(long, value_enum, default_value_t = View::Casino)]
    view: View,

    /// Table id to follow in table view.
    #[arg(long, required_if_eq("view", "table"))]
    table: Option<usize>,

    /// First name of the player to follow in player view.
    #[arg(long, required_if_eq("view", "player"))]
    player: Option<String>,

    /// Decks per shoe.
    #[arg(long, default_value_t = 20)]
    decks: u8,

    /// Seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of players to generate.
    #[arg(short, long, default_value_t = 100, conflicts_with = "load")]
    #[arg(value_parser = clap::value_parser!(u32).range(1..=1000))]
    players: u32,

    /// Load the player pool from a roster file instead of generating one.
    #[arg(long)]
    load: Option<PathBuf>,

    /// Where roster snapshots are written.
    #[arg(long, default_value = "data/players.json")]
    roster: PathBuf,
}

impl Cli {
    fn seat_layout(&self) -> Result<Vec<usize>, ConfigError> {
        let tables = usize::from(self.tables);
        match self.seats.as_slice() {
            [seats] => Ok(vec![usize::from(*seats); tables]),
            seats if seats.len() == tables => Ok(seats.iter().map(|&s| usize::from(s)).collect()),
            seats => Err(ConfigError::SeatLayoutMismatch {
                tables,
                seats: seats.len(),
            }),
        }
    }

    fn view_mode(&self) -> ViewMode {
        match self.view {
            View::Casino => ViewMode::Casino,
            View::Table => ViewMode::Table(self.table.unwrap_or_default()),
            View::Player => ViewMode::Player(self.player.clone().unwrap_or_default()),
        }
    }

    fn tick_delay(&self) -> Duration {
        self.delay_ms
            .map_or_else(|| self.speed.delay(), Duration::from_millis)
    }

    fn options(&self) -> CasinoOptions {
        CasinoOptions::default()
            .with_decks(self.decks)
            .with_duration_minutes(self.minutes)
            .with_tick_delay(self.tick_delay())
            .with_view(self.view_mode())
    }
}

fn banner(text: &str) {
    println!("\n{}", "=".repeat(WIDTH));
    println!("{text:^WIDTH$}");
    println!("{}\n", "=".repeat(WIDTH));
}

fn player_pool(cli: &Cli, seed: u64) -> Result<Vec<Player>, Box<dyn Error>> {
    if let Some(path) = &cli.load {
        let players = roster::load(path)?;
        log::info!("loaded {} players from {}", players.len(), path.display());
        return Ok(players);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let players = factory::generate_pool(cli.players, &mut rng)?;
    roster::save(&cli.roster, &players.iter().collect::<Vec<_>>())?;
    log::info!(
        "generated {} players, saved to {}",
        players.len(),
        cli.roster.display()
    );
    Ok(players)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);
    let seats = cli.seat_layout()?;
    let options = cli.options();
    options.validate(seats.len())?;
    let casino = Casino::with_tables(cli.name.as_str(), options.decks, &seats)?;
    let players = player_pool(&cli, seed)?;

    banner("CASINO SIMULATOR");
    println!("  Casino: {}", casino.name());
    println!("  Tables: {}", casino.tables().len());
    for table in casino.tables() {
        println!("    Table {}: {} seats", table.id(), table.seat_count());
    }
    println!("  Players: {}", players.len());
    println!("  Delay: {:?} per round", options.tick_delay);
    println!("  Seed: {seed}");
    println!("\n  Press Ctrl+C to stop the simulation anytime\n");

    let stop = StopFlag::new();
    let signal = stop.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, finishing current tick");
            signal.request();
        }
    });

    let view = options.view.clone();
    let roster_path = cli.roster.clone();
    let mut simulation = Simulation::new(casino, players.into(), options, seed);
    let interrupted = stop.clone();
    let started = Instant::now();
    let seconds = tokio::task::spawn_blocking(move || {
        let mut terminal = Terminal::new(io::stdout(), view);
        let mut store = JsonRoster::new(roster_path);
        simulation.run(&mut terminal, &mut store, &stop)
    })
    .await??;
    let elapsed = started.elapsed().as_secs();

    if interrupted.is_requested() {
        println!("\n{}", "-".repeat(WIDTH));
        println!("  Simulation stopped by user");
        println!("{}", "-".repeat(WIDTH));
    } else {
        banner("SIMULATION COMPLETE");
    }
    println!("  Total simulated time: {seconds} seconds");
    println!("  Real-world runtime: {} min {} sec", elapsed / 60, elapsed % 60);
    println!("  Roster saved to {}", cli.roster.display());
    Ok(())
}
