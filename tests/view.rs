//! Rendering tests.

mod common;

use bjfloor::view::{PlayerStatus, Tally, card_art, clock, grouped, signed};
use bjfloor::{
    Casino, Floor, History, Outcome, Rank, RoundEvent, RoundObserver, Suit, Terminal, ViewMode,
    WaitingPool,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use common::{card, player};

fn played_round() -> (Casino, WaitingPool, RoundEvent) {
    let mut casino = Casino::with_tables("Test", 2, &[3, 2]).unwrap();
    let mut waiting = WaitingPool::from(vec![
        player(0, "Ada", 5000, 10),
        player(1, "Bob", 5000, 10),
        player(2, "Cy", 5000, 10),
        player(3, "Dee", 5000, 10),
    ]);
    casino.fill_empty_seats(&mut waiting);
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let event = casino.play_round(0, &mut waiting, &mut rng).unwrap();
    (casino, waiting, event)
}

fn render(view: ViewMode, floor: &Floor<'_>, events: &[&RoundEvent]) -> String {
    let mut terminal = Terminal::new(Vec::new(), view);
    terminal.on_tick(floor, events);
    String::from_utf8(terminal.into_inner()).unwrap()
}

#[test]
fn number_formatting() {
    assert_eq!(clock(0), "00:00:00");
    assert_eq!(clock(1810), "00:30:10");
    assert_eq!(clock(3600 + 61), "01:01:01");

    assert_eq!(grouped(0), "0");
    assert_eq!(grouped(999), "999");
    assert_eq!(grouped(1000), "1,000");
    assert_eq!(grouped(-1_234_567), "-1,234,567");
    assert_eq!(signed(1200), "+1,200");
    assert_eq!(signed(-45), "-45");
    assert_eq!(signed(0), "+0");
}

#[test]
fn card_art_places_cards_side_by_side() {
    let lines = card_art(&[card(Rank::Ace, Suit::Spade), card(Rank::Ten, Suit::Heart)]);
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0].matches('┌').count(), 2);
    assert!(lines[1].starts_with("│A "));
    assert!(lines[1].contains("│10"));
    assert!(lines[2].contains('♠'));
    assert!(lines[2].contains('♥'));
    assert!(lines[3].contains("10│"));

    assert!(card_art(&[]).iter().all(String::is_empty));
}

#[test]
fn tally_groups_results_by_outcome() {
    let (_, _, mut event) = played_round();
    event.results[0].delta = -40;
    event.results[1].delta = 25;
    event.results[2].delta = 0;

    let tally = Tally::of(&event);
    assert_eq!(tally.winners, [("Ada".to_owned(), 40)]);
    assert_eq!(tally.losers, [("Bob".to_owned(), 25)]);
    assert_eq!(tally.pushes, ["Cy"]);
    assert_eq!(tally.total_bets, 65);
    assert_eq!(tally.winnings, 40);
    assert_eq!(tally.losses, 25);
}

#[test]
fn history_statistics() {
    let mut history = History::new();
    assert!(history.win_rate().abs() < f64::EPSILON);
    assert!(history.average_bet().abs() < f64::EPSILON);

    history.push(Outcome::Win, 20);
    history.push(Outcome::Loss, 40);
    history.push(Outcome::Win, 60);
    history.push(Outcome::Push, 0);
    assert!((history.win_rate() - 50.0).abs() < 1e-9);
    assert!((history.average_bet() - 40.0).abs() < 1e-9);
    assert_eq!(history.count(Outcome::Loss), 1);
}

#[test]
fn casino_view_lists_every_table() {
    let (casino, waiting, event) = played_round();
    let floor = Floor {
        casino: &casino,
        waiting: &waiting,
        sim_time: 10,
    };

    let out = render(ViewMode::Casino, &floor, &[&event]);
    assert!(out.contains("SIMULATION TIME: 00:00:10"));
    assert!(out.contains("HANDS PLAYED: 3"));
    assert!(out.contains("Active: 4 | ⏳ Waiting: 0 | 🚪 Finished: 0"));
    assert!(out.contains("Table 0 | Players 3/3"));
}

#[test]
fn table_view_shows_each_seat() {
    let (casino, waiting, event) = played_round();
    let floor = Floor {
        casino: &casino,
        waiting: &waiting,
        sim_time: 20,
    };

    let out = render(ViewMode::Table(0), &floor, &[&event]);
    assert!(out.contains("TABLE 0 | ROUND 1"));
    for name in ["Ada", "Bob", "Cy"] {
        assert!(out.contains(name), "{name} missing from\n{out}");
    }
    assert!(out.contains("ROUND RESULTS"));
    assert!(out.contains("TOTAL CASINO PROFIT"));
}

#[test]
fn player_view_and_status() {
    let (casino, waiting, event) = played_round();
    let floor = Floor {
        casino: &casino,
        waiting: &waiting,
        sim_time: 30,
    };
    let roster = floor.roster();

    let bob = roster.locate("bob").unwrap();
    assert_eq!(PlayerStatus::classify(&event, &bob), PlayerStatus::Playing);
    let dee = roster.locate("Dee").unwrap();
    assert_eq!(PlayerStatus::classify(&event, &dee), PlayerStatus::Idle);
    assert_eq!(PlayerStatus::Playing.to_string(), "PLAYING");

    let out = render(ViewMode::Player("bob".to_owned()), &floor, &[&event]);
    assert!(out.contains("PLAYER VIEW | Bob (PLAYING)"));
    assert!(out.contains("Rounds Left: 9"));
    assert!(out.contains("Dealer Hand:"));
}

#[test]
fn unknown_tracked_player_prints_a_notice() {
    let (casino, waiting, event) = played_round();
    let floor = Floor {
        casino: &casino,
        waiting: &waiting,
        sim_time: 40,
    };

    let out = render(ViewMode::Player("Zed".to_owned()), &floor, &[&event]);
    assert_eq!(out.trim(), "Player Zed no longer in simulation.");
}
