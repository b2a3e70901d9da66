//! Roster registry and persistence tests.

mod common;

use std::collections::HashSet;
use std::fs;

use bjfloor::{
    Casino, Category, Entry, JsonRoster, Outcome, PoolCounts, Roster, RosterError, RosterStore,
    WaitingPool, Whereabouts, factory, roster,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use common::{player, temp_path};

#[test]
fn records_use_the_roster_field_names() {
    let mut ada = player(3, "Ada", 1500, 7);
    ada.category = Category::HighRoller;
    ada.history.push(Outcome::Win, 40);
    ada.history.push(Outcome::Push, 25);

    let json = roster::to_json(&[&ada]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let record = &value[0];
    assert_eq!(record["player_id"], 3);
    assert_eq!(record["player_type"], "high_roller");
    assert_eq!(record["money_left"], 1500);
    assert_eq!(record["rounds_left"], 7);
    assert_eq!(record["history"], serde_json::json!([["win", 40], ["push", 25]]));

    let parsed = roster::from_json(&json).unwrap();
    assert_eq!(parsed, vec![ada]);
}

#[test]
fn missing_history_defaults_to_empty() {
    let json = r#"[{
        "first_name": "Bea",
        "last_name": "Baker",
        "email": "bea.baker1@example.com",
        "player_id": 1,
        "player_type": "regular",
        "money_left": 2500,
        "rounds_left": 12
    }]"#;

    let players = roster::from_json(json).unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].category, Category::Regular);
    assert!(players[0].history.is_empty());
}

#[test]
fn long_history_keeps_the_newest_entries() {
    let json = r#"[{
        "first_name": "Cy",
        "last_name": "Castillo",
        "email": "cy.castillo2@example.com",
        "player_id": 2,
        "player_type": "casual",
        "money_left": 900,
        "rounds_left": 2,
        "history": [["loss", 10], ["win", 20], ["push", 30], ["win", 40],
                    ["loss", 50], ["win", 60], ["loss", 70]]
    }]"#;

    let players = roster::from_json(json).unwrap();
    let stakes: Vec<i64> = players[0].history.iter().map(|e| e.1).collect();
    assert_eq!(stakes, [30, 40, 50, 60, 70]);
    assert_eq!(players[0].history.last(), Some(Entry(Outcome::Loss, 70)));
}

#[test]
fn malformed_records_are_rejected() {
    let err = roster::from_json(r#"[{"first_name": "Dee"}]"#).unwrap_err();
    assert!(matches!(err, RosterError::InvalidRecord(_)));

    let err = roster::from_json("not json").unwrap_err();
    assert!(matches!(err, RosterError::InvalidRecord(_)));
}

#[test]
fn save_and_load_through_a_file() {
    let dir = temp_path("save");
    let path = dir.join("nested").join("players.json");
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let players = factory::generate_pool(25, &mut rng).unwrap();

    roster::save(&path, &players.iter().collect::<Vec<_>>()).unwrap();
    let loaded = roster::load(&path).unwrap();
    assert_eq!(loaded, players);

    let mut store = JsonRoster::new(&path);
    assert_eq!(store.path(), path);
    store.store(&[&players[0]]).unwrap();
    assert_eq!(roster::load(&path).unwrap(), vec![players[0].clone()]);

    let missing = roster::load(&dir.join("missing.json")).unwrap_err();
    assert!(matches!(missing, RosterError::Io(_)));

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn locate_searches_seats_then_waiting_then_finished() {
    let mut casino = Casino::with_tables("Test", 1, &[1, 2]).unwrap();
    let mut waiting = WaitingPool::from(vec![
        player(0, "Ada", 1000, 1),
        player(1, "Bob", 1000, 5),
        player(2, "Cy", 1000, 5),
        player(3, "Dee", 1000, 5),
        player(4, "Eve", 1000, 5),
    ]);
    casino.fill_empty_seats(&mut waiting);
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    // Ada's session ends and Dee takes her seat.
    casino.play_round(0, &mut waiting, &mut rng).unwrap();

    let roster = Roster::new(&casino, &waiting);
    assert_eq!(
        roster.counts(),
        PoolCounts {
            active: 3,
            waiting: 1,
            finished: 1,
        }
    );

    let names: Vec<&str> = roster.players().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["Dee", "Bob", "Cy", "Eve", "Ada"]);

    assert_eq!(
        roster.locate("cy").unwrap().whereabouts,
        Whereabouts::Seated { table: 1, seat: 1 }
    );
    assert_eq!(roster.locate("EVE").unwrap().whereabouts, Whereabouts::Waiting);
    let ada = roster.locate("Ada").unwrap();
    assert_eq!(ada.whereabouts, Whereabouts::Finished);
    assert_eq!(ada.player.rounds_left, 0);
    assert!(roster.locate("Zed").is_none());
}

#[test]
fn generated_pools_follow_category_ranges() {
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let players = factory::generate_pool(500, &mut rng).unwrap();

    assert_eq!(players.len(), 500);
    let emails: HashSet<&str> = players.iter().map(|p| p.email.as_str()).collect();
    assert_eq!(emails.len(), 500);

    for (id, p) in players.iter().enumerate() {
        assert_eq!(p.id as usize, id);
        assert!(p.category.balance_range().contains(&p.balance));
        assert!(p.category.rounds_range().contains(&p.rounds_left));
        assert!(p.history.is_empty());
        assert_eq!(p.email, p.email.to_lowercase());
    }

    let casual = players
        .iter()
        .filter(|p| p.category == Category::Casual)
        .count();
    assert!(casual > 250, "expected mostly casual players, got {casual}");
}

#[test]
fn generated_first_names_are_distinct() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let players = factory::generate_pool(100, &mut rng).unwrap();
    let names: HashSet<String> = players.iter().map(|p| p.first_name.to_lowercase()).collect();
    assert_eq!(names.len(), 100);
    assert!(
        players
            .iter()
            .all(|p| factory::FIRST_NAMES.contains(&p.first_name.as_str()))
    );

    let players = factory::generate_pool(1000, &mut rng).unwrap();
    let names: HashSet<String> = players.iter().map(|p| p.first_name.to_lowercase()).collect();
    assert_eq!(names.len(), 1000);
    let first_lap = factory::FIRST_NAMES.len();
    assert!(players[first_lap].first_name.ends_with('2'));
}

#[test]
fn category_rolls_follow_the_weights() {
    let maker = factory::PlayerFactory::new().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut counts = [0_u32; 4];
    for _ in 0..10_000 {
        let rolled = maker.roll_category(&mut rng);
        let slot = Category::WEIGHTED
            .iter()
            .position(|&(category, _)| category == rolled)
            .unwrap();
        counts[slot] += 1;
    }

    // Expected 7000 / 2000 / 800 / 200.
    assert!((6700..=7300).contains(&counts[0]), "{counts:?}");
    assert!((1750..=2250).contains(&counts[1]), "{counts:?}");
    assert!((650..=950).contains(&counts[2]), "{counts:?}");
    assert!((120..=280).contains(&counts[3]), "{counts:?}");
}
