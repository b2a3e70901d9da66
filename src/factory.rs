//! Random player generation.
//!
//! First names are unique within a generated pool, since the player view
//! follows players by first name. Names are dealt from a shuffled list; once
//! it runs out, later laps carry a numeric suffix (`Ada2`, `Ada3`, ...).

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::seq::SliceRandom;

use crate::error::ConfigError;
use crate::player::{Category, History, Player};

/// Built-in first names.
pub const FIRST_NAMES: [&str; 128] = [
    "Aaron", "Ada", "Adele", "Aiko", "Alan", "Alba", "Amir", "Anika", "Anton", "Arjun", "Astrid",
    "Bea", "Bram", "Bruno", "Caleb", "Camila", "Carlos", "Cecile", "Chloe", "Colm", "Dalia",
    "Dante", "Dmitri", "Dora", "Edgar", "Elena", "Elif", "Emeka", "Enzo", "Esme", "Farid",
    "Felix", "Fiona", "Freya", "Gael", "Greta", "Grace", "Gus", "Hana", "Hector", "Helga",
    "Hugo", "Idris", "Ilse", "Imani", "Ines", "Ingrid", "Ivan", "Jada", "Jonas", "Joao", "Jun",
    "Kai", "Kamala", "Keiko", "Kofi", "Lars", "Leila", "Liam", "Lucia", "Luka", "Malik", "Mara",
    "Mateo", "Maya", "Milo", "Mina", "Nadia", "Nico", "Nils", "Noor", "Odile", "Olga", "Omar",
    "Oona", "Oskar", "Paz", "Pedro", "Petra", "Priya", "Quinn", "Rafael", "Rania", "Reza",
    "Rhea", "Rosa", "Rui", "Sade", "Sami", "Sanne", "Selin", "Soren", "Sven", "Tala", "Tariq",
    "Teo", "Thea", "Tomas", "Uma", "Umar", "Ursula", "Valentin", "Vera", "Victor", "Vivi",
    "Wanda", "Wen", "Wiley", "Xavier", "Xenia", "Ximena", "Yara", "Yosef", "Yuki", "Yusuf",
    "Zain", "Zara", "Zeke", "Zoe", "Zola", "Bodhi", "Cosmo", "Delphine", "Eamon", "Flavia",
    "Gideon", "Hollis", "Ottilie",
];

const LAST_NAMES: [&str; 24] = [
    "Abbott", "Baker", "Castillo", "Dubois", "Eriksen", "Fischer", "Garcia", "Hughes",
    "Ito", "Jensen", "Kowalski", "Lindqvist", "Moreau", "Nakamura", "Okafor", "Petrov",
    "Quintero", "Rossi", "Schmidt", "Tanaka", "Usman", "Varga", "Walsh", "Yilmaz",
];

/// Generates players with weighted categories and per-category bankrolls.
#[derive(Debug, Clone)]
pub struct PlayerFactory {
    categories: WeightedIndex<u32>,
}

impl PlayerFactory {
    /// Creates a factory weighted by [`Category::WEIGHTED`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CategoryWeights`] if the weights cannot be
    /// sampled, e.g. when they are all zero.
    pub fn new() -> Result<Self, ConfigError> {
        let categories = WeightedIndex::new(Category::WEIGHTED.iter().map(|&(_, w)| w))?;
        Ok(Self { categories })
    }

    /// Picks a category using the configured weights.
    pub fn roll_category<R: Rng>(&self, rng: &mut R) -> Category {
        Category::WEIGHTED[self.categories.sample(rng)].0
    }

    /// Creates one player with the given first name and a random category,
    /// bankroll and last name.
    pub fn player<R: Rng>(&self, id: u32, first_name: String, rng: &mut R) -> Player {
        let category = self.roll_category(rng);
        let balance = rng.random_range(category.balance_range());
        let rounds_left = rng.random_range(category.rounds_range());
        let last_name = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];

        Player {
            // The id suffix keeps emails unique within a pool.
            email: format!("{first_name}.{last_name}{id}@example.com").to_lowercase(),
            first_name,
            last_name: last_name.to_owned(),
            id,
            category,
            balance,
            rounds_left,
            history: History::new(),
        }
    }

    /// Creates `count` players with ids `0..count` and distinct first names.
    pub fn pool<R: Rng>(&self, count: u32, rng: &mut R) -> Vec<Player> {
        let mut names = FIRST_NAMES;
        names.shuffle(rng);
        (0..count)
            .map(|id| {
                let index = id as usize;
                let base = names[index % names.len()];
                let lap = index / names.len();
                let first_name = if lap == 0 {
                    base.to_owned()
                } else {
                    format!("{base}{}", lap + 1)
                };
                self.player(id, first_name, rng)
            })
            .collect()
    }
}

/// Creates `count` players with ids `0..count` and distinct first names.
///
/// # Errors
///
/// Returns an error if the category weights are invalid.
pub fn generate_pool<R: Rng>(count: u32, rng: &mut R) -> Result<Vec<Player>, ConfigError> {
    Ok(PlayerFactory::new()?.pool(count, rng))
}
