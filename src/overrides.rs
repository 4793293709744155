use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::constants::OUTCOMES_PER_GAME;
use crate::error::{Error, Result};

/// Forced outcomes for specific remaining games, keyed by the game's stable
/// schedule index.
///
/// An entry whose outcome value is outside the five-slot range is kept but
/// read back as absent, so a malformed partial input degrades to normal
/// simulation for that game instead of failing the whole run.
#[derive(Clone, Debug, Default)]
pub struct GameOverrides {
    forced: HashMap<usize, usize>,
}

impl GameOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force `game` to resolve to outcome slot `outcome`.
    pub fn force(&mut self, game: usize, outcome: usize) {
        self.forced.insert(game, outcome);
    }

    /// Let `game` simulate normally again.
    pub fn clear(&mut self, game: usize) {
        self.forced.remove(&game);
    }

    /// The forced outcome for `game`, if there is a usable one.
    pub fn get(&self, game: usize) -> Option<usize> {
        self.forced
            .get(&game)
            .copied()
            .filter(|&outcome| outcome < OUTCOMES_PER_GAME)
    }

    /// All stored entries, including out-of-range ones callers may want to
    /// reject up front.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.forced.iter().map(|(&game, &outcome)| (game, outcome))
    }

    pub fn len(&self) -> usize {
        self.forced.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forced.is_empty()
    }

    /// Read overrides from a file of `game_index,outcome_index` lines.
    /// Blank lines are skipped.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut overrides = Self::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (game, outcome) = line.split_once(',').ok_or_else(|| Error::InvalidOverride {
                line: line.to_string(),
                reason: "expected game_index,outcome_index".to_string(),
            })?;
            let game: usize = game.trim().parse().map_err(|_| Error::InvalidOverride {
                line: line.to_string(),
                reason: "game index is not a number".to_string(),
            })?;
            let outcome: usize = outcome.trim().parse().map_err(|_| Error::InvalidOverride {
                line: line.to_string(),
                reason: "outcome index is not a number".to_string(),
            })?;
            overrides.force(game, outcome);
        }

        Ok(overrides)
    }
}
