use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::outcomes::outcome_labels;
use crate::team::Team;

/// Serde-facing league description: two named divisions plus the remaining
/// schedule as (home, away) name pairs. Validated into a [`League`] before
/// any projection runs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LeagueData {
    pub divisions: Vec<DivisionData>,
    pub remaining_games: Vec<(String, String)>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DivisionData {
    pub name: String,
    pub teams: Vec<TeamData>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TeamData {
    pub name: String,
    pub points: u32,
    pub games_played: u32,
}

/// A scheduled but unplayed game between two league teams, stored by team
/// index. Its position in the schedule is the stable index used for
/// overrides; re-sorting for display never changes it.
#[derive(Clone, Copy, Debug)]
pub struct RemainingGame {
    pub home: usize,
    pub away: usize,
}

/// A remaining game annotated with its stable override index, for display.
#[derive(Clone, Debug, Serialize)]
pub struct UpcomingGame {
    pub game_index: usize,
    pub home: String,
    pub away: String,
}

/// One selectable result for a remaining game.
#[derive(Clone, Debug, Serialize)]
pub struct OutcomeOption {
    pub index: usize,
    pub label: String,
}

/// Validated league dataset: indexed teams with their fixed season
/// denominators, and the remaining schedule.
#[derive(Clone, Debug)]
pub struct League {
    teams: Vec<Team>,
    division_names: Vec<String>,
    remaining: Vec<RemainingGame>,
}

impl League {
    /// Validate a raw dataset. Requires exactly two non-empty divisions with
    /// unique team names, and remaining games that reference known teams.
    /// Each team's total scheduled games is derived here and stays fixed.
    pub fn build(data: LeagueData) -> Result<Self> {
        if data.divisions.len() != 2 {
            return Err(Error::DivisionCount(data.divisions.len()));
        }

        let mut teams = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for (division, div) in data.divisions.iter().enumerate() {
            if div.teams.is_empty() {
                return Err(Error::EmptyDivision(div.name.clone()));
            }
            for entry in &div.teams {
                if index.insert(entry.name.clone(), teams.len()).is_some() {
                    return Err(Error::DuplicateTeam(entry.name.clone()));
                }
                teams.push(Team {
                    name: entry.name.clone(),
                    division,
                    points: entry.points,
                    games_played: entry.games_played,
                    total_scheduled: entry.games_played,
                });
            }
        }

        let mut remaining = Vec::with_capacity(data.remaining_games.len());
        for (game_index, (home, away)) in data.remaining_games.iter().enumerate() {
            let lookup = |name: &String| {
                index.get(name).copied().ok_or_else(|| Error::UnknownTeam {
                    index: game_index,
                    team: name.clone(),
                })
            };
            let home = lookup(home)?;
            let away = lookup(away)?;
            teams[home].total_scheduled += 1;
            teams[away].total_scheduled += 1;
            remaining.push(RemainingGame { home, away });
        }

        Ok(League {
            teams,
            division_names: data.divisions.into_iter().map(|d| d.name).collect(),
            remaining,
        })
    }

    /// Parse and validate a JSON dataset.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: LeagueData = serde_json::from_str(json)?;
        Self::build(data)
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn team_name(&self, index: usize) -> &str {
        &self.teams[index].name
    }

    pub fn division_count(&self) -> usize {
        self.division_names.len()
    }

    pub fn division_name(&self, division: usize) -> &str {
        &self.division_names[division]
    }

    /// Indices of the teams in one division, in roster order.
    pub fn division_teams(&self, division: usize) -> impl Iterator<Item = usize> + '_ {
        self.teams
            .iter()
            .enumerate()
            .filter(move |(_, team)| team.division == division)
            .map(|(index, _)| index)
    }

    pub fn remaining_games(&self) -> &[RemainingGame] {
        &self.remaining
    }

    /// The current points table, copied fresh for each scenario.
    pub fn base_points(&self) -> Vec<u32> {
        self.teams.iter().map(|team| team.points).collect()
    }

    /// Remaining games sorted by home then away name. Display order only;
    /// `game_index` keeps the stable identity used by overrides.
    pub fn upcoming_games(&self) -> Vec<UpcomingGame> {
        let mut games: Vec<UpcomingGame> = self
            .remaining
            .iter()
            .enumerate()
            .map(|(game_index, game)| UpcomingGame {
                game_index,
                home: self.team_name(game.home).to_string(),
                away: self.team_name(game.away).to_string(),
            })
            .collect();
        games.sort_by(|a, b| a.home.cmp(&b.home).then_with(|| a.away.cmp(&b.away)));
        games
    }

    /// The five selectable results for one remaining game, in canonical
    /// order (the same index space overrides use).
    pub fn outcome_options(&self, game_index: usize) -> Result<Vec<OutcomeOption>> {
        let game = self
            .remaining
            .get(game_index)
            .ok_or(Error::UnknownGame(game_index))?;
        let labels = outcome_labels(self.team_name(game.home), self.team_name(game.away));
        Ok(labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| OutcomeOption { index, label })
            .collect())
    }
}
