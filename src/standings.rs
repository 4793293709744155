use serde::Serialize;

use crate::constants::{AUTO_QUALIFIERS_PER_DIVISION, QUALIFIER_COUNT, WILDCARD_COUNT};
use crate::league::League;

/// Ranking key: season points over the fixed full-schedule denominator.
pub fn points_per_game(points: u32, total_scheduled: u32) -> f64 {
    if total_scheduled > 0 {
        points as f64 / total_scheduled as f64
    } else {
        0.0
    }
}

/// Sort team indices by scheduled points-per-game, best first. Exactly equal
/// keys fall back to team name ascending so rankings are reproducible across
/// platforms.
fn rank_by_ppg(league: &League, points: &[u32], indices: &mut [usize]) {
    indices.sort_by(|&a, &b| {
        let ppg_a = points_per_game(points[a], league.teams()[a].total_scheduled);
        let ppg_b = points_per_game(points[b], league.teams()[b].total_scheduled);
        ppg_b
            .total_cmp(&ppg_a)
            .then_with(|| league.team_name(a).cmp(league.team_name(b)))
    });
}

/// Select the eight playoff qualifiers for one final points table: the top
/// three of each division, then the two best of the pooled leftovers.
pub fn qualifiers(league: &League, points: &[u32]) -> Vec<usize> {
    let mut selected = Vec::with_capacity(QUALIFIER_COUNT);
    let mut leftovers = Vec::new();

    for division in 0..league.division_count() {
        let mut ranked: Vec<usize> = league.division_teams(division).collect();
        rank_by_ppg(league, points, &mut ranked);
        let cut = AUTO_QUALIFIERS_PER_DIVISION.min(ranked.len());
        selected.extend_from_slice(&ranked[..cut]);
        leftovers.extend_from_slice(&ranked[cut..]);
    }

    rank_by_ppg(league, points, &mut leftovers);
    let cut = WILDCARD_COUNT.min(leftovers.len());
    selected.extend_from_slice(&leftovers[..cut]);
    selected
}

#[derive(Clone, Debug, Serialize)]
pub struct StandingsRow {
    pub team: String,
    pub games_played: u32,
    pub points: u32,
    /// Points per game played so far (display key, not the ranking key).
    pub ppg: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct DivisionStandings {
    pub division: String,
    pub rows: Vec<StandingsRow>,
}

/// Season-to-date tables, one per division, ranked by points per game played.
pub fn current_standings(league: &League) -> Vec<DivisionStandings> {
    (0..league.division_count())
        .map(|division| {
            let mut rows: Vec<StandingsRow> = league
                .division_teams(division)
                .map(|index| {
                    let team = &league.teams()[index];
                    StandingsRow {
                        team: team.name.clone(),
                        games_played: team.games_played,
                        points: team.points,
                        ppg: team.current_ppg(),
                    }
                })
                .collect();
            rows.sort_by(|a, b| b.ppg.total_cmp(&a.ppg).then_with(|| a.team.cmp(&b.team)));
            DivisionStandings {
                division: league.division_name(division).to_string(),
                rows,
            }
        })
        .collect()
}
