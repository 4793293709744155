use std::collections::HashMap;

use crate::constants::{DRAW_PROB, FALLBACK_STRENGTH, OUTCOMES_PER_GAME};
use crate::league::League;

/// One of the five possible results of a single game, as point deltas for
/// both sides plus the probability of that result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outcome {
    pub home_points: u32,
    pub away_points: u32,
    pub probability: f64,
}

/// Strength model: every team's points per game played so far (0.5 for a
/// team yet to play). Computed once per projection run, never per scenario.
pub fn team_strengths(league: &League) -> HashMap<String, f64> {
    league
        .teams()
        .iter()
        .map(|team| (team.name.clone(), team.strength()))
        .collect()
}

/// Probability that the home side takes a decisive result, interpolated
/// between a 50/50 baseline (`weight` 0) and the raw strength ratio
/// (`weight` 1).
pub(crate) fn home_win_share(home_strength: f64, away_strength: f64, weight: f64) -> f64 {
    let total = home_strength + away_strength;
    let raw = if total > 0.0 { home_strength / total } else { 0.5 };
    0.5 + (raw - 0.5) * weight
}

/// Build the 5-way outcome distribution for one game.
///
/// The order is canonical and is the index space used by overrides: home
/// regulation win, home OT win, away OT win, away regulation win, draw.
/// The four decisive probabilities sum to 0.9 for any `p1`, so with the
/// fixed 0.1 draw the distribution always sums to exactly 1 algebraically.
/// Teams missing from the strength table count as strength 1.0.
pub fn game_outcomes(
    home: &str,
    away: &str,
    strengths: &HashMap<String, f64>,
    weight: f64,
) -> [Outcome; OUTCOMES_PER_GAME] {
    let s1 = strengths.get(home).copied().unwrap_or(FALLBACK_STRENGTH);
    let s2 = strengths.get(away).copied().unwrap_or(FALLBACK_STRENGTH);
    let p1 = home_win_share(s1, s2, weight);

    let t1 = p1 * 0.55;
    let t2 = p1 * 0.75;
    let t3 = t2 + (1.0 - p1) * 0.4;

    [
        Outcome { home_points: 3, away_points: 0, probability: t1 },
        Outcome { home_points: 2, away_points: 1, probability: t2 - t1 },
        Outcome { home_points: 1, away_points: 2, probability: t3 - t2 },
        Outcome { home_points: 0, away_points: 3, probability: 0.9 - t3 },
        Outcome { home_points: 1, away_points: 1, probability: DRAW_PROB },
    ]
}

/// Outcome distributions for every remaining game, in schedule order.
pub fn schedule_outcomes(league: &League, weight: f64) -> Vec<[Outcome; OUTCOMES_PER_GAME]> {
    let strengths = team_strengths(league);
    league
        .remaining_games()
        .iter()
        .map(|game| {
            game_outcomes(
                league.team_name(game.home),
                league.team_name(game.away),
                &strengths,
                weight,
            )
        })
        .collect()
}

/// Human-readable labels for the five outcomes, in canonical order.
pub fn outcome_labels(home: &str, away: &str) -> [String; OUTCOMES_PER_GAME] {
    [
        format!("{home} win in regulation"),
        format!("{home} win in OT"),
        format!("{away} win in OT"),
        format!("{away} win in regulation"),
        "Draw 1-1".to_string(),
    ]
}
