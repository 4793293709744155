use rand::Rng;

use crate::constants::OUTCOMES_PER_GAME;
use crate::league::League;
use crate::outcomes::Outcome;
use crate::overrides::GameOverrides;
use crate::standings::qualifiers;

/// Run `samples` Monte Carlo trials and count each team's playoff
/// qualifications. Generic over the generator so callers can inject a
/// seeded or fully deterministic sequence.
///
/// Per trial, every remaining game resolves to its forced outcome when
/// overridden, otherwise to a uniform draw against the cumulative outcome
/// probabilities in canonical order. Each trial mutates a fresh copy of the
/// base points table. This estimates the same quantity the exact enumerator
/// computes, with variance shrinking as O(1/sqrt(N)).
pub fn sample_scenarios<R: Rng>(
    league: &League,
    outcomes: &[[Outcome; OUTCOMES_PER_GAME]],
    overrides: &GameOverrides,
    samples: u64,
    rng: &mut R,
) -> Vec<u64> {
    let games = league.remaining_games();
    let base = league.base_points();
    let mut counts = vec![0u64; league.team_count()];
    let mut points = base.clone();

    for _ in 0..samples {
        points.copy_from_slice(&base);
        for (index, game) in games.iter().enumerate() {
            let set = &outcomes[index];
            let outcome = match overrides.get(index) {
                Some(slot) => &set[slot],
                None => draw_outcome(set, rng.gen::<f64>()),
            };
            points[game.home] += outcome.home_points;
            points[game.away] += outcome.away_points;
        }

        for team in qualifiers(league, &points) {
            counts[team] += 1;
        }
    }

    counts
}

/// Pick the first outcome whose cumulative probability reaches `draw`. The
/// last outcome catches draws left stranded when the cumulative sum lands
/// fractionally under 1.0.
fn draw_outcome(set: &[Outcome; OUTCOMES_PER_GAME], draw: f64) -> &Outcome {
    let mut cumulative = 0.0;
    for outcome in &set[..OUTCOMES_PER_GAME - 1] {
        cumulative += outcome.probability;
        if draw <= cumulative {
            return outcome;
        }
    }
    &set[OUTCOMES_PER_GAME - 1]
}
