use crate::constants::OUTCOMES_PER_GAME;
use crate::league::League;
use crate::outcomes::Outcome;
use crate::overrides::GameOverrides;
use crate::standings::qualifiers;

/// Accumulated output of a full enumeration pass.
#[derive(Clone, Debug)]
pub struct EnumeratedMass {
    /// Per-team qualification mass, indexed like the league's team list.
    pub qualified: Vec<f64>,
    /// Total probability mass over all enumerated scenarios. With no
    /// overrides this sums to ~1; with forced outcomes it shrinks to the
    /// forced outcomes' joint probability.
    pub total: f64,
}

/// Walk every combination of remaining-game outcomes without materializing
/// the Cartesian product: each game is a digit of radix 5 (radix 1 when
/// overridden) and the digit vector is advanced like an odometer until the
/// carry runs off the most significant digit.
///
/// Every scenario starts from a fresh copy of the base points table. Joint
/// probabilities of exactly zero are skipped; they cannot move the totals.
/// With an empty schedule exactly one scenario (the current table, mass 1)
/// is produced. Only feasible for small unconstrained game counts; callers
/// bound the scenario space before choosing this path.
pub fn enumerate_scenarios(
    league: &League,
    outcomes: &[[Outcome; OUTCOMES_PER_GAME]],
    overrides: &GameOverrides,
) -> EnumeratedMass {
    let games = league.remaining_games();
    let base = league.base_points();
    let radices: Vec<usize> = (0..games.len())
        .map(|game| if overrides.get(game).is_some() { 1 } else { OUTCOMES_PER_GAME })
        .collect();

    let mut digits = vec![0usize; games.len()];
    let mut qualified = vec![0.0; league.team_count()];
    let mut total = 0.0;
    let mut points = base.clone();

    loop {
        points.copy_from_slice(&base);
        let mut scenario_prob = 1.0;
        for (index, game) in games.iter().enumerate() {
            let slot = overrides.get(index).unwrap_or(digits[index]);
            let outcome = &outcomes[index][slot];
            points[game.home] += outcome.home_points;
            points[game.away] += outcome.away_points;
            scenario_prob *= outcome.probability;
        }

        if scenario_prob > 0.0 {
            for team in qualifiers(league, &points) {
                qualified[team] += scenario_prob;
            }
            total += scenario_prob;
        }

        let mut carry = true;
        for digit in (0..digits.len()).rev() {
            digits[digit] += 1;
            if digits[digit] < radices[digit] {
                carry = false;
                break;
            }
            digits[digit] = 0;
        }
        if carry {
            break;
        }
    }

    EnumeratedMass { qualified, total }
}
