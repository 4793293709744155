use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::debug;

use crate::constants::{
    DEFAULT_SAMPLES, DEFAULT_STRENGTH_WEIGHT, MAX_EXACT_SCENARIOS, OUTCOMES_PER_GAME,
};
use crate::error::{Error, Result};
use crate::exact::enumerate_scenarios;
use crate::league::League;
use crate::outcomes::schedule_outcomes;
use crate::overrides::GameOverrides;
use crate::sampler::sample_scenarios;

/// Projection strategy. `Auto` prefers exact enumeration and falls back to
/// sampling once the scenario space crosses [`MAX_EXACT_SCENARIOS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectionMode {
    Auto,
    Exact,
    MonteCarlo,
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProjectionMode::Auto => "auto",
            ProjectionMode::Exact => "exact",
            ProjectionMode::MonteCarlo => "monte-carlo",
        })
    }
}

impl FromStr for ProjectionMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ProjectionMode::Auto),
            "exact" => Ok(ProjectionMode::Exact),
            "monte-carlo" => Ok(ProjectionMode::MonteCarlo),
            other => Err(format!(
                "unknown mode {other:?}, expected auto | exact | monte-carlo"
            )),
        }
    }
}

/// Inputs to a projection run.
#[derive(Clone, Debug)]
pub struct ProjectionParams {
    pub mode: ProjectionMode,
    /// Monte Carlo trial count.
    pub samples: u64,
    /// How strongly relative strength skews each game, in [0, 1]:
    /// 0 makes every game a coin flip, 1 uses the raw strength ratio.
    pub strength_weight: f64,
    pub overrides: GameOverrides,
    /// Seed for the Monte Carlo sampler. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            mode: ProjectionMode::Auto,
            samples: DEFAULT_SAMPLES,
            strength_weight: DEFAULT_STRENGTH_WEIGHT,
            overrides: GameOverrides::new(),
            seed: None,
        }
    }
}

/// Outcome of a projection run.
#[derive(Clone, Debug, Serialize)]
pub struct ProjectionResult {
    /// The strategy that actually ran (never `Auto`).
    pub mode_used: ProjectionMode,
    /// Probability mass summed in exact mode, trial count in Monte Carlo
    /// mode.
    pub denominator: f64,
    /// Per-team qualification probability, 0-100.
    pub probabilities: HashMap<String, f64>,
    /// Number of scenarios implied by the schedule and overrides.
    pub scenario_count: u64,
}

/// A team and its qualification probability, for display.
#[derive(Clone, Debug, Serialize)]
pub struct TeamProbability {
    pub team: String,
    pub probability: f64,
}

/// Number of distinct outcome assignments left open by `overrides`:
/// the product over remaining games of 5, or 1 where overridden.
pub fn scenario_count(league: &League, overrides: &GameOverrides) -> u64 {
    (0..league.remaining_games().len()).fold(1u64, |count, game| {
        count.saturating_mul(if overrides.get(game).is_some() {
            1
        } else {
            OUTCOMES_PER_GAME as u64
        })
    })
}

/// Project each team's probability of finishing among the eight playoff
/// qualifiers. Seeds a ChaCha8 generator from `params.seed`, or from
/// entropy when no seed is given.
pub fn run_projection(league: &League, params: &ProjectionParams) -> Result<ProjectionResult> {
    let mut rng = match params.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    run_projection_with_rng(league, params, &mut rng)
}

/// Like [`run_projection`], with a caller-supplied generator for the Monte
/// Carlo path. The exact path never touches the generator, which keeps
/// repeated exact runs bit-identical.
pub fn run_projection_with_rng<R: Rng>(
    league: &League,
    params: &ProjectionParams,
    rng: &mut R,
) -> Result<ProjectionResult> {
    let scenarios = scenario_count(league, &params.overrides);
    let outcomes = schedule_outcomes(league, params.strength_weight);

    let exact = match params.mode {
        ProjectionMode::Exact => true,
        ProjectionMode::MonteCarlo => false,
        ProjectionMode::Auto => scenarios <= MAX_EXACT_SCENARIOS,
    };
    debug!(mode = %params.mode, scenarios, exact, "selected projection strategy");

    if exact {
        let mass = enumerate_scenarios(league, &outcomes, &params.overrides);
        if mass.total <= 0.0 {
            return Err(Error::ZeroScenarioMass);
        }
        let probabilities = league
            .teams()
            .iter()
            .zip(&mass.qualified)
            .map(|(team, &m)| (team.name.clone(), m / mass.total * 100.0))
            .collect();
        Ok(ProjectionResult {
            mode_used: ProjectionMode::Exact,
            denominator: mass.total,
            probabilities,
            scenario_count: scenarios,
        })
    } else {
        let counts = sample_scenarios(league, &outcomes, &params.overrides, params.samples, rng);
        let total = params.samples as f64;
        let probabilities = league
            .teams()
            .iter()
            .zip(&counts)
            .map(|(team, &count)| (team.name.clone(), count as f64 / total * 100.0))
            .collect();
        Ok(ProjectionResult {
            mode_used: ProjectionMode::MonteCarlo,
            denominator: total,
            probabilities,
            scenario_count: scenarios,
        })
    }
}

/// Teams ordered by qualification probability, best first; equal
/// probabilities order by name.
pub fn teams_by_probability(probabilities: &HashMap<String, f64>) -> Vec<TeamProbability> {
    let mut rows: Vec<TeamProbability> = probabilities
        .iter()
        .map(|(team, &probability)| TeamProbability {
            team: team.clone(),
            probability,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.probability
            .total_cmp(&a.probability)
            .then_with(|| a.team.cmp(&b.team))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::{DivisionData, LeagueData, TeamData};

    fn team(name: &str, points: u32, games_played: u32) -> TeamData {
        TeamData { name: name.to_string(), points, games_played }
    }

    fn league(remaining: Vec<(&str, &str)>) -> League {
        League::build(LeagueData {
            divisions: vec![
                DivisionData {
                    name: "D1".to_string(),
                    teams: vec![
                        team("A1", 20, 10),
                        team("A2", 16, 10),
                        team("A3", 12, 10),
                        team("A4", 8, 10),
                    ],
                },
                DivisionData {
                    name: "D2".to_string(),
                    teams: vec![
                        team("B1", 18, 10),
                        team("B2", 14, 10),
                        team("B3", 10, 10),
                        team("B4", 6, 10),
                        team("B5", 4, 10),
                    ],
                },
            ],
            remaining_games: remaining
                .into_iter()
                .map(|(h, a)| (h.to_string(), a.to_string()))
                .collect(),
        })
        .unwrap()
    }

    fn wildcard_race() -> League {
        // A4 and B4 fight for the last wildcard; their head-to-head games
        // decide it.
        league(vec![("A4", "B4"), ("B4", "A4"), ("A1", "B1")])
    }

    #[test]
    fn scenario_count_is_five_per_free_game() {
        let league = league(vec![("A4", "B5"), ("A1", "B1"), ("A3", "B2")]);
        assert_eq!(scenario_count(&league, &GameOverrides::new()), 125);

        let mut overrides = GameOverrides::new();
        overrides.force(0, 0);
        overrides.force(1, 1);
        overrides.force(2, 2);
        assert_eq!(scenario_count(&league, &overrides), 1);
    }

    #[test]
    fn auto_mode_picks_exact_for_small_spaces() {
        let league = league(vec![("A4", "B5")]);
        let result = run_projection(&league, &ProjectionParams::default()).unwrap();
        assert_eq!(result.mode_used, ProjectionMode::Exact);
        assert!((result.denominator - 1.0).abs() < 1e-9);
    }

    #[test]
    fn explicit_monte_carlo_is_honored() {
        let league = league(vec![("A4", "B5")]);
        let params = ProjectionParams {
            mode: ProjectionMode::MonteCarlo,
            samples: 5_000,
            seed: Some(11),
            ..ProjectionParams::default()
        };
        let result = run_projection(&league, &params).unwrap();
        assert_eq!(result.mode_used, ProjectionMode::MonteCarlo);
        assert_eq!(result.denominator, 5_000.0);
    }

    #[test]
    fn exact_runs_are_bit_identical() {
        let league = league(vec![("A4", "B5"), ("A1", "B1"), ("A3", "B2")]);
        let params = ProjectionParams { mode: ProjectionMode::Exact, ..Default::default() };
        let first = run_projection(&league, &params).unwrap();
        let second = run_projection(&league, &params).unwrap();
        for (name, probability) in &first.probabilities {
            assert_eq!(probability, &second.probabilities[name]);
        }
        assert_eq!(first.denominator, second.denominator);
    }

    #[test]
    fn probabilities_stay_within_percent_bounds() {
        let league = wildcard_race();
        let params = ProjectionParams { mode: ProjectionMode::Exact, ..Default::default() };
        let result = run_projection(&league, &params).unwrap();
        for (_, &p) in &result.probabilities {
            assert!((0.0..=100.0 + 1e-9).contains(&p));
        }
        // Eight slots, so probabilities total 800.
        let sum: f64 = result.probabilities.values().sum();
        assert!((sum - 800.0).abs() < 1e-6);
    }

    #[test]
    fn full_override_is_deterministic_zero_or_hundred() {
        let league = league(vec![("A4", "B5"), ("A1", "B1")]);
        let mut overrides = GameOverrides::new();
        overrides.force(0, 0);
        overrides.force(1, 4);
        let params = ProjectionParams {
            mode: ProjectionMode::Exact,
            overrides,
            ..Default::default()
        };
        let result = run_projection(&league, &params).unwrap();
        assert_eq!(result.scenario_count, 1);
        for (_, &p) in &result.probabilities {
            assert!(p.abs() < 1e-9 || (p - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn monte_carlo_agrees_with_exact() {
        let league = wildcard_race();
        let exact = run_projection(
            &league,
            &ProjectionParams { mode: ProjectionMode::Exact, ..Default::default() },
        )
        .unwrap();
        let sampled = run_projection(
            &league,
            &ProjectionParams {
                mode: ProjectionMode::MonteCarlo,
                samples: 200_000,
                seed: Some(1234),
                ..Default::default()
            },
        )
        .unwrap();

        for (name, &p_exact) in &exact.probabilities {
            let p_sampled = sampled.probabilities[name];
            assert!(
                (p_exact - p_sampled).abs() < 1.0,
                "{name}: exact {p_exact:.2} vs sampled {p_sampled:.2}"
            );
        }
    }

    #[test]
    fn forcing_wins_never_lowers_exact_probability() {
        let league = wildcard_race();

        let mut win = GameOverrides::new();
        win.force(0, 0); // A4 wins its home game in regulation
        let mut loss = GameOverrides::new();
        loss.force(0, 3); // A4 loses it in regulation

        let p_win = run_projection(
            &league,
            &ProjectionParams { mode: ProjectionMode::Exact, overrides: win, ..Default::default() },
        )
        .unwrap()
        .probabilities["A4"];
        let p_loss = run_projection(
            &league,
            &ProjectionParams { mode: ProjectionMode::Exact, overrides: loss, ..Default::default() },
        )
        .unwrap()
        .probabilities["A4"];

        assert!(p_win >= p_loss);
    }

    #[test]
    fn zero_mass_is_a_fatal_error() {
        // B5 has zero points, so at weight 1 its regulation win has
        // probability zero; forcing it leaves no mass to normalize.
        let data = LeagueData {
            divisions: vec![
                DivisionData {
                    name: "D1".to_string(),
                    teams: vec![
                        team("A1", 20, 10),
                        team("A2", 16, 10),
                        team("A3", 12, 10),
                        team("A4", 8, 10),
                    ],
                },
                DivisionData {
                    name: "D2".to_string(),
                    teams: vec![
                        team("B1", 18, 10),
                        team("B2", 14, 10),
                        team("B3", 10, 10),
                        team("B4", 6, 10),
                        team("B5", 0, 10),
                    ],
                },
            ],
            remaining_games: vec![("B5".to_string(), "A1".to_string())],
        };
        let league = League::build(data).unwrap();

        let mut overrides = GameOverrides::new();
        overrides.force(0, 0);
        let params = ProjectionParams {
            mode: ProjectionMode::Exact,
            strength_weight: 1.0,
            overrides,
            ..Default::default()
        };
        assert!(matches!(run_projection(&league, &params), Err(Error::ZeroScenarioMass)));
    }

    #[test]
    fn teams_by_probability_sorts_descending() {
        let probabilities = HashMap::from([
            ("Low".to_string(), 10.0),
            ("High".to_string(), 90.0),
            ("Mid".to_string(), 50.0),
        ]);
        let sorted = teams_by_probability(&probabilities);
        let names: Vec<&str> = sorted.iter().map(|row| row.team.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
    }

    #[test]
    fn mode_round_trips_through_strings() {
        for mode in [ProjectionMode::Auto, ProjectionMode::Exact, ProjectionMode::MonteCarlo] {
            assert_eq!(mode.to_string().parse::<ProjectionMode>().unwrap(), mode);
        }
        assert!("sometimes".parse::<ProjectionMode>().is_err());
    }
}
