//! Playoff qualification projector for a two-division amateur hockey league.
//!
//! Given current standings and the remaining schedule, estimates each team's
//! probability of finishing among the eight playoff qualifiers (three per
//! division plus two pooled wildcards). Small scenario spaces are enumerated
//! exactly; larger ones are estimated by Monte Carlo sampling. Individual
//! game results can be pinned with overrides to explore what-if scenarios.

pub mod constants;
pub mod data;
pub mod error;
pub mod exact;
pub mod league;
pub mod outcomes;
pub mod overrides;
pub mod projection;
pub mod sampler;
pub mod standings;
pub mod team;

pub use error::{Error, Result};
pub use league::{
    DivisionData, League, LeagueData, OutcomeOption, RemainingGame, TeamData, UpcomingGame,
};
pub use outcomes::{game_outcomes, outcome_labels, schedule_outcomes, team_strengths, Outcome};
pub use overrides::GameOverrides;
pub use projection::{
    run_projection, run_projection_with_rng, scenario_count, teams_by_probability, ProjectionMode,
    ProjectionParams, ProjectionResult, TeamProbability,
};
pub use standings::{current_standings, qualifiers, DivisionStandings, StandingsRow};
pub use team::Team;
