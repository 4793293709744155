/// Default interpolation weight between a coin flip and the raw strength ratio.
pub const DEFAULT_STRENGTH_WEIGHT: f64 = 0.9;

/// Default Monte Carlo trial count.
pub const DEFAULT_SAMPLES: u64 = 1_000_000;

/// Largest scenario space auto mode will hand to the exact enumerator.
pub const MAX_EXACT_SCENARIOS: u64 = 2_000_000;

/// Fixed probability of a 1-1 draw, independent of the teams' strengths.
pub const DRAW_PROB: f64 = 0.1;

/// Strength used for a team missing from the strength table.
pub const FALLBACK_STRENGTH: f64 = 1.0;

/// Strength of a team that has not played a game yet.
pub const NEUTRAL_STRENGTH: f64 = 0.5;

/// Distinct results a single game can produce.
pub const OUTCOMES_PER_GAME: usize = 5;

/// Automatic qualifiers taken from the top of each division.
pub const AUTO_QUALIFIERS_PER_DIVISION: usize = 3;

/// Wildcard qualifiers taken from the pooled rest of both divisions.
pub const WILDCARD_COUNT: usize = 2;

/// Playoff spots in total.
pub const QUALIFIER_COUNT: usize = AUTO_QUALIFIERS_PER_DIVISION * 2 + WILDCARD_COUNT;
