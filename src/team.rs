use crate::constants::NEUTRAL_STRENGTH;

/// One team's season-to-date record.
#[derive(Clone, Debug)]
pub struct Team {
    pub name: String,

    /// Index of the division this team plays in.
    pub division: usize,

    /// Points earned so far.
    pub points: u32,

    /// Games played so far.
    pub games_played: u32,

    /// Games played plus remaining scheduled games. Fixed for the whole
    /// season and used as the ranking denominator even before the remaining
    /// games are played.
    pub total_scheduled: u32,
}

impl Team {
    /// Strength scalar for the outcome model: points per game played so far,
    /// or a neutral 0.5 for a team yet to play.
    pub fn strength(&self) -> f64 {
        if self.games_played > 0 {
            self.points as f64 / self.games_played as f64
        } else {
            NEUTRAL_STRENGTH
        }
    }

    /// Points per game played so far, for standings display.
    pub fn current_ppg(&self) -> f64 {
        if self.games_played > 0 {
            self.points as f64 / self.games_played as f64
        } else {
            0.0
        }
    }
}
