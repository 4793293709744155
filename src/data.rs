//! Bundled EHL 2025/26 dataset: current standings and the remaining
//! schedule for both divisions. Used by the CLI when no dataset file is
//! supplied; any other league goes through [`League::build`] the same way.

use crate::league::{DivisionData, League, LeagueData, TeamData};

fn team(name: &str, points: u32, games_played: u32) -> TeamData {
    TeamData {
        name: name.to_string(),
        points,
        games_played,
    }
}

fn game(home: &str, away: &str) -> (String, String) {
    (home.to_string(), away.to_string())
}

/// The EHL league as of the final stretch of the 2025/26 season.
pub fn ehl_league() -> League {
    let data = LeagueData {
        divisions: vec![
            DivisionData {
                name: "DIVISION 1".to_string(),
                teams: vec![
                    team("RŪRE", 34, 17),
                    team("PRODUS/BLACK MAGIC", 32, 18),
                    team("TUKUMA BRĀĻI II", 35, 18),
                    team("SPARTA RB", 29, 19),
                    team("3S", 28, 18),
                    team("TAURUS", 27, 18),
                    team("LIELUPE", 16, 19),
                ],
            },
            DivisionData {
                name: "DIVISION 2".to_string(),
                teams: vec![
                    team("MARELS BOVE II", 44, 19),
                    team("MEŽABRĀĻI", 40, 20),
                    team("PILSETAS LEĢENDAS E4", 20, 18),
                    team("ICE WOLVES E4", 28, 19),
                    team("PTA", 18, 21),
                    team("SANTEKO", 20, 18),
                    team("RUPUČI II", 21, 17),
                    team("ARTA ABOLI", 6, 19),
                ],
            },
        ],
        remaining_games: vec![
            game("MARELS BOVE II", "RŪRE"),
            game("MARELS BOVE II", "3S"),
            game("ICE WOLVES E4", "PRODUS/BLACK MAGIC"),
            game("PILSETAS LEĢENDAS E4", "TUKUMA BRĀĻI II"),
            game("PILSETAS LEĢENDAS E4", "SPARTA RB"),
            game("PILSETAS LEĢENDAS E4", "LIELUPE"),
            game("RUPUČI II", "RŪRE"),
            game("RUPUČI II", "3S"),
            game("RUPUČI II", "TAURUS"),
            game("RUPUČI II", "MEŽABRĀĻI"),
            game("SANTEKO", "RŪRE"),
            game("SANTEKO", "PRODUS/BLACK MAGIC"),
            game("SANTEKO", "TAURUS"),
            game("ARTA ABOLI", "TUKUMA BRĀĻI II"),
            game("ARTA ABOLI", "ICE WOLVES E4"),
            game("3S", "TAURUS"),
            game("RŪRE", "SPARTA RB"),
            game("TUKUMA BRĀĻI II", "PRODUS/BLACK MAGIC"),
        ],
    };

    League::build(data).expect("bundled EHL dataset is valid")
}
