//! Grid puzzle engine.
//!
//! Builds 3x3 trivia grids from one player's career: every row and column
//! header is a team or an award, and the source player must be a valid answer
//! for every square. The pipeline is generate, augment with qualification,
//! then rank:
//!
//! ```
//! use grid_core::{grids_for_player, matches, PlayerRecord};
//!
//! let player = PlayerRecord::from_json_value(serde_json::json!({
//!     "id": "p", "name": "P",
//!     "teams": [
//!         {"id": "NYY", "season_allstar": 1}, {"id": "BOS", "season_allstar": 1},
//!         {"id": "OAK", "season_award_mvp": 1}, {"id": "SDP", "season_award_mvp": 1}
//!     ]
//! })).unwrap();
//!
//! let ranked = grids_for_player(&player);
//! let best = &ranked[0];
//! for (row, col) in best.squares() {
//!     assert!(matches(&player, &row.category(), &col.category()));
//! }
//! ```

pub mod award;
pub mod combinations;
mod eligibility;
mod error;
mod generator;
mod grid;
mod matcher;
mod player;
mod qualification;
mod scoring;
mod team;

pub use award::{
    lookup_award, Award, AwardId, AwardStatistic, AwardTimespan, CareerAward, SeasonAward,
    CAREER_AWARDS, SEASON_AWARDS,
};
pub use eligibility::{assess, Eligibility};
pub use error::{GridError, Result};
pub use generator::{GeneratorConfig, GridGenerator};
pub use grid::{AugmentedCategory, AugmentedGrid, Category, Grid, GridOf, ShapeFamily};
pub use matcher::matches;
pub use player::{find_player, load_players, PlayerRecord, QualifiedStatus, TeamStint};
pub use qualification::{augment, award_status};
pub use scoring::{best_grid, rank_grids, score, ScoreWeights, Scorer};
pub use team::{TeamId, FRANCHISES};

/// Every candidate grid for `player`, before qualification.
pub fn generate_grids(player: &PlayerRecord) -> Vec<Grid> {
    GridGenerator::new().generate(player)
}

/// Generate, augment, and rank all grids for `player`, best first.
pub fn grids_for_player(player: &PlayerRecord) -> Vec<AugmentedGrid> {
    rank_grids(augmented_grids(player))
}

fn augmented_grids(player: &PlayerRecord) -> Vec<AugmentedGrid> {
    generate_grids(player)
        .iter()
        .map(|g| augment(g, player))
        .collect()
}

/// The preferred grid for `player`.
///
/// `EmptyCandidateSet` means the player should never have been offered: the
/// dataset is expected to hold only eligible players.
pub fn best_grid_for_player(player: &PlayerRecord) -> Result<AugmentedGrid> {
    Scorer::new().best(augmented_grids(player)).map_err(|err| {
        tracing::error!(player = %player.id, name = %player.name, "no grid for player");
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_grid_for_empty_player_is_error() {
        let player = PlayerRecord::new("nobody", "Nobody");
        assert!(grids_for_player(&player).is_empty());
        assert!(matches!(
            best_grid_for_player(&player),
            Err(GridError::EmptyCandidateSet)
        ));
    }

    #[test]
    fn test_best_grid_for_player_heads_the_ranking() {
        let player = PlayerRecord::new("p", "P")
            .with_stint(TeamStint::new("T1").with_award(SeasonAward::Mvp, QualifiedStatus::Qualified))
            .with_stint(TeamStint::new("T2").with_award(SeasonAward::Mvp, QualifiedStatus::Qualified))
            .with_stint(TeamStint::new("T3"))
            .with_stint(TeamStint::new("T4"))
            .with_career_award(CareerAward::HallOfFame, QualifiedStatus::Qualified);
        let ranked = grids_for_player(&player);
        assert!(!ranked.is_empty());
        assert_eq!(best_grid_for_player(&player).unwrap(), ranked[0]);
    }
}
