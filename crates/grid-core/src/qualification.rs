//! Qualification of award headers.
//!
//! An award header is judged against the teams on the opposite axis: a row
//! award against the column teams and vice versa. A season award is qualified
//! only if every one of those teams holds a qualified flag for it; a career
//! award simply carries the player's career flag.

use crate::award::AwardId;
use crate::grid::{AugmentedCategory, AugmentedGrid, Category, Grid};
use crate::player::{PlayerRecord, QualifiedStatus};
use crate::team::TeamId;

/// Annotate every award header of `grid` with its qualification status.
pub fn augment(grid: &Grid, player: &PlayerRecord) -> AugmentedGrid {
    let row_teams: Vec<&TeamId> = grid.rows.iter().filter_map(Category::as_team).collect();
    let column_teams: Vec<&TeamId> = grid.columns.iter().filter_map(Category::as_team).collect();

    AugmentedGrid {
        family: grid.family,
        rows: grid
            .rows
            .iter()
            .map(|c| augment_category(c, &column_teams, player))
            .collect(),
        columns: grid
            .columns
            .iter()
            .map(|c| augment_category(c, &row_teams, player))
            .collect(),
    }
}

fn augment_category(
    category: &Category,
    affected_teams: &[&TeamId],
    player: &PlayerRecord,
) -> AugmentedCategory {
    match category {
        Category::Team(id) => AugmentedCategory::Team { id: id.clone() },
        Category::Award(id) => AugmentedCategory::Award {
            id: *id,
            status: award_status(*id, affected_teams, player),
        },
    }
}

/// Status of `award` when it has to hold with each of `affected_teams`.
pub fn award_status(
    award: AwardId,
    affected_teams: &[&TeamId],
    player: &PlayerRecord,
) -> QualifiedStatus {
    match award {
        AwardId::Career(career) => player
            .career_award(career)
            .unwrap_or(QualifiedStatus::Unqualified),
        AwardId::Season(season) => {
            let all_qualified = affected_teams.iter().all(|team| {
                player.season_award_at(team, season) == Some(QualifiedStatus::Qualified)
            });
            if all_qualified {
                QualifiedStatus::Qualified
            } else {
                QualifiedStatus::Unqualified
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::award::{CareerAward, SeasonAward};
    use crate::grid::ShapeFamily;
    use crate::player::TeamStint;

    const Q: QualifiedStatus = QualifiedStatus::Qualified;
    const U: QualifiedStatus = QualifiedStatus::Unqualified;

    fn four_team_grid(row_award: AwardId, column_award: AwardId) -> Grid {
        Grid {
            family: ShapeFamily::FourTeamSeasonPair,
            rows: vec![Category::team("NYY"), Category::team("BOS"), Category::Award(row_award)],
            columns: vec![Category::team("OAK"), Category::team("SDP"), Category::Award(column_award)],
        }
    }

    #[test]
    fn test_season_award_checked_against_opposite_axis() {
        let player = PlayerRecord::new("p", "P")
            .with_stint(TeamStint::new("NYY").with_award(SeasonAward::Average300, Q))
            .with_stint(TeamStint::new("BOS").with_award(SeasonAward::Average300, Q))
            .with_stint(TeamStint::new("OAK").with_award(SeasonAward::Steals30, Q))
            .with_stint(TeamStint::new("SDP").with_award(SeasonAward::Steals30, U));
        let grid = four_team_grid(
            AwardId::Season(SeasonAward::Steals30),
            AwardId::Season(SeasonAward::Average300),
        );

        let augmented = augment(&grid, &player);
        // Row award judged against OAK (qualified) and SDP (unqualified)
        assert_eq!(augmented.rows[2].as_award().unwrap().1, U);
        // Column award judged against NYY and BOS, both qualified
        assert_eq!(augmented.columns[2].as_award().unwrap().1, Q);
        assert_eq!(augmented.team_slots().len(), 4);
    }

    #[test]
    fn test_missing_flag_is_unqualified() {
        let player = PlayerRecord::new("p", "P")
            .with_stint(TeamStint::new("NYY").with_award(SeasonAward::Mvp, Q))
            .with_stint(TeamStint::new("BOS"));
        let status = award_status(
            AwardId::Season(SeasonAward::Mvp),
            &[&TeamId::from("NYY"), &TeamId::from("BOS")],
            &player,
        );
        assert_eq!(status, U);
    }

    #[test]
    fn test_any_qualified_stint_with_team_counts() {
        let player = PlayerRecord::new("p", "P")
            .with_stint(TeamStint::new("NYY").with_award(SeasonAward::Average300, U))
            .with_stint(TeamStint::new("NYY").with_award(SeasonAward::Average300, Q));
        let status = award_status(
            AwardId::Season(SeasonAward::Average300),
            &[&TeamId::from("NYY")],
            &player,
        );
        assert_eq!(status, Q);
    }

    #[test]
    fn test_career_award_uses_career_flag() {
        let player = PlayerRecord::new("p", "P")
            .with_career_award(CareerAward::Average300, U)
            .with_career_award(CareerAward::HallOfFame, Q);
        let grid = four_team_grid(
            AwardId::Career(CareerAward::Average300),
            AwardId::Career(CareerAward::HallOfFame),
        );
        let augmented = augment(&grid, &player);
        assert_eq!(augmented.rows[2].as_award().unwrap().1, U);
        assert_eq!(augmented.columns[2].as_award().unwrap().1, Q);
        assert!(!augmented.is_fully_qualified());
    }
}
