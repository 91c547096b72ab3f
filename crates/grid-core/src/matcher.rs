//! Grading a guess: does a player belong in a square?

use crate::award::AwardId;
use crate::grid::Category;
use crate::player::PlayerRecord;
use crate::team::TeamId;

/// True if `player` satisfies both the row and the column header.
pub fn matches(player: &PlayerRecord, row: &Category, column: &Category) -> bool {
    match (row, column) {
        (Category::Team(a), Category::Team(b)) => played_for_both(player, a, b),
        (Category::Team(team), Category::Award(award))
        | (Category::Award(award), Category::Team(team)) => {
            team_award_matches(player, team, *award)
        }
        // Each award on its own, anywhere in the career.
        (Category::Award(a), Category::Award(b)) => {
            holds_anywhere(player, *a) && holds_anywhere(player, *b)
        }
    }
}

/// Two distinct stints, one with each team.
fn played_for_both(player: &PlayerRecord, a: &TeamId, b: &TeamId) -> bool {
    player.teams.iter().enumerate().any(|(i, first)| {
        &first.team == a
            && player
                .teams
                .iter()
                .enumerate()
                .any(|(j, second)| i != j && &second.team == b)
    })
}

fn team_award_matches(player: &PlayerRecord, team: &TeamId, award: AwardId) -> bool {
    if !player.played_for(team) {
        return false;
    }
    match award {
        AwardId::Season(season) => player.season_award_at(team, season).is_some(),
        AwardId::Career(career) => player.career_award(career).is_some(),
    }
}

fn holds_anywhere(player: &PlayerRecord, award: AwardId) -> bool {
    match award {
        AwardId::Season(season) => player.has_season_award(season),
        AwardId::Career(career) => player.career_award(career).is_some(),
    }
}
