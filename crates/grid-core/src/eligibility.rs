//! Quick screening of a player before any grid is built.
//!
//! Mirrors the generator's preconditions family by family, so a player is
//! eligible exactly when grid generation yields at least one candidate.

use crate::generator::AwardProfile;
use crate::player::PlayerRecord;
use serde::{Deserialize, Serialize};

/// Best grid shape a player can support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Eligibility {
    /// A six-team grid with one award exists
    SingleAward,
    /// Only four-team grids with two awards exist
    DoubleAward,
    /// No grid can be built
    Ineligible,
}

impl Eligibility {
    pub fn is_eligible(self) -> bool {
        self != Eligibility::Ineligible
    }
}

impl std::fmt::Display for Eligibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Eligibility::SingleAward => write!(f, "single award"),
            Eligibility::DoubleAward => write!(f, "double award"),
            Eligibility::Ineligible => write!(f, "ineligible"),
        }
    }
}

/// Classify `player` without enumerating grids.
pub fn assess(player: &PlayerRecord) -> Eligibility {
    let profile = AwardProfile::from_player(player);
    let team_count = profile.all_teams.len();

    if team_count < 4 {
        return Eligibility::Ineligible;
    }

    if team_count >= 6
        && (!profile.career_awards.is_empty() || profile.season_awards_with(3).next().is_some())
    {
        return Eligibility::SingleAward;
    }

    if profile.career_awards.len() >= 2 {
        return Eligibility::DoubleAward;
    }

    if !profile.career_awards.is_empty() && profile.season_awards_with(2).next().is_some() {
        return Eligibility::DoubleAward;
    }

    // Two season awards, each with two teams, covering four teams between them
    let paired: Vec<_> = profile.season_awards_with(2).collect();
    for (i, (_, teams1)) in paired.iter().enumerate() {
        for (_, teams2) in &paired[i + 1..] {
            let extra = teams2.iter().filter(|t| !teams1.contains(*t)).count();
            if teams1.len() + extra >= 4 {
                return Eligibility::DoubleAward;
            }
        }
    }

    Eligibility::Ineligible
}
