use crate::award::AwardId;
use crate::player::QualifiedStatus;
use crate::team::TeamId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One row or column header
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Category {
    Team(TeamId),
    Award(AwardId),
}

impl Category {
    pub fn team(code: impl Into<TeamId>) -> Self {
        Category::Team(code.into())
    }

    pub fn as_team(&self) -> Option<&TeamId> {
        match self {
            Category::Team(t) => Some(t),
            Category::Award(_) => None,
        }
    }

    pub fn as_award(&self) -> Option<AwardId> {
        match self {
            Category::Award(a) => Some(*a),
            Category::Team(_) => None,
        }
    }
}

impl From<AwardId> for Category {
    fn from(id: AwardId) -> Self {
        Category::Award(id)
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    /// Catalog award ids win; anything else is taken as a team code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<AwardId>() {
            Ok(id) => Category::Award(id),
            Err(_) => Category::Team(TeamId::new(s)),
        })
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Team(t) => write!(f, "{}", t),
            Category::Award(a) => write!(f, "{}", a.name()),
        }
    }
}

/// A header after qualification has been worked out
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AugmentedCategory {
    Team { id: TeamId },
    Award { id: AwardId, status: QualifiedStatus },
}

impl AugmentedCategory {
    /// The plain category, dropping qualification.
    pub fn category(&self) -> Category {
        match self {
            AugmentedCategory::Team { id } => Category::Team(id.clone()),
            AugmentedCategory::Award { id, .. } => Category::Award(*id),
        }
    }

    pub fn as_team(&self) -> Option<&TeamId> {
        match self {
            AugmentedCategory::Team { id } => Some(id),
            AugmentedCategory::Award { .. } => None,
        }
    }

    pub fn as_award(&self) -> Option<(AwardId, QualifiedStatus)> {
        match self {
            AugmentedCategory::Award { id, status } => Some((*id, *status)),
            AugmentedCategory::Team { .. } => None,
        }
    }
}

impl std::fmt::Display for AugmentedCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AugmentedCategory::Team { id } => write!(f, "{}", id),
            AugmentedCategory::Award { id, status } => {
                write!(f, "{}", id.name())?;
                if !status.is_qualified() {
                    write!(f, "*")?;
                }
                Ok(())
            }
        }
    }
}

/// Which construction produced a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeFamily {
    /// Six teams, one season award closing the columns
    SixTeamSeason,
    /// Six teams, one career award closing the columns
    SixTeamCareer,
    /// Four teams, a season award on each axis
    FourTeamSeasonPair,
    /// Four teams, career award on the rows and season award on the columns
    FourTeamCareerSeason,
    /// Four teams, a career award on each axis
    FourTeamCareerPair,
}

impl ShapeFamily {
    pub fn all() -> &'static [ShapeFamily] {
        &[
            ShapeFamily::SixTeamSeason,
            ShapeFamily::SixTeamCareer,
            ShapeFamily::FourTeamSeasonPair,
            ShapeFamily::FourTeamCareerSeason,
            ShapeFamily::FourTeamCareerPair,
        ]
    }

    pub fn is_six_team(self) -> bool {
        matches!(self, ShapeFamily::SixTeamSeason | ShapeFamily::SixTeamCareer)
    }
}

/// Row and column headers of a puzzle, generic over the header type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridOf<C> {
    pub family: ShapeFamily,
    pub rows: Vec<C>,
    pub columns: Vec<C>,
}

/// Raw generator output
pub type Grid = GridOf<Category>;

/// Grid whose award headers carry qualification
pub type AugmentedGrid = GridOf<AugmentedCategory>;

impl<C> GridOf<C> {
    /// Exactly three headers on each axis.
    pub fn is_well_formed(&self) -> bool {
        self.rows.len() == 3 && self.columns.len() == 3
    }

    /// Every (row, column) header pair, row-major.
    pub fn squares(&self) -> impl Iterator<Item = (&C, &C)> {
        self.rows
            .iter()
            .flat_map(move |r| self.columns.iter().map(move |c| (r, c)))
    }
}

impl Grid {
    /// Team ids across both axes, rows first.
    pub fn team_slots(&self) -> Vec<&TeamId> {
        self.rows
            .iter()
            .chain(self.columns.iter())
            .filter_map(Category::as_team)
            .collect()
    }

    /// Award ids across both axes, row award first.
    pub fn awards(&self) -> Vec<AwardId> {
        self.rows
            .iter()
            .chain(self.columns.iter())
            .filter_map(Category::as_award)
            .collect()
    }
}

impl AugmentedGrid {
    pub fn team_slots(&self) -> Vec<&TeamId> {
        self.rows
            .iter()
            .chain(self.columns.iter())
            .filter_map(AugmentedCategory::as_team)
            .collect()
    }

    /// Awards in the terminal slots: `rows[2]` when it is an award, then `columns[2]`.
    pub fn terminal_awards(&self) -> Vec<(AwardId, QualifiedStatus)> {
        [self.rows.get(2), self.columns.get(2)]
            .into_iter()
            .flatten()
            .filter_map(AugmentedCategory::as_award)
            .collect()
    }

    pub fn is_fully_qualified(&self) -> bool {
        self.rows
            .iter()
            .chain(self.columns.iter())
            .filter_map(AugmentedCategory::as_award)
            .all(|(_, status)| status.is_qualified())
    }

    /// Plain grid with qualification dropped.
    pub fn to_grid(&self) -> Grid {
        Grid {
            family: self.family,
            rows: self.rows.iter().map(AugmentedCategory::category).collect(),
            columns: self.columns.iter().map(AugmentedCategory::category).collect(),
        }
    }
}

impl std::fmt::Display for AugmentedGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const WIDTH: usize = 22;
        write!(f, "{:<WIDTH$}", "")?;
        for col in &self.columns {
            write!(f, "| {:<WIDTH$}", col.to_string())?;
        }
        writeln!(f)?;
        for row in &self.rows {
            write!(f, "{:<WIDTH$}", row.to_string())?;
            for _ in &self.columns {
                write!(f, "| {:<WIDTH$}", "-")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::award::{CareerAward, SeasonAward};

    fn sample() -> AugmentedGrid {
        AugmentedGrid {
            family: ShapeFamily::FourTeamCareerSeason,
            rows: vec![
                AugmentedCategory::Team { id: "NYY".into() },
                AugmentedCategory::Team { id: "BOS".into() },
                AugmentedCategory::Award {
                    id: AwardId::Career(CareerAward::HallOfFame),
                    status: QualifiedStatus::Qualified,
                },
            ],
            columns: vec![
                AugmentedCategory::Team { id: "OAK".into() },
                AugmentedCategory::Team { id: "SDP".into() },
                AugmentedCategory::Award {
                    id: AwardId::Season(SeasonAward::Steals30),
                    status: QualifiedStatus::Unqualified,
                },
            ],
        }
    }

    #[test]
    fn test_category_from_str_prefers_awards() {
        let award: Category = "season_award_mvp".parse().unwrap();
        assert_eq!(award, Category::Award(AwardId::Season(SeasonAward::Mvp)));
        let team: Category = "NYA".parse().unwrap();
        assert_eq!(team, Category::team("NYA"));
    }

    #[test]
    fn test_terminal_awards_and_qualification() {
        let grid = sample();
        assert_eq!(grid.terminal_awards().len(), 2);
        assert!(!grid.is_fully_qualified());
        assert_eq!(grid.team_slots().len(), 4);
        assert_eq!(grid.squares().count(), 9);
    }

    #[test]
    fn test_to_grid_drops_status() {
        let grid = sample().to_grid();
        assert_eq!(grid.awards().len(), 2);
        assert_eq!(grid.rows[2], Category::Award(AwardId::Career(CareerAward::HallOfFame)));
    }

    #[test]
    fn test_display_marks_unqualified() {
        let text = sample().to_string();
        assert!(text.contains("30+ Steal Season*"));
        assert!(text.contains("Hall of Fame"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_category_serde_is_tagged() {
        let json = serde_json::to_value(Category::team("NYY")).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "team", "id": "NYY"}));
        let back: Category =
            serde_json::from_value(serde_json::json!({"kind": "award", "id": "season_award_mvp"}))
                .unwrap();
        assert_eq!(back, Category::Award(AwardId::Season(SeasonAward::Mvp)));
    }
}
