use crate::award::AwardTimespan;
use crate::grid::AugmentedGrid;
use crate::{GridError, Result};
use std::cmp::Reverse;

/// Weights of the preference heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    /// Per season-timespan award
    pub season_bonus: i64,
    /// Per statistic-linked award
    pub statistic_bonus: i64,
    /// Grid with a single award (six teams)
    pub single_award_bonus: i64,
    /// Two awards with the same timespan
    pub same_timespan_penalty: i64,
    /// Two awards tracking the same statistic
    pub same_statistic_penalty: i64,
    /// Per unqualified award
    pub unqualified_penalty: i64,
    /// Score of a grid that does not have three headers per axis
    pub malformed_score: i64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            season_bonus: 2,
            statistic_bonus: 1,
            single_award_bonus: 10,
            same_timespan_penalty: 4,
            same_statistic_penalty: 50,
            unqualified_penalty: 10_000,
            malformed_score: -1_000_000_000_000,
        }
    }
}

/// Ranks candidate grids by preference. Higher is better.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    weights: ScoreWeights,
}

impl Scorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Preference score of one grid.
    pub fn score(&self, grid: &AugmentedGrid) -> i64 {
        let w = &self.weights;
        if !grid.is_well_formed() {
            return w.malformed_score;
        }

        let awards = grid.terminal_awards();
        let mut score = 0;
        for (id, status) in &awards {
            if !status.is_qualified() {
                score -= w.unqualified_penalty;
            }
            if id.timespan() == AwardTimespan::Season {
                score += w.season_bonus;
            }
            if id.statistic().is_some() {
                score += w.statistic_bonus;
            }
        }

        match awards.as_slice() {
            [_] => score += w.single_award_bonus,
            [(a, _), (b, _)] => {
                if a.timespan() == b.timespan() {
                    score -= w.same_timespan_penalty;
                }
                if a.statistic().is_some() && a.statistic() == b.statistic() {
                    score -= w.same_statistic_penalty;
                }
            }
            _ => {}
        }
        score
    }

    /// Sort by descending score; equal scores keep their input order.
    pub fn rank(&self, grids: Vec<AugmentedGrid>) -> Vec<AugmentedGrid> {
        let mut scored: Vec<(i64, AugmentedGrid)> = grids
            .into_iter()
            .map(|g| (self.score(&g), g))
            .collect();
        scored.sort_by_key(|(score, _)| Reverse(*score));
        for (score, grid) in &scored {
            tracing::trace!(score, family = ?grid.family, "ranked grid");
        }
        scored.into_iter().map(|(_, g)| g).collect()
    }

    /// Highest-scoring grid.
    pub fn best(&self, grids: Vec<AugmentedGrid>) -> Result<AugmentedGrid> {
        self.rank(grids)
            .into_iter()
            .next()
            .ok_or(GridError::EmptyCandidateSet)
    }

    /// First grid in `ranked` with no unqualified award.
    pub fn first_fully_qualified<'a>(&self, ranked: &'a [AugmentedGrid]) -> Option<&'a AugmentedGrid> {
        ranked.iter().find(|g| g.is_fully_qualified())
    }
}

/// Score with the default weights.
pub fn score(grid: &AugmentedGrid) -> i64 {
    Scorer::new().score(grid)
}

/// Rank with the default weights.
pub fn rank_grids(grids: Vec<AugmentedGrid>) -> Vec<AugmentedGrid> {
    Scorer::new().rank(grids)
}

/// Best grid under the default weights; `EmptyCandidateSet` when there is none.
pub fn best_grid(grids: Vec<AugmentedGrid>) -> Result<AugmentedGrid> {
    Scorer::new().best(grids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::award::{AwardId, CareerAward, SeasonAward};
    use crate::grid::{AugmentedCategory, ShapeFamily};
    use crate::player::QualifiedStatus;

    const Q: QualifiedStatus = QualifiedStatus::Qualified;
    const U: QualifiedStatus = QualifiedStatus::Unqualified;

    fn team(code: &str) -> AugmentedCategory {
        AugmentedCategory::Team { id: code.into() }
    }

    fn award(id: AwardId, status: QualifiedStatus) -> AugmentedCategory {
        AugmentedCategory::Award { id, status }
    }

    fn six_team(id: AwardId, status: QualifiedStatus) -> AugmentedGrid {
        AugmentedGrid {
            family: ShapeFamily::SixTeamSeason,
            rows: vec![team("A"), team("B"), team("C")],
            columns: vec![team("D"), team("E"), award(id, status)],
        }
    }

    fn four_team(row: (AwardId, QualifiedStatus), col: (AwardId, QualifiedStatus)) -> AugmentedGrid {
        AugmentedGrid {
            family: ShapeFamily::FourTeamSeasonPair,
            rows: vec![team("A"), team("B"), award(row.0, row.1)],
            columns: vec![team("C"), team("D"), award(col.0, col.1)],
        }
    }

    #[test]
    fn test_six_team_season_stat_award() {
        // season +2, statistic +1, single award +10
        assert_eq!(score(&six_team(AwardId::Season(SeasonAward::HomeRuns40), Q)), 13);
        assert_eq!(score(&six_team(AwardId::Season(SeasonAward::Mvp), Q)), 12);
        assert_eq!(score(&six_team(AwardId::Career(CareerAward::HallOfFame), Q)), 10);
    }

    #[test]
    fn test_unqualified_penalty() {
        assert_eq!(
            score(&six_team(AwardId::Season(SeasonAward::Average300), U)),
            13 - 10_000
        );
    }

    #[test]
    fn test_pair_penalties() {
        // two season awards: 2 + 2 - 4
        let g = four_team(
            (AwardId::Season(SeasonAward::Mvp), Q),
            (AwardId::Season(SeasonAward::AllStar), Q),
        );
        assert_eq!(score(&g), 0);

        // career stat +1, season stat +3, both track hits
        let g = four_team(
            (AwardId::Career(CareerAward::Hits3000), Q),
            (AwardId::Season(SeasonAward::Hits200), Q),
        );
        assert_eq!(score(&g), 1 + 3 - 50);

        let g = four_team(
            (AwardId::Career(CareerAward::HallOfFame), Q),
            (AwardId::Season(SeasonAward::HomeRuns40), Q),
        );
        assert_eq!(score(&g), 3);
    }

    #[test]
    fn test_malformed_grid_sentinel() {
        let mut g = six_team(AwardId::Season(SeasonAward::Mvp), Q);
        g.rows.pop();
        assert_eq!(score(&g), ScoreWeights::default().malformed_score);
    }

    #[test]
    fn test_rank_is_stable_and_descending() {
        let a = four_team(
            (AwardId::Season(SeasonAward::Mvp), Q),
            (AwardId::Season(SeasonAward::AllStar), Q),
        );
        let b = six_team(AwardId::Season(SeasonAward::Mvp), Q);
        let c = four_team(
            (AwardId::Season(SeasonAward::AllStar), Q),
            (AwardId::Season(SeasonAward::Mvp), Q),
        );
        let ranked = rank_grids(vec![a.clone(), b.clone(), c.clone()]);
        assert_eq!(ranked, vec![b, a, c]);
    }

    #[test]
    fn test_best_grid_empty_is_error() {
        assert!(matches!(best_grid(Vec::new()), Err(GridError::EmptyCandidateSet)));
    }

    #[test]
    fn test_first_fully_qualified_skips_unqualified() {
        let scorer = Scorer::with_weights(ScoreWeights {
            unqualified_penalty: 0,
            ..ScoreWeights::default()
        });
        let ranked = scorer.rank(vec![
            four_team(
                (AwardId::Career(CareerAward::HallOfFame), Q),
                (AwardId::Season(SeasonAward::Steals30), Q),
            ),
            six_team(AwardId::Season(SeasonAward::Steals30), U),
        ]);
        assert_eq!(ranked[0].family, ShapeFamily::SixTeamSeason);
        let chosen = Scorer::new().first_fully_qualified(&ranked).unwrap();
        assert_eq!(chosen.family, ShapeFamily::FourTeamSeasonPair);
    }

    #[test]
    fn test_custom_weights() {
        let scorer = Scorer::with_weights(ScoreWeights {
            single_award_bonus: 0,
            ..ScoreWeights::default()
        });
        assert_eq!(scorer.score(&six_team(AwardId::Season(SeasonAward::Mvp), Q)), 2);
    }
}
