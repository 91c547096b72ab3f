use crate::award::{AwardId, CareerAward, SeasonAward};
use crate::combinations::combinations;
use crate::grid::{Category, Grid, ShapeFamily};
use crate::player::PlayerRecord;
use crate::team::TeamId;
use std::collections::HashSet;

/// Which shape families the generator should try
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub families: Vec<ShapeFamily>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::all()
    }
}

impl GeneratorConfig {
    pub fn all() -> Self {
        Self {
            families: ShapeFamily::all().to_vec(),
        }
    }

    pub fn six_team_only() -> Self {
        Self {
            families: vec![ShapeFamily::SixTeamSeason, ShapeFamily::SixTeamCareer],
        }
    }

    pub fn four_team_only() -> Self {
        Self {
            families: vec![
                ShapeFamily::FourTeamSeasonPair,
                ShapeFamily::FourTeamCareerSeason,
                ShapeFamily::FourTeamCareerPair,
            ],
        }
    }

    fn includes(&self, family: ShapeFamily) -> bool {
        self.families.contains(&family)
    }
}

/// What a player's record offers to build grids from.
pub(crate) struct AwardProfile<'p> {
    /// Distinct teams, first-seen order
    pub all_teams: Vec<&'p TeamId>,
    /// Season award -> teams it was earned with, both in encounter order
    pub teams_by_season_award: Vec<(SeasonAward, Vec<&'p TeamId>)>,
    /// Held career awards, catalog order
    pub career_awards: Vec<CareerAward>,
}

impl<'p> AwardProfile<'p> {
    pub fn from_player(player: &'p PlayerRecord) -> Self {
        let mut teams_by_season_award: Vec<(SeasonAward, Vec<&'p TeamId>)> = Vec::new();
        for stint in &player.teams {
            for &award in stint.season_awards.keys() {
                let idx = match teams_by_season_award.iter().position(|(a, _)| *a == award) {
                    Some(idx) => idx,
                    None => {
                        teams_by_season_award.push((award, Vec::new()));
                        teams_by_season_award.len() - 1
                    }
                };
                let teams = &mut teams_by_season_award[idx].1;
                if !teams.contains(&&stint.team) {
                    teams.push(&stint.team);
                }
            }
        }

        Self {
            all_teams: player.distinct_teams(),
            teams_by_season_award,
            career_awards: player.held_career_awards(),
        }
    }

    /// Season awards earned with at least `min_teams` different teams.
    pub fn season_awards_with(&self, min_teams: usize) -> impl Iterator<Item = &(SeasonAward, Vec<&'p TeamId>)> {
        self.teams_by_season_award
            .iter()
            .filter(move |(_, teams)| teams.len() >= min_teams)
    }
}

/// Enumerates every candidate grid a player's record supports
pub struct GridGenerator {
    config: GeneratorConfig,
}

impl Default for GridGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GridGenerator {
    /// Create a generator trying every shape family
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// All candidate grids for `player`, family by family. Deterministic in
    /// the order of the player's stints.
    pub fn generate(&self, player: &PlayerRecord) -> Vec<Grid> {
        let profile = AwardProfile::from_player(player);
        let mut grids = Vec::new();

        for &family in ShapeFamily::all() {
            if !self.config.includes(family) {
                continue;
            }
            let before = grids.len();
            match family {
                ShapeFamily::SixTeamSeason => six_team_season(&profile, &mut grids),
                ShapeFamily::SixTeamCareer => six_team_career(&profile, &mut grids),
                ShapeFamily::FourTeamSeasonPair => four_team_season_pair(&profile, &mut grids),
                ShapeFamily::FourTeamCareerSeason => four_team_career_season(&profile, &mut grids),
                ShapeFamily::FourTeamCareerPair => four_team_career_pair(&profile, &mut grids),
            }
            tracing::trace!(
                player = %player.id,
                ?family,
                count = grids.len() - before,
                "generated candidates"
            );
        }

        tracing::debug!(player = %player.id, count = grids.len(), "grid candidates");
        grids
    }
}

/// One axis: the given teams followed by an award.
fn axis(teams: &[&TeamId], award: AwardId) -> Vec<Category> {
    teams
        .iter()
        .map(|t| Category::Team((*t).clone()))
        .chain(std::iter::once(Category::Award(award)))
        .collect()
}

/// First `n` teams of `pool` not in `used`.
fn first_unused<'p>(pool: &[&'p TeamId], used: &[&'p TeamId], n: usize) -> Vec<&'p TeamId> {
    pool.iter()
        .copied()
        .filter(|t| !used.contains(t))
        .take(n)
        .collect()
}

fn six_team_season(profile: &AwardProfile<'_>, grids: &mut Vec<Grid>) {
    if profile.all_teams.len() < 6 {
        return;
    }
    for (award, teams) in profile.season_awards_with(3) {
        for combo in combinations(teams, 3) {
            let rows: Vec<&TeamId> = combo.into_iter().copied().collect();
            let columns = first_unused(&profile.all_teams, &rows, 2);
            grids.push(Grid {
                family: ShapeFamily::SixTeamSeason,
                rows: rows.iter().map(|t| Category::Team((*t).clone())).collect(),
                columns: axis(&columns, AwardId::Season(*award)),
            });
        }
    }
}

fn six_team_career(profile: &AwardProfile<'_>, grids: &mut Vec<Grid>) {
    if profile.all_teams.len() < 6 {
        return;
    }
    for &award in &profile.career_awards {
        grids.push(Grid {
            family: ShapeFamily::SixTeamCareer,
            rows: profile.all_teams[0..3]
                .iter()
                .map(|t| Category::Team((*t).clone()))
                .collect(),
            columns: axis(&profile.all_teams[3..5], AwardId::Career(award)),
        });
    }
}

/// Rows come from the award with fewer teams (the first award on a tie) and
/// are closed by the other award; columns are the reverse.
fn four_team_season_pair(profile: &AwardProfile<'_>, grids: &mut Vec<Grid>) {
    let mut seen: HashSet<Grid> = HashSet::new();
    for (i, (award1, teams1)) in profile.teams_by_season_award.iter().enumerate() {
        for (j, (award2, teams2)) in profile.teams_by_season_award.iter().enumerate() {
            if i == j || teams1.len() < 2 || teams2.len() < 2 {
                continue;
            }
            let mut union: Vec<&TeamId> = teams1.clone();
            union.extend(teams2.iter().copied().filter(|t| !teams1.contains(t)));
            if union.len() < 4 {
                continue;
            }

            let (small, small_award, large, large_award) = if teams1.len() > teams2.len() {
                (teams2, *award2, teams1, *award1)
            } else {
                (teams1, *award1, teams2, *award2)
            };

            for combo in combinations(small, 2) {
                let rows: Vec<&TeamId> = combo.into_iter().copied().collect();
                let available: Vec<&TeamId> = large
                    .iter()
                    .copied()
                    .filter(|t| !rows.contains(t))
                    .collect();
                if available.len() < 2 {
                    tracing::trace!(?small_award, ?large_award, "column pool too small, skipping");
                    continue;
                }
                for column_combo in combinations(&available, 2) {
                    let columns: Vec<&TeamId> = column_combo.into_iter().copied().collect();
                    let grid = Grid {
                        family: ShapeFamily::FourTeamSeasonPair,
                        rows: axis(&rows, AwardId::Season(large_award)),
                        columns: axis(&columns, AwardId::Season(small_award)),
                    };
                    // The mirrored pair rebuilds the same grid when sizes differ.
                    if seen.insert(grid.clone()) {
                        grids.push(grid);
                    }
                }
            }
        }
    }
}

fn four_team_career_season(profile: &AwardProfile<'_>, grids: &mut Vec<Grid>) {
    if profile.career_awards.is_empty() {
        return;
    }
    if profile.all_teams.len() < 4 {
        tracing::trace!("fewer than four teams, skipping career/season grids");
        return;
    }
    for &career in &profile.career_awards {
        for (award, teams) in profile.season_awards_with(2) {
            for combo in combinations(teams, 2) {
                let rows: Vec<&TeamId> = combo.into_iter().copied().collect();
                let columns = first_unused(&profile.all_teams, &rows, 2);
                if columns.len() < 2 {
                    continue;
                }
                grids.push(Grid {
                    family: ShapeFamily::FourTeamCareerSeason,
                    rows: axis(&rows, AwardId::Career(career)),
                    columns: axis(&columns, AwardId::Season(*award)),
                });
            }
        }
    }
}

fn four_team_career_pair(profile: &AwardProfile<'_>, grids: &mut Vec<Grid>) {
    if profile.career_awards.len() < 2 {
        return;
    }
    if profile.all_teams.len() < 4 {
        tracing::trace!("fewer than four teams, skipping career pair grids");
        return;
    }
    for pair in combinations(&profile.career_awards, 2) {
        grids.push(Grid {
            family: ShapeFamily::FourTeamCareerPair,
            rows: axis(&profile.all_teams[0..2], AwardId::Career(*pair[0])),
            columns: axis(&profile.all_teams[2..4], AwardId::Career(*pair[1])),
        });
    }
}
