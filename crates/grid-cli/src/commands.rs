use anyhow::{bail, Context, Result};
use grid_core::{
    assess, best_grid_for_player, find_player, grids_for_player, load_players, matches, score,
    AugmentedGrid, Category, Eligibility, PlayerRecord,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Where to read players from when no path is given.
pub fn default_players_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("grid").join("players.json"))
        .unwrap_or_else(|| PathBuf::from("data/players.json"))
}

pub fn read_players(path: &Path) -> Result<Vec<PlayerRecord>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let players = load_players(BufReader::new(file))
        .with_context(|| format!("loading players from {}", path.display()))?;
    tracing::info!(count = players.len(), path = %path.display(), "players loaded");
    Ok(players)
}

#[derive(Serialize)]
struct ScoredGrid<'a> {
    score: i64,
    grid: &'a AugmentedGrid,
}

#[derive(Serialize)]
struct SquareVerdict<'a> {
    player: &'a str,
    row: &'a Category,
    column: &'a Category,
    matches: bool,
}

#[derive(Serialize)]
struct EligibilityRow<'a> {
    id: &'a str,
    name: &'a str,
    eligibility: Eligibility,
}

fn print_grid(player: &PlayerRecord, grid: &AugmentedGrid, json: bool) -> Result<()> {
    if json {
        let out = ScoredGrid { score: score(grid), grid };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{} ({})  score {}", player.name, player.years, score(grid));
        println!("{}", grid);
    }
    Ok(())
}

pub fn best(players: &[PlayerRecord], id: &str, json: bool) -> Result<()> {
    let player = find_player(players, id)?;
    let grid = best_grid_for_player(player)
        .with_context(|| format!("player {} should not be in the dataset", player.name))?;
    print_grid(player, &grid, json)
}

/// Ranked grids to show: optionally only fully qualified ones, capped at `limit`.
fn select_grids(
    ranked: &[AugmentedGrid],
    qualified_only: bool,
    limit: Option<usize>,
) -> Vec<&AugmentedGrid> {
    ranked
        .iter()
        .filter(|g| !qualified_only || g.is_fully_qualified())
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

pub fn list(
    players: &[PlayerRecord],
    id: &str,
    qualified_only: bool,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let player = find_player(players, id)?;
    let ranked = grids_for_player(player);
    if ranked.is_empty() {
        bail!("no grids for {}", player.name);
    }

    let chosen = select_grids(&ranked, qualified_only, limit);
    if chosen.is_empty() {
        if qualified_only {
            bail!("no fully qualified grid for {}", player.name);
        }
        bail!("--limit 0 leaves nothing to show");
    }

    if json {
        let out: Vec<ScoredGrid<'_>> = chosen
            .into_iter()
            .map(|grid| ScoredGrid { score: score(grid), grid })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for grid in chosen {
            print_grid(player, grid, false)?;
        }
    }
    Ok(())
}

pub fn check(players: &[PlayerRecord], id: &str, row: &str, column: &str, json: bool) -> Result<()> {
    let player = find_player(players, id)?;
    let row: Category = row.parse()?;
    let column: Category = column.parse()?;
    let verdict = matches(player, &row, &column);

    if json {
        let out = SquareVerdict {
            player: &player.id,
            row: &row,
            column: &column,
            matches: verdict,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if verdict {
        println!("{} fits {} x {}", player.name, row, column);
    } else {
        println!("{} does not fit {} x {}", player.name, row, column);
    }
    Ok(())
}

pub fn random(
    mut players: Vec<PlayerRecord>,
    seed: Option<u64>,
    current_franchises: bool,
    json: bool,
) -> Result<()> {
    if current_franchises {
        players.iter_mut().for_each(PlayerRecord::retain_current_franchises);
    }
    let eligible: Vec<&PlayerRecord> = players.iter().filter(|p| assess(p).is_eligible()).collect();

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let Some(player) = eligible.choose(&mut rng) else {
        bail!("no eligible players in the dataset");
    };
    tracing::debug!(player = %player.id, "picked player");

    let grid = best_grid_for_player(player)?;
    print_grid(player, &grid, json)
}

pub fn eligible(mut players: Vec<PlayerRecord>, current_franchises: bool, json: bool) -> Result<()> {
    if current_franchises {
        players.iter_mut().for_each(PlayerRecord::retain_current_franchises);
    }
    let rows: Vec<EligibilityRow<'_>> = players
        .iter()
        .map(|p| EligibilityRow {
            id: &p.id,
            name: &p.name,
            eligibility: assess(p),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!("{:<12} {:<28} {}", row.id, row.name, row.eligibility);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_core::{CareerAward, QualifiedStatus, SeasonAward, TeamStint};

    fn sample_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/players.json")
    }

    #[test]
    fn test_read_sample_players() {
        let players = read_players(&sample_path()).unwrap();
        assert!(players.iter().any(|p| p.id == "henderi01"));
    }

    #[test]
    fn test_read_missing_file_has_context() {
        let err = read_players(Path::new("/nonexistent/players.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/players.json"));
    }

    #[test]
    fn test_commands_run_on_sample() {
        let players = read_players(&sample_path()).unwrap();
        best(&players, "henderi01", true).unwrap();
        list(&players, "johnsra05", true, None, true).unwrap();
        check(&players, "henderi01", "OAK", "season_award_mvp", true).unwrap();
        random(players.clone(), Some(7), true, true).unwrap();
        eligible(players, false, true).unwrap();
    }

    #[test]
    fn test_select_grids_limits_qualified_grids() {
        let players = read_players(&sample_path()).unwrap();
        let player = find_player(&players, "henderi01").unwrap();
        let ranked = grids_for_player(player);

        let qualified = select_grids(&ranked, true, None);
        assert!(qualified.iter().all(|g| g.is_fully_qualified()));
        assert_eq!(
            qualified.first().copied(),
            ranked.iter().find(|g| g.is_fully_qualified())
        );

        let capped = select_grids(&ranked, true, Some(1));
        assert!(capped.len() <= 1);
        assert_eq!(select_grids(&ranked, false, Some(2)).len(), ranked.len().min(2));
    }

    #[test]
    fn test_list_without_qualified_grid_says_so() {
        let player = PlayerRecord::new("p", "P")
            .with_stint(TeamStint::new("T1").with_award(SeasonAward::Mvp, QualifiedStatus::Qualified))
            .with_stint(TeamStint::new("T2").with_award(SeasonAward::Mvp, QualifiedStatus::Qualified))
            .with_stint(TeamStint::new("T3"))
            .with_stint(TeamStint::new("T4"))
            .with_career_award(CareerAward::HallOfFame, QualifiedStatus::Unqualified);
        let players = vec![player];
        assert!(!grids_for_player(&players[0]).is_empty());

        let err = list(&players, "p", true, None, false).unwrap_err();
        assert!(err.to_string().contains("no fully qualified grid"));
        list(&players, "p", false, Some(1), true).unwrap();
    }

    #[test]
    fn test_unknown_player_fails() {
        let players = read_players(&sample_path()).unwrap();
        assert!(best(&players, "nobody", false).is_err());
    }
}
