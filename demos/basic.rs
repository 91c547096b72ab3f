//! Basic example of using the grid engine

use grid_core::{
    assess, best_grid_for_player, grids_for_player, load_players, matches, score, Category,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load the sample dataset
    let data = include_str!("../data/players.json");
    let players = load_players(data.as_bytes())?;
    println!("Loaded {} players\n", players.len());

    for player in &players {
        println!("{} ({}): {}", player.name, player.years, assess(player));
    }

    // Best grid for one player
    let player = &players[0];
    let grid = best_grid_for_player(player)?;
    println!("\nBest grid for {} (score {}):", player.name, score(&grid));
    println!("{}", grid);

    // How many candidates were there?
    let ranked = grids_for_player(player);
    println!("Candidates considered: {}", ranked.len());
    if let Some(worst) = ranked.last() {
        println!("Lowest score: {}", score(worst));
    }

    // Grade a couple of guesses
    let row: Category = "OAK".parse()?;
    let col: Category = "season_award_mvp".parse()?;
    println!("\n{} fits {} x {}: {}", player.name, row, col, matches(player, &row, &col));

    let row: Category = "NYY".parse()?;
    println!("{} fits {} x {}: {}", player.name, row, col, matches(player, &row, &col));

    Ok(())
}
