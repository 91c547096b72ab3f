mod args;
mod commands;

use anyhow::Result;
use args::{Cli, Command};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let path = cli.players.clone().unwrap_or_else(commands::default_players_path);
    let players = commands::read_players(&path)?;

    match cli.command {
        Command::Best { player } => commands::best(&players, &player, cli.json),
        Command::List {
            player,
            qualified_only,
            limit,
        } => commands::list(&players, &player, qualified_only, limit, cli.json),
        Command::Check {
            player,
            row,
            column,
        } => commands::check(&players, &player, &row, &column, cli.json),
        Command::Random {
            seed,
            current_franchises,
        } => commands::random(players, seed, current_franchises, cli.json),
        Command::Eligible { current_franchises } => {
            commands::eligible(players, current_franchises, cli.json)
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
