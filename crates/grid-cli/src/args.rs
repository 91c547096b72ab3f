use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "grid", version, about = "Build and grade player grid puzzles")]
pub struct Cli {
    /// Player dataset (JSON array of player records)
    #[arg(long, global = true, env = "GRID_PLAYERS")]
    pub players: Option<PathBuf>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// More logging (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the preferred grid for a player
    Best {
        /// Player id
        player: String,
    },
    /// List every candidate grid for a player, best first
    List {
        player: String,
        /// Only grids without unqualified awards
        #[arg(long)]
        qualified_only: bool,
        /// Show at most this many grids
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Grade a guess: does the player belong in the square?
    Check {
        player: String,
        /// Row header: team code or award id
        row: String,
        /// Column header: team code or award id
        column: String,
    },
    /// Pick an eligible player at random and show their grid
    Random {
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
        /// Ignore stints with clubs outside the current franchise table
        #[arg(long)]
        current_franchises: bool,
    },
    /// Classify every player in the dataset
    Eligible {
        /// Ignore stints with clubs outside the current franchise table
        #[arg(long)]
        current_franchises: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["grid", "check", "henderi01", "NYY", "season_award_mvp"]).unwrap();
        match cli.command {
            Command::Check { player, row, column } => {
                assert_eq!(player, "henderi01");
                assert_eq!(row, "NYY");
                assert_eq!(column, "season_award_mvp");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_flags() {
        let cli = Cli::try_parse_from(["grid", "--json", "-vv", "list", "p", "--qualified-only", "--limit", "3"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Command::List { qualified_only: true, limit: Some(3), .. }
        ));
    }
}
