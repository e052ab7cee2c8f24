//! Command-line surface of the seeding tool.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Replays entity data against an e-commerce backend in dependency order.
#[derive(Debug, Parser)]
#[command(name = "seeder", version, about)]
pub struct Cli {
    /// Base URL of the backend API.
    #[arg(long, default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Username used for the login call.
    #[arg(long, default_value = "admin")]
    pub username: String,

    /// Password used for the login call.
    #[arg(long, default_value = "password")]
    pub password: String,

    /// Fixed delay between requests, in milliseconds.
    #[arg(long, default_value_t = 200)]
    pub delay_ms: u64,

    /// Path to the resumable run ledger; steps recorded there are skipped.
    #[arg(long)]
    pub ledger: Option<PathBuf>,

    /// Perform no remote writes; dependent steps run on synthesized ids.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug-level logging.
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replay CSV files from a folder, one file per entity kind.
    Csv {
        /// Folder containing the CSV files.
        #[arg(long, default_value = "data")]
        folder: PathBuf,
    },
    /// Seed deterministic generated data for the root entity kinds.
    Generate {
        /// Number of categories to create.
        #[arg(long, default_value_t = 15)]
        categories: usize,
        /// Number of brands to create.
        #[arg(long, default_value_t = 10)]
        brands: usize,
        /// Number of users to create.
        #[arg(long, default_value_t = 5)]
        users: usize,
        /// Number of products to create.
        #[arg(long, default_value_t = 100)]
        products: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_surface() {
        let cli = Cli::parse_from(["seeder", "csv"]);
        assert_eq!(cli.base_url, "http://localhost:8080");
        assert_eq!(cli.username, "admin");
        assert_eq!(cli.delay_ms, 200);
        assert!(!cli.dry_run);
        match cli.command {
            Command::Csv { folder } => assert_eq!(folder, PathBuf::from("data")),
            Command::Generate { .. } => panic!("expected csv subcommand"),
        }
    }

    #[test]
    fn generate_counts_parse() {
        let cli = Cli::parse_from([
            "seeder",
            "--dry-run",
            "generate",
            "--products",
            "25",
            "--brands",
            "3",
        ]);
        assert!(cli.dry_run);
        match cli.command {
            Command::Generate {
                categories,
                brands,
                users,
                products,
            } => {
                assert_eq!(categories, 15);
                assert_eq!(brands, 3);
                assert_eq!(users, 5);
                assert_eq!(products, 25);
            }
            Command::Csv { .. } => panic!("expected generate subcommand"),
        }
    }
}
