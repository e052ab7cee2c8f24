use std::sync::Arc;
use std::time::Duration;

use seeder_pipeline::generator::{self, SeedCounts};
use seeder_pipeline::ledger::RunLedger;
use seeder_pipeline::orchestrator::SeedData;
use seeder_pipeline::source::CsvSource;
use seeder_registry::EntityRegistry;
use storefront_client::{DryRunClient, StorefrontApi, StorefrontClient};

use crate::cli::{Cli, Command};
use crate::errors::SeedingError;

/// `Dependencies` holds the wired components for one seeding run.
///
/// It includes the backend client (live or dry-run), the fresh registry,
/// the run ledger, and the input rows selected by the subcommand.
pub struct Dependencies {
    pub api: Arc<dyn StorefrontApi>,
    pub registry: EntityRegistry,
    pub ledger: RunLedger,
    pub data: SeedData,
}

impl Dependencies {
    /// Wires up the components described by the CLI arguments.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` on successful initialization or a
    /// `SeedingError` if the client cannot be built or the ledger cannot
    /// be read.
    pub fn new(cli: &Cli) -> Result<Self, SeedingError> {
        let api: Arc<dyn StorefrontApi> = if cli.dry_run {
            Arc::new(DryRunClient::new())
        } else {
            Arc::new(StorefrontClient::new(
                &cli.base_url,
                &cli.username,
                &cli.password,
                Duration::from_millis(cli.delay_ms),
            )?)
        };

        let ledger = match &cli.ledger {
            Some(path) => RunLedger::load(path)?,
            None => RunLedger::disabled(),
        };

        let data = match &cli.command {
            Command::Csv { folder } => SeedData::from_csv(&CsvSource::new(folder)),
            Command::Generate {
                categories,
                brands,
                users,
                products,
            } => SeedData::from_generated(generator::generate(&SeedCounts {
                users: *users,
                brands: *brands,
                categories: *categories,
                products: *products,
            })),
        };

        Ok(Dependencies {
            api,
            registry: EntityRegistry::new(),
            ledger,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn generate_mode_carries_generated_rows() {
        let cli = Cli::parse_from([
            "seeder",
            "--dry-run",
            "generate",
            "--users",
            "2",
            "--brands",
            "2",
            "--categories",
            "2",
            "--products",
            "4",
        ]);
        let deps = Dependencies::new(&cli).unwrap();
        assert_eq!(deps.data.users.as_ref().unwrap().len(), 2);
        assert_eq!(deps.data.products.as_ref().unwrap().len(), 4);
        assert_eq!(deps.data.variants.as_ref().unwrap().len(), 0);
    }

    #[test]
    fn csv_mode_with_missing_folder_loads_zero_rows() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("nope");
        let cli = Cli::parse_from([
            "seeder",
            "--dry-run",
            "csv",
            "--folder",
            folder.to_str().unwrap(),
        ]);
        let deps = Dependencies::new(&cli).unwrap();
        assert!(deps.data.users.as_ref().unwrap().is_empty());
        assert!(deps.data.order_items.as_ref().unwrap().is_empty());
    }

    #[test]
    fn ledger_flag_loads_the_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        std::fs::write(&path, r#"["users"]"#).unwrap();
        let cli = Cli::parse_from([
            "seeder",
            "--dry-run",
            "--ledger",
            path.to_str().unwrap(),
            "csv",
        ]);
        let deps = Dependencies::new(&cli).unwrap();
        assert!(deps.ledger.is_complete("users"));
        assert!(!deps.ledger.is_complete("brands"));
    }
}
