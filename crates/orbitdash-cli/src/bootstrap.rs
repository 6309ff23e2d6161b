//! CLI bootstrap - the composition root for the page commands.
//!
//! `serve` builds its own context in `orbitdash-axum`; the other commands
//! only need the page store.

use std::path::PathBuf;

use orbitdash_core::{PageService, database_path};
use orbitdash_db::{DbFactory, setup_database};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// `SQLite` file holding the CMS pages.
    pub database_path: PathBuf,
}

impl CliConfig {
    /// Use `db` if given, otherwise the default database location.
    pub fn resolve(db: Option<PathBuf>) -> Result<Self, CliError> {
        let database_path = match db {
            Some(path) => path,
            None => database_path()?,
        };
        Ok(Self { database_path })
    }
}

/// Composed context for the page commands.
pub struct CliContext {
    pages: PageService,
}

impl CliContext {
    /// Page management service.
    pub const fn pages(&self) -> &PageService {
        &self.pages
    }
}

/// Open (and if needed create) the database and build the page service.
pub async fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    tracing::debug!(
        target: "orbitdash.bootstrap",
        database_path = %config.database_path.display(),
        "CLI bootstrap"
    );
    let pool = setup_database(&config.database_path).await.map_err(|e| {
        CliError::Database(format!("{}: {e:#}", config.database_path.display()))
    })?;
    Ok(CliContext {
        pages: PageService::new(DbFactory::build_pages(pool)),
    })
}
