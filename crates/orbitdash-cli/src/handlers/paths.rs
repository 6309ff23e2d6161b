//! Paths command handler.

use std::path::Path;

use orbitdash_core::data_root;

use crate::error::CliError;

/// Print the resolved data directory and database file in `key = value`
/// form.
pub fn execute(database_path: &Path) -> Result<(), CliError> {
    println!("data_root = {}", data_root()?.display());
    println!("database = {}", database_path.display());
    Ok(())
}
