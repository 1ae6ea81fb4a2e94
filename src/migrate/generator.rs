//! Schema file in, SQL files out.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use super::schema::{TableRenames, extract_tables};
use super::sql::{MigrationProfile, render_migration, render_rollback};

/// Errors that can occur while generating migrations.
#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("Schema file not found: {0}")]
    SchemaNotFound(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Outcome of a generator run.
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationReport {
    pub tables: TableRenames,
    /// Paths written, absent when no column needed renaming.
    pub migration_path: Option<PathBuf>,
    pub rollback_path: Option<PathBuf>,
}

impl MigrationReport {
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Scan `schema_path` and write migration plus rollback scripts to `out_dir`.
pub fn generate(
    schema_path: &Path,
    out_dir: &Path,
    profile: MigrationProfile,
) -> Result<MigrationReport, MigrationError> {
    if !schema_path.exists() {
        return Err(MigrationError::SchemaNotFound(schema_path.to_path_buf()));
    }

    let schema = std::fs::read_to_string(schema_path)?;
    let tables = extract_tables(&schema, &profile.filter());

    if tables.is_empty() {
        return Ok(MigrationReport {
            tables,
            migration_path: None,
            rollback_path: None,
        });
    }

    std::fs::create_dir_all(out_dir)?;

    let migration_path = out_dir.join(profile.migration_file());
    std::fs::write(&migration_path, render_migration(&tables, profile))?;
    info!(path = %migration_path.display(), "wrote migration");

    let rollback_path = out_dir.join(profile.rollback_file());
    std::fs::write(&rollback_path, render_rollback(&tables, profile))?;
    info!(path = %rollback_path.display(), "wrote rollback");

    Ok(MigrationReport {
        tables,
        migration_path: Some(migration_path),
        rollback_path: Some(rollback_path),
    })
}
