//! camelCase to snake_case column migrations for the Drizzle schema.
//!
//! Scans `mysqlTable(...)` definitions, collects camelCase column keys and
//! renders `ALTER TABLE ... RENAME COLUMN` scripts plus their rollback.

mod generator;
mod schema;
mod sql;

pub use generator::{MigrationError, MigrationReport, generate};
pub use schema::{
    ColumnRename, SUPABASE_TABLES, TableFilter, TableRenames, camel_to_snake, column_count,
    extract_tables,
};
pub use sql::{MigrationProfile, render_migration, render_rollback, render_summary};
