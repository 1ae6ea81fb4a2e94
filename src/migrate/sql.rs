//! Migration and rollback script rendering.

use super::schema::{TableFilter, TableRenames, column_count};

/// Flavour of migration being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MigrationProfile {
    /// Every table in the schema.
    #[default]
    Full,
    /// Only tables that exist in Supabase.
    SupabaseOnly,
}

impl MigrationProfile {
    /// Tables this profile migrates.
    pub fn filter(&self) -> TableFilter {
        match self {
            MigrationProfile::Full => TableFilter::All,
            MigrationProfile::SupabaseOnly => TableFilter::supabase(),
        }
    }

    /// File name of the forward migration.
    pub fn migration_file(&self) -> &'static str {
        match self {
            MigrationProfile::Full => "supabase-migration.sql",
            MigrationProfile::SupabaseOnly => "supabase-migration-filtered.sql",
        }
    }

    /// File name of the rollback script.
    pub fn rollback_file(&self) -> &'static str {
        match self {
            MigrationProfile::Full => "supabase-rollback.sql",
            MigrationProfile::SupabaseOnly => "supabase-rollback-filtered.sql",
        }
    }
}

const FILTERED_NOTE: &str = "-- FILTERED VERSION: Only includes tables that exist in Supabase";

/// Render the forward migration (camelCase to snake_case).
pub fn render_migration(tables: &TableRenames, profile: MigrationProfile) -> String {
    let mut lines = vec![
        "-- Supabase Schema Migration: Convert camelCase columns to snake_case".to_string(),
    ];

    match profile {
        MigrationProfile::Full => {
            lines.push("-- Generated automatically from drizzle/schema.ts".to_string());
            lines.push("-- Execute these statements in Supabase SQL Editor".to_string());
            lines.push(String::new());
            lines.push("-- WARNING: This will rename columns in your database.".to_string());
        }
        MigrationProfile::SupabaseOnly => {
            lines.push(FILTERED_NOTE.to_string());
            lines.push("-- Execute these statements in Supabase SQL Editor".to_string());
            lines.push(String::new());
            lines.push(
                "-- WARNING: This will rename columns in your Supabase database.".to_string(),
            );
        }
    }
    lines.push("-- Ensure you have a backup before proceeding.".to_string());
    lines.push(String::new());

    let table_label = match profile {
        MigrationProfile::Full => "tables",
        MigrationProfile::SupabaseOnly => "Supabase tables",
    };
    lines.push(format!("-- Total {table_label} affected: {}", tables.len()));
    lines.push(format!("-- Total columns to rename: {}", column_count(tables)));
    lines.push(String::new());

    for (table, columns) in tables {
        lines.push(format!("-- Table: {table} ({} columns)", columns.len()));
        for column in columns {
            lines.push(format!(
                "ALTER TABLE {table} RENAME COLUMN {} TO {};",
                column.camel, column.snake
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Render the rollback (snake_case back to camelCase).
pub fn render_rollback(tables: &TableRenames, profile: MigrationProfile) -> String {
    let mut lines = vec![
        "-- Supabase Schema Rollback: Revert snake_case columns to camelCase".to_string(),
    ];
    if profile == MigrationProfile::SupabaseOnly {
        lines.push(FILTERED_NOTE.to_string());
    }
    lines.push("-- Use this if you need to undo the migration".to_string());
    lines.push(String::new());
    lines.push("-- WARNING: This will rename columns back to their original names.".to_string());
    lines.push(String::new());

    for (table, columns) in tables {
        lines.push(format!("-- Table: {table}"));
        for column in columns {
            lines.push(format!(
                "ALTER TABLE {table} RENAME COLUMN {} TO {};",
                column.snake, column.camel
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Human-readable per-table summary of the renames.
pub fn render_summary(tables: &TableRenames) -> String {
    let mut out = String::new();
    for (table, columns) in tables {
        out.push_str(&format!("\n{table}:\n"));
        for column in columns {
            out.push_str(&format!("  {:30} → {}\n", column.camel, column.snake));
        }
    }
    out
}
