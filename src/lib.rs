//! lingo-tools: content and pronunciation tooling for a language-learning app.
//!
//! This crate bundles the app's maintenance tools: a cached wrapper around the
//! Piper text-to-speech CLI, a camelCase-to-snake_case migration generator for
//! the Drizzle schema, a lab quiz seeder and a vocabulary template generator.

pub mod cli;
pub mod config;
pub mod logging;
pub mod migrate;
pub mod quiz;
pub mod tts;
pub mod vocab;
