//! Langsync - translation catalog synchronisation
//!
//! Langsync keeps a database-backed translation catalog in step with the
//! locale files of an application. It imports locale files into the store,
//! scans source code for translation keys that are used but not defined,
//! exports the store back to locale files, and records keys that miss at
//! lookup time.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reports)
//! - `config`: Configuration file loading and parsing
//! - `core`: Reconciliation and discovery engine
//! - `error`: Error taxonomy shared by the engine
//! - `logging`: tracing subscriber setup for the binary

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
