//! Lingot - Qt Linguist catalog checker and maintainer
//!
//! Lingot is a CLI tool and library for maintaining Qt Linguist TS
//! translation catalogs. It checks catalogs for untranslated entries,
//! placeholder mismatches and conflicting duplicates, merges catalogs
//! against freshly extracted templates, and resolves translations with the
//! same fallback contract the application uses at runtime.
//!
//! ## Module Structure
//!
//! - `catalog`: TS catalog data model, reader, writer, and merging
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Detection rules for catalog issues
//! - `scan`: Catalog discovery and parallel loading
//! - `translator`: Runtime-style lookup across languages
//! - `utils`: Shared utility functions

pub mod catalog;
pub mod cli;
pub mod config;
pub mod issues;
pub mod mcp;
pub mod rules;
pub mod scan;
pub mod translator;
pub mod utils;
