//! `sitegen` - Static-asset generator for the Affirm integration testing suite
//!
//! This library provides the components behind the `sitegen` binary: a
//! structure check for the hand-maintained site assets, and emitters for
//! the `site_config.json` and `test_scenarios.json` files the site reads.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod observability;
pub mod structure;
