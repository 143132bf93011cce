//! `mealcart_cli` v1:
//! Command-line front end for the manifest pipeline.
//!
//! Architecture:
//! - `cli` : argument parsing and run orchestration

pub mod cli;
