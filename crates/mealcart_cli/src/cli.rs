//! Command-line surface: argument parsing and run orchestration.
//!
//! All transform logic lives in `mealcart_manifest`; this module is glue:
//! file I/O, clock read, and error surfacing.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};

use mealcart_io_csv::ingest_order_rows;
use mealcart_io_xlsx::render_archive;
use mealcart_manifest::run::run_pipeline;
use mealcart_manifest::spec::{EnumCustomerGroup, SpecRunOptions};

/// CLI for mealcart: orders export CSV in, manifest archive out.
#[derive(Parser)]
#[clap(
    name = "mealcart-cli",
    version,
    about = "Generate carrier manifest spreadsheets from an orders export CSV"
)]
pub struct Cli {
    /// Path to the orders export CSV file.
    pub input: PathBuf,

    /// Output archive path; defaults to the group's archive name.
    #[clap(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Customer-group ruleset.
    #[clap(long, value_enum)]
    pub group: EnumGroupArg,

    /// Append the Cold Xpress pickup row to the MC manifest.
    #[clap(long)]
    pub cold_express: bool,
}

/// Customer-group argument values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnumGroupArg {
    /// Clean Eats Australia ruleset.
    CleanEats,
    /// Made Active ruleset.
    MadeActive,
}

impl EnumGroupArg {
    fn to_group(self) -> EnumCustomerGroup {
        match self {
            Self::CleanEats => EnumCustomerGroup::CleanEats,
            Self::MadeActive => EnumCustomerGroup::MadeActive,
        }
    }

    fn default_archive_name(self) -> &'static str {
        match self {
            Self::CleanEats => "Meal_Cart_Manifests.zip",
            Self::MadeActive => "MadeActive_Manifests.zip",
        }
    }
}

/// Execute one full run: ingest, transform, render, write.
pub fn run(cli: Cli) -> Result<()> {
    let enum_group = cli.group.to_group();

    let file_input = fs::File::open(&cli.input)
        .with_context(|| format!("failed to open {}", cli.input.display()))?;
    let ingest = ingest_order_rows(file_input, enum_group)
        .with_context(|| format!("failed to ingest {}", cli.input.display()))?;
    for c_warning in &ingest.l_warnings {
        tracing::warn!("{c_warning}");
    }

    let options = SpecRunOptions {
        enum_group,
        if_cold_express: cli.cold_express,
        date_run: Local::now().date_naive(),
    };
    let output = run_pipeline(&ingest.l_rows, &options);
    for c_warning in &output.report.warnings {
        tracing::warn!("{c_warning}");
    }

    let v_archive = render_archive(&output.l_artifacts).context("failed to render archive")?;

    let path_output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(cli.group.default_archive_name()));
    fs::write(&path_output, &v_archive)
        .with_context(|| format!("failed to write {}", path_output.display()))?;

    tracing::info!(
        path = %path_output.display(),
        cnt_artifacts = output.l_artifacts.len(),
        "manifest archive written"
    );
    Ok(())
}
