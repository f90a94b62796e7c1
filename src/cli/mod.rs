// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `inspect` — audits a dataset's manifest and images
//   2. `export`  — writes split sample halves to disk as PNGs
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ExportArgs, InspectArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "image-pair-prep",
    version = "0.1.0",
    about = "Prepare paired side-by-side images for image-to-image translation training."
)]
pub struct Cli {
    /// The subcommand to run (inspect or export)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Inspect(args) => Self::run_inspect(args),
            Commands::Export(args)  => Self::run_export(args),
        }
    }

    /// Handles the `inspect` subcommand.
    /// Converts CLI args into an InspectConfig and hands off to Layer 2.
    fn run_inspect(args: InspectArgs) -> Result<()> {
        use crate::application::inspect_use_case::InspectUseCase;

        tracing::info!("Inspecting dataset '{}'", args.set_name);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = InspectUseCase::new(args.into());
        let summary  = use_case.execute()?;

        println!(
            "Dataset OK: {} train, {} val",
            summary.train_count, summary.val_count
        );
        if let Some(path) = summary.report_path {
            println!(
                "Report written to {} ({} images with unequal halves)",
                path.display(),
                summary.unbalanced
            );
        }
        Ok(())
    }

    /// Handles the `export` subcommand.
    /// Fetches samples through the dataset and dumps their halves.
    fn run_export(args: ExportArgs) -> Result<()> {
        use crate::application::export_use_case::ExportUseCase;

        let out_dir  = args.out_dir.clone();
        let use_case = ExportUseCase::new(args.into());
        let count    = use_case.execute()?;

        println!("Exported {count} pair(s) to {out_dir}");
        Ok(())
    }
}
