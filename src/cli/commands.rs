// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `inspect` and `export`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, enum, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::export_use_case::ExportConfig;
use crate::application::inspect_use_case::InspectConfig;
use crate::domain::split::Split;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit a dataset: list manifests, optionally check every image
    Inspect(InspectArgs),

    /// Decode samples, split them, and write the halves as PNGs
    Export(ExportArgs),
}

/// All arguments for the `inspect` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Name of the dataset directory under the images root
    #[arg(long)]
    pub set_name: String,

    /// Root directory holding all datasets
    #[arg(long, default_value = "images")]
    pub images_root: String,

    /// Read every image's header and write a per-image CSV report
    #[arg(long, default_value_t = false)]
    pub check_images: bool,

    /// Directory to write the CSV report into
    #[arg(long, default_value = "reports")]
    pub report_dir: String,
}

/// Convert CLI InspectArgs into the application-layer InspectConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<InspectArgs> for InspectConfig {
    fn from(a: InspectArgs) -> Self {
        InspectConfig {
            images_root:  a.images_root,
            set_name:     a.set_name,
            check_images: a.check_images,
            report_dir:   a.report_dir,
        }
    }
}

/// All arguments for the `export` command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Name of the dataset directory under the images root
    #[arg(long)]
    pub set_name: String,

    /// Root directory holding all datasets
    #[arg(long, default_value = "images")]
    pub images_root: String,

    /// Which split to export from
    #[arg(long, value_enum, default_value_t = Split::Train)]
    pub split: Split,

    /// Index of the single sample to export (defaults to 0)
    #[arg(long, conflicts_with = "all")]
    pub index: Option<usize>,

    /// Export every sample in the split
    #[arg(long, default_value_t = false)]
    pub all: bool,

    /// Directory receiving the exported PNG halves
    #[arg(long, default_value = "exports")]
    pub out_dir: String,

    /// Apply the split's preset transform (flip/normalize)
    /// before writing — normalized output renders washed out
    #[arg(long, default_value_t = false)]
    pub transformed: bool,
}

impl From<ExportArgs> for ExportConfig {
    fn from(a: ExportArgs) -> Self {
        ExportConfig {
            images_root: a.images_root,
            set_name:    a.set_name,
            split:       a.split,
            index:       a.index,
            all:         a.all,
            out_dir:     a.out_dir,
            transformed: a.transformed,
        }
    }
}
