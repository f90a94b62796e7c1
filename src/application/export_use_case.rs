// ============================================================
// Layer 2 — ExportUseCase
// ============================================================
// Pulls samples out of a dataset exactly the way a training
// loop would, and writes the halves to disk for inspection:
//
//   Step 1: Build the dataset for the chosen split  (Layer 4)
//   Step 2: Resolve which indices to export
//   Step 3: For each index, fetch the (input, real) pair
//   Step 4: Write both halves as PNGs               (Layer 5)
//
// By default the exported halves are the raw decoded pixels.
// With `transformed` set, the split's preset transform (random
// flip + normalize for train, normalize for val) runs first —
// useful to sanity-check the augmentation, though normalized
// pixels render washed out.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::dataset::{PairedImageDataset, SharedTransform};
use crate::data::transform::{training_transform, validation_transform};
use crate::domain::split::Split;
use crate::domain::traits::PairProvider;
use crate::infra::export_store::ExportStore;

// ─── Export Configuration ────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub images_root: String,
    pub set_name:    String,
    pub split:       Split,
    /// Export only this index; None with all=false exports index 0
    pub index:       Option<usize>,
    /// Export every sample in the split
    pub all:         bool,
    pub out_dir:     String,
    /// Apply the split's preset transform before writing
    pub transformed: bool,
}

// ─── ExportUseCase ───────────────────────────────────────────────────────────
pub struct ExportUseCase {
    config: ExportConfig,
}

impl ExportUseCase {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Execute the export. Returns how many pairs were written.
    pub fn execute(&self) -> Result<usize> {
        let cfg = &self.config;

        // ── Step 1: Build the dataset ────────────────────────────────────────
        // Same constructor a training loop would use; the only
        // difference is whether we plug in the preset transform.
        let transform: Option<SharedTransform> = if cfg.transformed {
            Some(match cfg.split {
                Split::Train => Box::new(training_transform()),
                Split::Val   => Box::new(validation_transform()),
            })
        } else {
            None
        };

        let dataset = PairedImageDataset::new(
            PathBuf::from(&cfg.images_root),
            cfg.set_name.clone(),
            cfg.split,
            transform,
        )?;

        if dataset.sample_count() == 0 {
            return Err(anyhow!(
                "No images in {} split of '{}'",
                cfg.split,
                cfg.set_name,
            ));
        }

        // ── Step 2: Which indices? ───────────────────────────────────────────
        let indices: Vec<usize> = if cfg.all {
            (0..dataset.sample_count()).collect()
        } else {
            vec![cfg.index.unwrap_or(0)]
        };

        // ── Steps 3 & 4: Fetch and write each pair ───────────────────────────
        let store = ExportStore::new(&cfg.out_dir)?;

        for &index in &indices {
            // file_name is only None past the end, and get_pair
            // reports that case with a proper error — so look the
            // name up after the fetch succeeds.
            let pair = dataset.get_pair(index)?;
            let name = dataset
                .file_name(index)
                .ok_or_else(|| anyhow!("Index {} vanished from manifest", index))?;

            // img_0042.png → img_0042; keep the whole name if
            // there is no extension to strip
            let stem = name.rsplit_once('.').map(|(s, _)| s).unwrap_or(name);

            let (c, h, w) = pair.input.dims();
            tracing::info!(
                "Sample {} ('{}'): input {}x{}x{}, halves match: {}",
                index,
                name,
                c,
                h,
                w,
                pair.halves_match(),
            );

            store.save_pair(stem, &pair)?;
        }

        tracing::info!(
            "Exported {} pair(s) to '{}'",
            indices.len(),
            store.dir().display(),
        );

        Ok(indices.len())
    }
}
