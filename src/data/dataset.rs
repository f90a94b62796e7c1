// ============================================================
// Layer 4 — Paired-Image Dataset
// ============================================================
// The sample provider the whole pipeline exists to build.
//
// Lifecycle:
//   - Construction lists the train/val filenames ONCE (sorted,
//     immutable afterwards) and fixes the split mode.
//   - Indexed access is lazy: nothing is decoded until a sample
//     is asked for, and nothing is cached afterwards.
//
// Indexed access, step by step:
//   1. Look up the filename at `index` in the selected manifest
//   2. Build <images_root>/<set_name>/<split>/<filename>
//   3. Decode the composite and split it at floor(W/2)
//   4. Apply the transform to each half INDEPENDENTLY
//   5. Return the (input, real) pair
//
// Failure policy: an out-of-range index and an undecodable file
// both surface as errors from get_pair — nothing is retried or
// recovered here. The Burn Dataset trait cannot carry errors
// (get returns Option), so that impl logs and returns None.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §9 (Error Handling)

use anyhow::{anyhow, Context, Result};
use burn::data::dataset::Dataset;
use std::path::{Path, PathBuf};

use crate::data::decoder::decode_pair;
use crate::data::lister::{list_image_names, ImageManifest};
use crate::domain::sample::PairedSample;
use crate::domain::split::Split;
use crate::domain::traits::{ImageTransform, PairProvider};

/// Boxed transform as stored by the dataset. ImageTransform is
/// Send + Sync by definition, which is what Burn's Dataset trait
/// needs (the DataLoader reads from worker threads).
pub type SharedTransform = Box<dyn ImageTransform>;

/// Serves (input, real) pairs from one split of one dataset.
pub struct PairedImageDataset {
    /// Root directory holding all datasets
    images_root: PathBuf,

    /// Which dataset under the root (e.g. "facades")
    set_name: String,

    /// Which split to read — fixed at construction
    split: Split,

    /// Sorted filename lists, loaded once at construction
    manifest: ImageManifest,

    /// Optional per-half transform (None = raw [0,1] tensors)
    transform: Option<SharedTransform>,
}

impl PairedImageDataset {
    /// Create a dataset for one split.
    ///
    /// Lists the filenames eagerly — a missing train/ or val/
    /// directory fails here, not on first access.
    pub fn new(
        images_root: impl Into<PathBuf>,
        set_name: impl Into<String>,
        split: Split,
        transform: Option<SharedTransform>,
    ) -> Result<Self> {
        let images_root = images_root.into();
        let set_name    = set_name.into();
        let manifest    = list_image_names(&images_root, &set_name)?;

        Ok(Self { images_root, set_name, split, manifest, transform })
    }

    /// Number of samples in the selected split
    pub fn sample_count(&self) -> usize {
        self.manifest.count(self.split)
    }

    /// The filename serving a given index, if in range
    pub fn file_name(&self, index: usize) -> Option<&str> {
        self.manifest
            .names(self.split)
            .get(index)
            .map(String::as_str)
    }

    /// Full path for a given filename in this split
    fn image_path(&self, name: &str) -> PathBuf {
        self.images_root
            .join(&self.set_name)
            .join(self.split.dir_name())
            .join(name)
    }
}

impl PairProvider for PairedImageDataset {
    fn len(&self) -> usize {
        self.sample_count()
    }

    /// Decode, split, and transform the sample at `index`.
    fn get_pair(&self, index: usize) -> Result<PairedSample> {
        let name = self.file_name(index).ok_or_else(|| {
            anyhow!(
                "Index {} out of range for {} split of '{}' ({} samples)",
                index,
                self.split,
                self.set_name,
                self.sample_count(),
            )
        })?;

        let path = self.image_path(name);
        let pair = decode_pair(&path)
            .with_context(|| format!("Sample {} of {} split", index, self.split))?;

        // The transform sees each half on its own, so e.g. a
        // random flip can fire on one half and not the other.
        let pair = match &self.transform {
            Some(t) => PairedSample::new(t.apply(pair.input), t.apply(pair.real)),
            None    => pair,
        };

        Ok(pair)
    }
}

// ─── Burn Dataset Trait Implementation ────────────────────────────────────────
// This is the hand-off surface: a downstream Burn DataLoader
// drives the dataset through get()/len(). Batching, shuffling,
// and any worker parallelism live entirely on that side.
impl Dataset<PairedSample> for PairedImageDataset {
    fn get(&self, index: usize) -> Option<PairedSample> {
        match PairProvider::get_pair(self, index) {
            Ok(sample) => Some(sample),
            Err(e) => {
                // Out of range is normal end-of-iteration for a
                // DataLoader; a decode failure is worth a warning.
                if index < self.sample_count() {
                    tracing::warn!("Failed to load sample {}: {:#}", index, e);
                }
                None
            }
        }
    }

    fn len(&self) -> usize {
        self.sample_count()
    }
}
