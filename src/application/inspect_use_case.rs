// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Audits one dataset before it is handed to a training run:
//
//   Step 1: List the filename manifest     (Layer 4 - data)
//   Step 2: Log per-split counts
//   Step 3: (optional) Read every image's header and write a
//           CSV report of its dimensions   (Layer 5 - infra)
//
// Step 3 only probes headers, never full pixel data, so it is
// reasonable to run even on large datasets. The manifest-only
// pass touches no image files at all.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::data::decoder::probe_dimensions;
use crate::data::lister::list_image_names;
use crate::domain::split::Split;
use crate::infra::report::{ImageRecord, ReportLogger};

// ─── Inspection Configuration ────────────────────────────────────────────────
// Serialisable so a run's settings can be recorded alongside
// its report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectConfig {
    pub images_root:  String,
    pub set_name:     String,
    pub check_images: bool,
    pub report_dir:   String,
}

// ─── InspectUseCase ──────────────────────────────────────────────────────────
// Owns the config and runs the audit end to end.
pub struct InspectUseCase {
    config: InspectConfig,
}

/// What an inspection found, returned to the CLI for display.
#[derive(Debug, Clone)]
pub struct InspectSummary {
    pub train_count: usize,
    pub val_count:   usize,
    /// Images whose halves have unequal widths (odd composite
    /// width). Only populated when check_images is on.
    pub unbalanced:  usize,
    /// Where the CSV report was written, if one was
    pub report_path: Option<PathBuf>,
}

impl InspectUseCase {
    pub fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    /// Execute the full inspection
    pub fn execute(&self) -> Result<InspectSummary> {
        let cfg  = &self.config;
        let root = PathBuf::from(&cfg.images_root);

        // ── Step 1: Build the manifest ───────────────────────────────────────
        tracing::info!("Inspecting dataset '{}' under '{}'", cfg.set_name, cfg.images_root);
        let manifest = list_image_names(&root, &cfg.set_name)?;

        // ── Step 2: Per-split counts ─────────────────────────────────────────
        let train_count = manifest.count(Split::Train);
        let val_count   = manifest.count(Split::Val);
        tracing::info!("{} train images, {} val images", train_count, val_count);

        if !cfg.check_images {
            return Ok(InspectSummary {
                train_count,
                val_count,
                unbalanced:  0,
                report_path: None,
            });
        }

        // ── Step 3: Probe every image, one CSV row each ──────────────────────
        // Header-only reads keep the audit fast; a single
        // unreadable file fails the whole audit — a dataset with
        // a broken image should not reach training.
        let logger = ReportLogger::new(&cfg.report_dir)?;

        // Record the settings this report was produced with, so
        // a report found later can be traced back to its run.
        let config_path = PathBuf::from(&cfg.report_dir).join("inspect_config.json");
        fs::write(&config_path, serde_json::to_string_pretty(cfg)?)
            .with_context(|| format!("Cannot write config to '{}'", config_path.display()))?;

        let mut unbalanced = 0usize;

        for split in [Split::Train, Split::Val] {
            let split_dir = root.join(&cfg.set_name).join(split.dir_name());

            for name in manifest.names(split) {
                let path = split_dir.join(name);
                let (width, height) = probe_dimensions(&path)
                    .with_context(|| format!("While checking {} split", split))?;

                let record = ImageRecord::new(name.clone(), width, height);
                if !record.is_balanced() {
                    tracing::warn!(
                        "'{}' has odd width {} — halves will be {} and {} wide",
                        name,
                        record.width,
                        record.real_width,
                        record.input_width,
                    );
                    unbalanced += 1;
                }
                logger.log(&record)?;
            }
        }

        tracing::info!(
            "Checked {} images, {} with unequal halves; report at '{}'",
            train_count + val_count,
            unbalanced,
            logger.csv_path().display(),
        );

        Ok(InspectSummary {
            train_count,
            val_count,
            unbalanced,
            report_path: Some(logger.csv_path().clone()),
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::fs;

    fn make_dataset(train_widths: &[u32], val_widths: &[u32]) -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        for (split, widths) in [("train", train_widths), ("val", val_widths)] {
            let dir = tmp.path().join("facades").join(split);
            fs::create_dir_all(&dir).unwrap();
            for (i, &w) in widths.iter().enumerate() {
                let img = RgbImage::from_pixel(w, 2, Rgb([10, 20, 30]));
                img.save(dir.join(format!("img_{:03}.png", i))).unwrap();
            }
        }
        tmp
    }

    fn config(tmp: &tempfile::TempDir, check: bool) -> InspectConfig {
        InspectConfig {
            images_root:  tmp.path().to_string_lossy().into_owned(),
            set_name:     "facades".into(),
            check_images: check,
            report_dir:   tmp.path().join("report").to_string_lossy().into_owned(),
        }
    }

    #[test]
    fn test_counts_without_decoding() {
        let tmp     = make_dataset(&[8, 8], &[8]);
        let summary = InspectUseCase::new(config(&tmp, false)).execute().unwrap();

        assert_eq!(summary.train_count, 2);
        assert_eq!(summary.val_count,   1);
        assert!(summary.report_path.is_none());
    }

    #[test]
    fn test_check_images_counts_unbalanced_and_writes_report() {
        let tmp     = make_dataset(&[8, 9], &[8]);
        let summary = InspectUseCase::new(config(&tmp, true)).execute().unwrap();

        assert_eq!(summary.unbalanced, 1);
        let report = summary.report_path.unwrap();
        let rows   = fs::read_to_string(report).unwrap();
        // header + 3 images
        assert_eq!(rows.lines().count(), 4);
    }

    #[test]
    fn test_run_settings_recorded_next_to_report() {
        let tmp = make_dataset(&[8], &[8]);
        InspectUseCase::new(config(&tmp, true)).execute().unwrap();

        let json = fs::read_to_string(tmp.path().join("report").join("inspect_config.json")).unwrap();
        let back: InspectConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.set_name, "facades");
        assert!(back.check_images);
    }

    #[test]
    fn test_corrupt_image_fails_the_audit() {
        let tmp = make_dataset(&[8], &[8]);
        fs::write(
            tmp.path().join("facades").join("val").join("img_000.png"),
            b"garbage",
        )
        .unwrap();

        let result = InspectUseCase::new(config(&tmp, true)).execute();
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_dataset_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = InspectConfig {
            images_root:  tmp.path().to_string_lossy().into_owned(),
            set_name:     "absent".into(),
            check_images: false,
            report_dir:   tmp.path().join("r").to_string_lossy().into_owned(),
        };
        assert!(InspectUseCase::new(cfg).execute().is_err());
    }
}
