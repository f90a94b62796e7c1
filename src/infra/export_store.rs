// ============================================================
// Layer 5 — Export Store
// ============================================================
// Writes the two halves of a sample back to disk as PNGs so a
// human can eyeball exactly what the training loop will be fed.
//
// File naming convention:
//   <out_dir>/
//     img_000_input.png   ← right half of composite img_000
//     img_000_real.png    ← left half of composite img_000
//     ...
//
// The store expects tensors in [0, 1] — i.e. decoded halves
// BEFORE normalization. Values are clamped on the way out, so
// feeding it a normalized tensor won't crash, but the picture
// will look washed out (normalized values fall outside [0, 1]).
//
// Reference: image crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use image::RgbImage;
use std::{fs, path::PathBuf};

use crate::domain::image_tensor::ImageTensor;
use crate::domain::sample::PairedSample;

/// Writes exported sample halves into one output directory.
pub struct ExportStore {
    /// Directory receiving the PNG files
    dir: PathBuf,
}

impl ExportStore {
    /// Create a new ExportStore.
    /// Creates the directory if it doesn't already exist;
    /// an uncreatable directory fails here, not at first save.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        // create_dir_all creates parent directories too, like `mkdir -p`
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create export directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    /// Write both halves of a sample as `<stem>_input.png` and
    /// `<stem>_real.png`. Returns the two paths written.
    pub fn save_pair(&self, stem: &str, sample: &PairedSample) -> Result<(PathBuf, PathBuf)> {
        let input_path = self.dir.join(format!("{stem}_input.png"));
        let real_path  = self.dir.join(format!("{stem}_real.png"));

        tensor_to_image(&sample.input)
            .save(&input_path)
            .with_context(|| format!("Cannot write '{}'", input_path.display()))?;

        tensor_to_image(&sample.real)
            .save(&real_path)
            .with_context(|| format!("Cannot write '{}'", real_path.display()))?;

        tracing::debug!(
            "Exported '{}' and '{}'",
            input_path.display(),
            real_path.display(),
        );

        Ok((input_path, real_path))
    }

    /// The directory this store writes into
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }
}

/// Convert a CHW [0, 1] tensor back into an RGB8 image.
/// Inverse of the decoder's /255 conversion, with clamping.
fn tensor_to_image(tensor: &ImageTensor) -> RgbImage {
    let (c, h, w) = tensor.dims();
    debug_assert_eq!(c, 3, "export expects 3-channel tensors");

    RgbImage::from_fn(w as u32, h as u32, |x, y| {
        let px = |ch: usize| {
            let v = tensor.get(ch, y as usize, x as usize);
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        };
        image::Rgb([px(0), px(1), px(2)])
    })
}
