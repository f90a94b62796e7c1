// ============================================================
// Layer 4 — Composite Decoder & Splitter
// ============================================================
// Decodes one composite file and splits it into its two halves.
//
// Each file is a single image holding two pictures side by side:
//
//   columns [0, floor(W/2))   → the "real" half (ground truth)
//   columns [floor(W/2), W)   → the "input" half (model input)
//
// For odd widths the extra column goes to the input half:
//   W = 9 → real is 4 wide, input is 5 wide.
//
// Decoding is delegated entirely to the `image` crate. Whatever
// the format on disk (PNG, JPEG), we convert to RGB8 first so
// grayscale and RGBA files still come out as 3 channels — the
// same behaviour as OpenCV's default imread.
//
// A file that is not a decodable image fails here with the
// decoder's error (plus path context). Nothing is recovered.
//
// Reference: image crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use image::RgbImage;
use std::path::Path;

use crate::domain::image_tensor::ImageTensor;
use crate::domain::sample::PairedSample;

/// Read just the (width, height) of an image from its header,
/// without decoding pixel data. Used by the audit pass, where
/// decoding every full image would be wasted work.
pub fn probe_dimensions(path: &Path) -> Result<(u32, u32)> {
    image::image_dimensions(path)
        .with_context(|| format!("Cannot read image header of '{}'", path.display()))
}

/// Decode `path` and split it into (input, real) tensors.
/// No transform is applied — that is the dataset's job.
pub fn decode_pair(path: &Path) -> Result<PairedSample> {
    let img = image::open(path)
        .with_context(|| format!("Cannot decode image '{}'", path.display()))?
        .to_rgb8();

    let (width, _height) = img.dimensions();

    // Integer midpoint — the defining split rule of the format
    let half = width / 2;

    let real  = region_to_tensor(&img, 0, half);
    let input = region_to_tensor(&img, half, width - half);

    tracing::debug!(
        "Decoded '{}': {}x{} → real {}w, input {}w",
        path.display(),
        width,
        img.height(),
        half,
        width - half,
    );

    Ok(PairedSample::new(input, real))
}

/// Copy a column range [x0, x0 + w) of an RGB image into a
/// CHW f32 tensor with values scaled to [0, 1].
fn region_to_tensor(img: &RgbImage, x0: u32, w: u32) -> ImageTensor {
    let h     = img.height();
    let plane = (w * h) as usize;

    // One flat buffer for all three channel planes
    let mut data = vec![0.0f32; 3 * plane];

    for y in 0..h {
        for x in 0..w {
            let pixel = img.get_pixel(x0 + x, y);
            let base  = (y * w + x) as usize;
            data[base]             = pixel[0] as f32 / 255.0;
            data[plane + base]     = pixel[1] as f32 / 255.0;
            data[2 * plane + base] = pixel[2] as f32 / 255.0;
        }
    }

    ImageTensor::new(data, 3, h as usize, w as usize)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    /// Write a WxH image where every pixel encodes its own
    /// column index in the red channel. Lets us check exactly
    /// which columns landed in which half.
    fn column_coded_image(dir: &Path, w: u32, h: u32) -> std::path::PathBuf {
        let mut img = RgbImage::new(w, h);
        for y in 0..h {
            for x in 0..w {
                img.put_pixel(x, y, Rgb([x as u8, 0, 0]));
            }
        }
        let path = dir.join("composite.png");
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_even_width_split() {
        let tmp  = tempfile::tempdir().unwrap();
        let path = column_coded_image(tmp.path(), 8, 2);
        let pair = decode_pair(&path).unwrap();

        assert_eq!(pair.real.dims(),  (3, 2, 4));
        assert_eq!(pair.input.dims(), (3, 2, 4));
        assert!(pair.halves_match());
    }

    #[test]
    fn test_odd_width_extra_column_goes_to_input() {
        let tmp  = tempfile::tempdir().unwrap();
        let path = column_coded_image(tmp.path(), 9, 2);
        let pair = decode_pair(&path).unwrap();

        // floor(9/2) = 4 → real is 4 wide, input is 9 - 4 = 5 wide
        assert_eq!(pair.real.width(),  4);
        assert_eq!(pair.input.width(), 5);
    }

    #[test]
    fn test_halves_carry_the_right_columns() {
        let tmp  = tempfile::tempdir().unwrap();
        let path = column_coded_image(tmp.path(), 6, 1);
        let pair = decode_pair(&path).unwrap();

        // Red channel of real half = columns 0..3 of the source
        for x in 0..3 {
            let expected = x as f32 / 255.0;
            assert!((pair.real.get(0, 0, x) - expected).abs() < 1e-6);
        }
        // Red channel of input half = columns 3..6 of the source
        for x in 0..3 {
            let expected = (x + 3) as f32 / 255.0;
            assert!((pair.input.get(0, 0, x) - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_values_scaled_to_unit_range() {
        let tmp  = tempfile::tempdir().unwrap();
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([255, 0, 128]));
        img.put_pixel(1, 0, Rgb([255, 0, 128]));
        let path = tmp.path().join("white.png");
        img.save(&path).unwrap();

        let pair = decode_pair(&path).unwrap();
        assert!((pair.real.get(0, 0, 0) - 1.0).abs() < 1e-6);
        assert!((pair.real.get(1, 0, 0) - 0.0).abs() < 1e-6);
        assert!((pair.real.get(2, 0, 0) - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_probe_reports_composite_dimensions() {
        let tmp  = tempfile::tempdir().unwrap();
        let path = column_coded_image(tmp.path(), 8, 3);
        assert_eq!(probe_dimensions(&path).unwrap(), (8, 3));
    }

    #[test]
    fn test_corrupt_file_errors() {
        let tmp  = tempfile::tempdir().unwrap();
        let path = tmp.path().join("not_an_image.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(decode_pair(&path).is_err());
    }

    #[test]
    fn test_missing_file_errors() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(decode_pair(&tmp.path().join("absent.png")).is_err());
    }
}
