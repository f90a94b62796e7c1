// ============================================================
// Layer 3 — ImageTensor Domain Type
// ============================================================
// A decoded image stored as a flat Vec<f32> in CHW order:
//
//   [ all of channel 0, all of channel 1, all of channel 2 ]
//
// where each channel is row-major (y * width + x).
//
// Why CHW and not HWC?
//   CHW is the layout deep learning frameworks expect for
//   convolution inputs, so the downstream training loop can
//   take our data without reshuffling it.
//
// Why f32 in [0, 1]?
//   Decoders give us u8 in [0, 255]. Dividing by 255 once at
//   decode time means every transform downstream (flip,
//   normalize) works in float space — same convention as the
//   torchvision ToTensor step.
//
// This type is pure data + indexing math. Decoding a file into
// an ImageTensor lives in the data layer (Layer 4), not here.
//
// Reference: Rust Book §5 (Structs and Methods)

/// A single image (or image half) as CHW float data.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    /// Flat pixel data, length = channels * height * width
    data: Vec<f32>,

    /// Number of channels (3 for RGB)
    channels: usize,

    /// Image height in pixels
    height: usize,

    /// Image width in pixels
    width: usize,
}

impl ImageTensor {
    /// Build an ImageTensor from pre-flattened CHW data.
    ///
    /// # Panics
    /// Panics if `data.len() != channels * height * width` —
    /// a mismatched buffer is a programming error, not a
    /// runtime condition we can recover from.
    pub fn new(data: Vec<f32>, channels: usize, height: usize, width: usize) -> Self {
        assert_eq!(
            data.len(),
            channels * height * width,
            "data length {} does not match {}x{}x{}",
            data.len(),
            channels,
            height,
            width,
        );
        Self { data, channels, height, width }
    }

    /// Dimensions as (channels, height, width)
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.channels, self.height, self.width)
    }

    pub fn channels(&self) -> usize { self.channels }
    pub fn height(&self)   -> usize { self.height }
    pub fn width(&self)    -> usize { self.width }

    /// Total number of float values stored
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read one value at (channel, y, x).
    /// Index math: channel plane offset + row offset + column.
    pub fn get(&self, c: usize, y: usize, x: usize) -> f32 {
        debug_assert!(c < self.channels && y < self.height && x < self.width);
        self.data[c * self.height * self.width + y * self.width + x]
    }

    /// Borrow the raw CHW buffer (e.g. to hand to a tensor library)
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Consume self and return the raw CHW buffer
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dims_and_len() {
        let t = ImageTensor::new(vec![0.0; 3 * 2 * 4], 3, 2, 4);
        assert_eq!(t.dims(), (3, 2, 4));
        assert_eq!(t.len(), 24);
    }

    #[test]
    fn test_get_indexes_chw() {
        // 1 channel, 2x2 image: values laid out row-major
        let t = ImageTensor::new(vec![0.0, 1.0, 2.0, 3.0], 1, 2, 2);
        assert_eq!(t.get(0, 0, 0), 0.0);
        assert_eq!(t.get(0, 0, 1), 1.0);
        assert_eq!(t.get(0, 1, 0), 2.0);
        assert_eq!(t.get(0, 1, 1), 3.0);
    }

    #[test]
    fn test_get_second_channel() {
        // 2 channels of a 1x2 image: channel planes are contiguous
        let t = ImageTensor::new(vec![0.1, 0.2, 0.9, 0.8], 2, 1, 2);
        assert_eq!(t.get(1, 0, 0), 0.9);
        assert_eq!(t.get(1, 0, 1), 0.8);
    }

    #[test]
    #[should_panic]
    fn test_mismatched_buffer_panics() {
        let _ = ImageTensor::new(vec![0.0; 5], 3, 2, 4);
    }
}
