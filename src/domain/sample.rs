// ============================================================
// Layer 3 — PairedSample Domain Type
// ============================================================
// One training example for image-to-image translation.
//
// Each source file on disk is a composite image holding two
// pictures side by side:
//
//   ┌───────────────┬───────────────┐
//   │   real half   │  input half   │
//   │   (target)    │   (source)    │
//   └───────────────┴───────────────┘
//
// The data layer splits the composite down the middle and hands
// us the two halves as independent tensors. "input" is what the
// model sees; "real" is the ground truth it should produce.
//
// Reference: Isola et al. (2017) pix2pix — paired image format

use crate::domain::image_tensor::ImageTensor;

/// A decoded composite image split into its two halves,
/// each already transformed independently.
#[derive(Debug, Clone)]
pub struct PairedSample {
    /// The right half of the composite — the model's input
    pub input: ImageTensor,

    /// The left half of the composite — the ground truth
    pub real: ImageTensor,
}

impl PairedSample {
    pub fn new(input: ImageTensor, real: ImageTensor) -> Self {
        Self { input, real }
    }

    /// True when both halves have identical (C, H, W) dims —
    /// holds for even-width composites, where the midpoint
    /// split produces two equal halves.
    pub fn halves_match(&self) -> bool {
        self.input.dims() == self.real.dims()
    }
}
