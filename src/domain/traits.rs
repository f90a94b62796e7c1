// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - Normalize implements ImageTransform
//   - A future ColorJitter could also implement ImageTransform
//   - The dataset only sees ImageTransform
//     and works with both without any changes
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;
use crate::domain::image_tensor::ImageTensor;
use crate::domain::sample::PairedSample;

// ─── ImageTransform ───────────────────────────────────────────────────────────
/// Any augmentation or normalization step applied to one image half.
///
/// Implementations:
///   - Normalize            → per-channel mean/std normalization
///   - HorizontalFlip       → unconditional left-right mirror
///   - RandomHorizontalFlip → mirror with probability p
///   - Compose              → a pipeline of the above
///
/// Send + Sync are supertraits because the dataset holding a
/// transform is driven from DataLoader worker threads.
pub trait ImageTransform: Send + Sync {
    /// Apply the transform, consuming the input tensor and
    /// returning a new one. Shapes may not change — every
    /// transform here is shape-preserving.
    fn apply(&self, image: ImageTensor) -> ImageTensor;
}

// ─── PairProvider ─────────────────────────────────────────────────────────────
/// Any component that can serve (input, real) pairs by index.
///
/// Implementations:
///   - PairedImageDataset → decodes side-by-side files from disk
///   - (future) an in-memory provider for synthetic test data
pub trait PairProvider {
    /// Number of samples available
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch the pair at `index`. Out-of-range indices and
    /// decode failures surface as errors — never recovered here.
    fn get_pair(&self, index: usize) -> Result<PairedSample>;
}
