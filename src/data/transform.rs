// ============================================================
// Layer 4 — Image Transforms
// ============================================================
// Augmentation and normalization steps applied to each half of
// a pair independently, after decoding.
//
// The set mirrors the torchvision pipeline this format is
// normally trained with:
//
//   training:   RandomHorizontalFlip → Normalize
//   validation: Normalize
//
// Normalization uses the ImageNet channel statistics, the
// de-facto standard for models pretrained on ImageNet:
//
//   mean = [0.485, 0.456, 0.406]
//   std  = [0.229, 0.224, 0.225]
//
// Every transform is shape-preserving: a (3, H, W) tensor goes
// in and a (3, H, W) tensor comes out. There is no resizing or
// cropping here — composites are assumed pre-sized upstream.
//
// Reference: torchvision.transforms documentation
//            He et al. (2015) — ImageNet normalization constants
//            Rust Book §17 (Trait Objects)

use rand::Rng;

use crate::domain::image_tensor::ImageTensor;
use crate::domain::traits::ImageTransform;

/// ImageNet per-channel means (RGB order)
pub const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];

/// ImageNet per-channel standard deviations (RGB order)
pub const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

// ─── Normalize ────────────────────────────────────────────────────────────────
/// Per-channel normalization: v → (v − mean[c]) / std[c].
pub struct Normalize {
    mean: [f32; 3],
    std:  [f32; 3],
}

impl Normalize {
    pub fn new(mean: [f32; 3], std: [f32; 3]) -> Self {
        Self { mean, std }
    }

    /// The standard ImageNet statistics
    pub fn imagenet() -> Self {
        Self::new(IMAGENET_MEAN, IMAGENET_STD)
    }
}

impl ImageTransform for Normalize {
    fn apply(&self, image: ImageTensor) -> ImageTensor {
        let (c, h, w) = image.dims();
        debug_assert_eq!(c, 3, "Normalize expects 3-channel input");

        let plane    = h * w;
        let mut data = image.into_vec();

        // Each channel plane is contiguous in CHW layout, so we
        // normalize plane by plane without any index juggling.
        for ch in 0..c {
            let mean = self.mean[ch];
            let std  = self.std[ch];
            for v in &mut data[ch * plane..(ch + 1) * plane] {
                *v = (*v - mean) / std;
            }
        }

        ImageTensor::new(data, c, h, w)
    }
}

// ─── HorizontalFlip ───────────────────────────────────────────────────────────
/// Unconditional left-right mirror of every channel.
/// The deterministic building block behind RandomHorizontalFlip;
/// also useful on its own when reproducibility matters.
pub struct HorizontalFlip;

impl ImageTransform for HorizontalFlip {
    fn apply(&self, image: ImageTensor) -> ImageTensor {
        let (c, h, w) = image.dims();
        let mut data  = image.into_vec();
        let plane     = h * w;

        // Swap columns x and w-1-x within each row of each plane
        for ch in 0..c {
            for y in 0..h {
                let row = ch * plane + y * w;
                data[row..row + w].reverse();
            }
        }

        ImageTensor::new(data, c, h, w)
    }
}

// ─── RandomHorizontalFlip ─────────────────────────────────────────────────────
/// Mirror the image with probability `p` (default 0.5).
///
/// Uses the thread-local RNG, same as the rest of the codebase.
/// Note each call draws independently — when applied to the two
/// halves of a pair separately, the halves may flip differently.
pub struct RandomHorizontalFlip {
    p: f64,
}

impl RandomHorizontalFlip {
    /// # Panics
    /// Panics if `p` is not a probability in [0, 1].
    pub fn new(p: f64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p ({}) must be in [0, 1]", p);
        Self { p }
    }
}

impl Default for RandomHorizontalFlip {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl ImageTransform for RandomHorizontalFlip {
    fn apply(&self, image: ImageTensor) -> ImageTensor {
        let mut rng = rand::thread_rng();
        if rng.gen_bool(self.p) {
            HorizontalFlip.apply(image)
        } else {
            image
        }
    }
}

// ─── Compose ──────────────────────────────────────────────────────────────────
/// A pipeline of transforms applied in order.
pub struct Compose {
    steps: Vec<Box<dyn ImageTransform>>,
}

impl Compose {
    pub fn new(steps: Vec<Box<dyn ImageTransform>>) -> Self {
        Self { steps }
    }
}

impl ImageTransform for Compose {
    fn apply(&self, image: ImageTensor) -> ImageTensor {
        self.steps
            .iter()
            .fold(image, |img, step| step.apply(img))
    }
}

// ─── Presets ──────────────────────────────────────────────────────────────────
/// The training-time pipeline: random flip, then normalize.
pub fn training_transform() -> Compose {
    Compose::new(vec![
        Box::new(RandomHorizontalFlip::default()),
        Box::new(Normalize::imagenet()),
    ])
}

/// The validation-time pipeline: normalize only — no
/// augmentation, so evaluation is repeatable.
pub fn validation_transform() -> Compose {
    Compose::new(vec![Box::new(Normalize::imagenet())])
}
