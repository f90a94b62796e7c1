// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from composite image files
// on disk to transformed (input, real) tensor pairs.
//
// The pipeline flows in this order:
//
//   <images_root>/<set_name>/{train,val}/*.png
//       │
//       ▼
//   lister             → reads both directories, sorts names
//       │
//       ▼
//   decoder            → decodes a file, splits at floor(W/2),
//       │                converts halves to CHW f32 tensors
//       ▼
//   transform          → flip / normalize, applied per half
//       │
//       ▼
//   PairedImageDataset → implements Burn's Dataset trait
//       │
//       ▼
//   DataLoader         → (downstream, not ours) feeds batches
//                        to the training loop
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

/// Lists and sorts the train/val filename manifests
pub mod lister;

/// Decodes a composite file and splits it into two halves
pub mod decoder;

/// Flip and normalize transforms plus train/val presets
pub mod transform;

/// Implements Burn's Dataset trait for (input, real) pairs
pub mod dataset;
