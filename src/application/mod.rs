// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (inspecting a dataset or exporting samples).
//
// Rules for this layer:
//   - No pixel math or decoding code here
//   - No UI or printing here (that's Layer 1)
//   - No direct file walking (that's Layer 4 and 5)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The dataset inspection / audit workflow
pub mod inspect_use_case;

// The sample export workflow
pub mod export_use_case;
