// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Handles cross-cutting concerns that don't belong in any
// specific business layer:
//
//   report.rs       — Per-image CSV reporting
//                     Appends one row per decoded image
//                     (filename, dimensions, half widths) so a
//                     dataset can be audited in a spreadsheet
//                     before a long training run.
//
//   export_store.rs — Writes split halves back to disk as PNGs
//                     (`<stem>_input.png` / `<stem>_real.png`)
//                     so a human can eyeball exactly what the
//                     model will be fed.
//
// Why is this a separate layer?
//   These concerns are used by multiple use cases but don't
//   belong to any one of them. Keeping them here:
//   - Prevents duplication across layers
//   - Makes it easy to swap implementations
//     (e.g. CSV report → database table)
//   - Keeps other layers focused on their core logic
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Per-image CSV report writer
pub mod report;

/// PNG export of split halves for visual inspection
pub mod export_store;
