// ============================================================
// Layer 3 — Split Domain Type
// ============================================================
// A dataset on disk is laid out as:
//
//   <images_root>/<set_name>/train/<filename>
//   <images_root>/<set_name>/val/<filename>
//
// Split selects which of the two subdirectories (and which
// filename manifest) a dataset reads from. The choice is made
// once at construction time and never changes afterwards.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which half of the train/val layout to read.
/// Derives ValueEnum so clap can parse `--split train` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Split {
    /// Training images under `<set_name>/train`
    Train,
    /// Validation images under `<set_name>/val`
    Val,
}

impl Split {
    /// The on-disk subdirectory name for this split.
    /// This is the single source of truth for the layout —
    /// every path built in the data layer goes through here.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Val   => "val",
        }
    }
}

/// Display the split the same way it appears on disk,
/// so log lines and paths always agree.
impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_names_match_layout() {
        assert_eq!(Split::Train.dir_name(), "train");
        assert_eq!(Split::Val.dir_name(),   "val");
    }

    #[test]
    fn test_display_matches_dir_name() {
        assert_eq!(Split::Train.to_string(), "train");
        assert_eq!(Split::Val.to_string(),   "val");
    }
}
