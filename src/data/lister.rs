// ============================================================
// Layer 4 — Filename Lister
// ============================================================
// Builds the immutable filename manifest for one dataset.
//
// On-disk layout (consumed, never produced):
//
//   <images_root>/<set_name>/train/<filename>
//   <images_root>/<set_name>/val/<filename>
//
// The lister reads both subdirectories once, sorts each list
// lexicographically, and returns them together. After this
// point the manifest never changes — the dataset indexes into
// it lazily but never mutates it.
//
// Two deliberate non-features:
//   - No extension filtering: every directory entry is treated
//     as an image filename. A stray non-image file will fail
//     later, at decode time, with a decoder error.
//   - No deduplication: directory entries are unique by
//     definition, so there is nothing to deduplicate.
//
// A missing train/ or val/ subdirectory is an error — the
// layout is fixed and a half-missing dataset is not something
// we can silently work around.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::domain::split::Split;

/// The sorted filename lists for one dataset, fixed at load time.
#[derive(Debug, Clone)]
pub struct ImageManifest {
    /// Filenames under `<set_name>/train`, sorted lexicographically
    pub train: Vec<String>,

    /// Filenames under `<set_name>/val`, sorted lexicographically
    pub val: Vec<String>,
}

impl ImageManifest {
    /// The filename list for one split
    pub fn names(&self, split: Split) -> &[String] {
        match split {
            Split::Train => &self.train,
            Split::Val   => &self.val,
        }
    }

    /// Number of filenames in one split
    pub fn count(&self, split: Split) -> usize {
        self.names(split).len()
    }
}

/// List the train and val image filenames for `set_name`.
///
/// Reads `<images_root>/<set_name>/train` and `.../val`, sorts
/// each list, and returns both. Propagates a filesystem error
/// (with path context) if either subdirectory cannot be read.
pub fn list_image_names(images_root: &Path, set_name: &str) -> Result<ImageManifest> {
    let set_dir = images_root.join(set_name);

    let train = list_split_dir(&set_dir, Split::Train)?;
    let val   = list_split_dir(&set_dir, Split::Val)?;

    tracing::info!(
        "Manifest for '{}': {} train, {} val",
        set_name,
        train.len(),
        val.len(),
    );

    Ok(ImageManifest { train, val })
}

/// List one split subdirectory and sort the names.
fn list_split_dir(set_dir: &Path, split: Split) -> Result<Vec<String>> {
    let dir = set_dir.join(split.dir_name());

    let mut names = Vec::new();

    // Walk every entry in the directory. read_dir fails if the
    // directory is absent — that error carries up unmodified
    // apart from the added path context.
    for entry in fs::read_dir(&dir)
        .with_context(|| format!("Cannot read split directory '{}'", dir.display()))?
    {
        let entry = entry?;

        // Directory entries are OS strings; lossy conversion keeps
        // us going on the rare non-UTF-8 name instead of failing.
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    // Lexicographic sort gives a stable, platform-independent
    // index → filename mapping (read_dir order is arbitrary).
    names.sort();

    tracing::debug!("Listed {} entries under '{}'", names.len(), dir.display());
    Ok(names)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Create `<root>/<set>/{train,val}` with the given filenames
    fn make_layout(train: &[&str], val: &[&str]) -> (tempfile::TempDir, std::path::PathBuf) {
        let tmp  = tempfile::tempdir().unwrap();
        let root = tmp.path().to_path_buf();

        for (split, names) in [("train", train), ("val", val)] {
            let dir = root.join("facades").join(split);
            fs::create_dir_all(&dir).unwrap();
            for name in names {
                fs::write(dir.join(name), b"").unwrap();
            }
        }

        (tmp, root)
    }

    #[test]
    fn test_names_are_sorted() {
        let (_tmp, root) = make_layout(&["c.png", "a.png", "b.png"], &["z.png"]);
        let manifest     = list_image_names(&root, "facades").unwrap();
        assert_eq!(manifest.train, vec!["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn test_count_preserved() {
        let (_tmp, root) = make_layout(&["1.png", "2.png", "3.png"], &["4.png", "5.png"]);
        let manifest     = list_image_names(&root, "facades").unwrap();
        assert_eq!(manifest.count(Split::Train), 3);
        assert_eq!(manifest.count(Split::Val),   2);
    }

    #[test]
    fn test_no_extension_filtering() {
        // A README in the directory is still listed — decode
        // failures are the decoder's job, not the lister's.
        let (_tmp, root) = make_layout(&["README.txt", "img.png"], &["v.png"]);
        let manifest     = list_image_names(&root, "facades").unwrap();
        assert_eq!(manifest.train, vec!["README.txt", "img.png"]);
    }

    #[test]
    fn test_missing_split_dir_errors() {
        let tmp  = tempfile::tempdir().unwrap();
        let root = tmp.path().to_path_buf();
        // Only train exists; val is absent
        fs::create_dir_all(root.join("facades").join("train")).unwrap();

        let result = list_image_names(&root, "facades");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_set_dir_errors() {
        let tmp    = tempfile::tempdir().unwrap();
        let result = list_image_names(tmp.path(), "no_such_set");
        assert!(result.is_err());
    }

    #[test]
    fn test_train_and_val_are_disjoint() {
        let (_tmp, root) = make_layout(&["a.png", "b.png"], &["c.png", "d.png"]);
        let manifest     = list_image_names(&root, "facades").unwrap();
        for name in &manifest.train {
            assert!(!manifest.val.contains(name));
        }
    }
}
