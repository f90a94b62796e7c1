// ============================================================
// Layer 5 — Dataset Report Logger
// ============================================================
// Records one CSV row per decoded image during an inspection
// pass.
//
// Why log to CSV?
//   - Easy to open in Excel or Google Sheets
//   - A full-dataset audit before a long training run catches
//     odd-width composites and corrupt files early
//   - Provides a permanent record of what was checked
//
// Columns recorded per image:
//   - file_name:   the image filename within its split
//   - width:       composite width in pixels
//   - height:      composite height in pixels
//   - real_width:  floor(width / 2) — the left half
//   - input_width: width - floor(width / 2) — the right half
//
// Output file: <report_dir>/dataset_report.csv
//
// Example CSV output:
//   file_name,width,height,real_width,input_width
//   img_000.png,512,256,256,256
//   img_001.png,513,256,256,257
//   ...
//
// A real_width != input_width row is the thing to look for —
// it means an odd-width composite whose halves won't line up.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

/// One row of the dataset report — the facts about one image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Filename within the split directory
    pub file_name: String,

    /// Full composite width in pixels
    pub width: u32,

    /// Composite height in pixels
    pub height: u32,

    /// Width of the left ("real") half = floor(width / 2)
    pub real_width: u32,

    /// Width of the right ("input") half = width - floor(width / 2)
    pub input_width: u32,
}

impl ImageRecord {
    /// Build a record from a filename and composite dimensions.
    /// The half widths are derived, never passed in — so the
    /// report always reflects the actual split rule.
    pub fn new(file_name: impl Into<String>, width: u32, height: u32) -> Self {
        let real_width = width / 2;
        Self {
            file_name:   file_name.into(),
            width,
            height,
            real_width,
            input_width: width - real_width,
        }
    }

    /// True when the two halves have equal width (even composite)
    pub fn is_balanced(&self) -> bool {
        self.real_width == self.input_width
    }
}

/// Appends image records to a CSV file for later analysis.
pub struct ReportLogger {
    /// Full path to the CSV file
    csv_path: PathBuf,
}

impl ReportLogger {
    /// Create a new ReportLogger.
    /// Writes the CSV header if the file doesn't exist yet.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();

        // Create directory if it doesn't exist
        fs::create_dir_all(&dir)?;

        let csv_path = dir.join("dataset_report.csv");

        // Write CSV header only if file is new
        // This allows appending to an existing log across runs
        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)?;
            writeln!(f, "file_name,width,height,real_width,input_width")?;
            tracing::debug!("Created report CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one image's record as a new row in the CSV.
    pub fn log(&self, r: &ImageRecord) -> Result<()> {
        // Open in append mode — adds to end of file
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)?;

        writeln!(
            f,
            "{},{},{},{},{}",
            r.file_name,
            r.width,
            r.height,
            r.real_width,
            r.input_width,
        )?;

        Ok(())
    }

    /// Return the path to the report CSV file
    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_widths_derived_from_split_rule() {
        let even = ImageRecord::new("a.png", 512, 256);
        assert_eq!(even.real_width,  256);
        assert_eq!(even.input_width, 256);
        assert!(even.is_balanced());

        let odd = ImageRecord::new("b.png", 9, 4);
        assert_eq!(odd.real_width,  4);
        assert_eq!(odd.input_width, 5);
        assert!(!odd.is_balanced());
    }

    #[test]
    fn test_header_written_once_rows_appended() {
        let tmp    = tempfile::tempdir().unwrap();
        let logger = ReportLogger::new(tmp.path()).unwrap();

        logger.log(&ImageRecord::new("a.png", 8, 4)).unwrap();
        logger.log(&ImageRecord::new("b.png", 9, 4)).unwrap();

        let contents = fs::read_to_string(logger.csv_path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "file_name,width,height,real_width,input_width");
        assert_eq!(lines[1], "a.png,8,4,4,4");
        assert_eq!(lines[2], "b.png,9,4,4,5");
    }

    #[test]
    fn test_reopening_appends_without_second_header() {
        let tmp = tempfile::tempdir().unwrap();

        let first = ReportLogger::new(tmp.path()).unwrap();
        first.log(&ImageRecord::new("a.png", 8, 4)).unwrap();

        // A second logger on the same directory keeps appending
        let second = ReportLogger::new(tmp.path()).unwrap();
        second.log(&ImageRecord::new("b.png", 8, 4)).unwrap();

        let contents = fs::read_to_string(second.csv_path()).unwrap();
        assert_eq!(contents.lines().count(), 3);
    }
}
