//! Delivery of rendered reports: files, generated-filename export, clipboard.
//!
//! The renderers themselves perform no I/O; everything that touches the
//! outside world lives here. Clipboard writes are a single attempt with no
//! retry - when they fail the caller surfaces one warning and points at the
//! file-export fallback.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Write a rendered report to an explicit output path.
pub fn write_output_file(path: &Path, content: &str) -> std::io::Result<()> {
    debug!("Writing report to {}", path.display());
    fs::write(path, content)
}

/// Write an evaluation report into a directory under its suggested filename.
///
/// Creates the directory if needed. Returns the path written.
pub fn export_report(dir: &Path, filename: &str, content: &str) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    debug!("Exporting report to {}", path.display());
    fs::write(&path, content)?;
    Ok(path)
}

/// Copy a rendered report to the system clipboard. One attempt, no retry.
pub fn copy_to_clipboard(content: &str) -> Result<(), String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| format!("Clipboard unavailable: {}", e))?;
    clipboard.set_text(content.to_string()).map_err(|e| format!("Clipboard write failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_output_file_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.md");
        write_output_file(&path, "## Report\n").expect("write should succeed");
        assert_eq!(std::fs::read_to_string(&path).expect("read back"), "## Report\n");
    }

    #[test]
    fn test_export_creates_directory_and_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("reports/2024");
        let path = export_report(&target, "PythonInterview_Eval_Candidate_2024-06-01.txt", "Candidate: X")
            .expect("export should succeed");
        assert!(path.ends_with("PythonInterview_Eval_Candidate_2024-06-01.txt"));
        assert_eq!(std::fs::read_to_string(&path).expect("read back"), "Candidate: X");
    }

    #[test]
    fn test_export_to_unwritable_dir_fails() {
        // A path under an existing file cannot be created as a directory
        let file = tempfile::NamedTempFile::new().expect("tempfile");
        let bad_dir = file.path().join("nested");
        assert!(export_report(&bad_dir, "out.txt", "x").is_err());
    }
}
