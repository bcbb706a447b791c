//! Markdown export of a generated report.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::domain::AppError;

/// Default export file name for a report generated at `at`.
pub fn default_report_file_name(at: DateTime<Utc>) -> String {
    format!("damage-report-{}.md", at.format("%Y%m%dT%H%M%SZ"))
}

/// Write `report` verbatim to `path`, or to a timestamped file in `dir`.
pub fn write_report(report: &str, path: Option<&Path>, dir: &Path) -> Result<PathBuf, AppError> {
    let target = match path {
        Some(explicit) => explicit.to_path_buf(),
        None => dir.join(default_report_file_name(Utc::now())),
    };
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&target, report)?;
    tracing::info!(path = %target.display(), bytes = report.len(), "report written");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn default_name_uses_utc_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(default_report_file_name(at), "damage-report-20240309T140507Z.md");
    }

    #[test]
    fn report_is_written_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out/report.md");
        let written = write_report("# Report\n\nno trailing newline", Some(&path), dir.path()).unwrap();

        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Report\n\nno trailing newline");
    }

    #[test]
    fn report_without_path_lands_in_dir() {
        let dir = TempDir::new().unwrap();
        let written = write_report("text", None, dir.path()).unwrap();
        assert_eq!(written.parent(), Some(dir.path()));
        assert!(written.file_name().unwrap().to_string_lossy().starts_with("damage-report-"));
    }
}
