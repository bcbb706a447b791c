//! Embedded prompt templates for the comparison report.

use include_dir::{Dir, include_dir};

use crate::domain::{PromptAssemblyError, ReportTemplates};

static REPORT_PROMPT_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/report-prompt");

pub const SYSTEM_TEMPLATE: &str = "system.md";
pub const DATA_TEMPLATE: &str = "data.j2";

/// Read a report prompt asset by its path relative to `src/assets/report-prompt/`.
pub fn read_report_prompt_asset(path: &str) -> Option<String> {
    REPORT_PROMPT_DIR.get_file(path).and_then(|file| file.contents_utf8()).map(|s| s.to_string())
}

/// Load both prompt segments.
pub fn report_templates() -> Result<ReportTemplates, PromptAssemblyError> {
    let load = |path: &str| {
        read_report_prompt_asset(path)
            .ok_or_else(|| PromptAssemblyError::TemplateNotFound(path.to_string()))
    };
    Ok(ReportTemplates { system: load(SYSTEM_TEMPLATE)?, data: load(DATA_TEMPLATE)? })
}
