use std::path::Path;

use crate::app::api;
use crate::domain::{AppConfig, AppError};

pub(super) fn run_compare(
    config: &AppConfig,
    input: &Path,
    prompt_preview: bool,
    save: Option<&Path>,
) -> Result<(), AppError> {
    if prompt_preview {
        let prompt = api::preview_file(input, config)?;
        println!("=== System ===\n{}\n\n=== User ===\n{}", prompt.system, prompt.user);
        return Ok(());
    }

    let report = api::compare_file(input, config)?;
    println!("{}", report);

    if let Some(path) = save {
        let written = api::save_report(&report, Some(path))?;
        eprintln!("✅ Saved report to {}", written.display());
    }
    Ok(())
}
