//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::catalogs::report_prompt_assets::report_templates;
use crate::adapters::openai_chat_http::HttpChatModel;
use crate::adapters::report_file;
use crate::adapters::template::MinijinjaTemplateRenderer;
use crate::app::{
    AppContext,
    commands::{batch, compare, session},
};
use crate::domain::configuration;

pub use crate::domain::{
    AppConfig, AppError, CrackPresence, EntrySummary, InspectionRecord, InspectionSession,
    ModelApiConfig, PostInspection, PreInspection, RecordKind, ReportPrompt, Room, SessionView,
};

/// Context wired with the HTTP chat model and the embedded templates.
pub type DefaultContext = AppContext<HttpChatModel, MinijinjaTemplateRenderer>;

/// Create an `AppContext` for a given configuration.
///
/// The credential is read here but only checked when the model is called.
pub fn create_context(config: &AppConfig) -> Result<DefaultContext, AppError> {
    let model = HttpChatModel::from_env_with_config(&config.model)?;
    let templates = report_templates()?;
    Ok(AppContext::new(model, MinijinjaTemplateRenderer::new(), templates, config.model.clone()))
}

/// Load configuration from `path`, or from `quakediff.toml` in the current directory.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, AppError> {
    load_config_at(path, &std::env::current_dir()?)
}

/// Load configuration from `path`, or from `quakediff.toml` in `dir`.
pub fn load_config_at(path: Option<&Path>, dir: &Path) -> Result<AppConfig, AppError> {
    configuration::load_config(path, dir)
}

// =============================================================================
// Session API
// =============================================================================

/// Submit one form entry.
pub fn submit(inspection: &mut InspectionSession, record: InspectionRecord) -> SessionView {
    session::submit(inspection, record)
}

/// Remove the entry at 1-based `position`.
pub fn remove(
    inspection: &mut InspectionSession,
    kind: RecordKind,
    position: usize,
) -> Result<SessionView, AppError> {
    session::remove(inspection, kind, position)
}

/// Generate the comparison report for a session.
pub fn compare(ctx: &DefaultContext, inspection: &InspectionSession) -> Result<String, AppError> {
    compare::execute(ctx, inspection)
}

/// Assemble the comparison prompt without calling the model.
pub fn preview(
    ctx: &DefaultContext,
    inspection: &InspectionSession,
) -> Result<ReportPrompt, AppError> {
    compare::preview(ctx, inspection)
}

// =============================================================================
// Batch API
// =============================================================================

/// Load an inspection file into a fresh session.
pub fn load_inspection_file(path: &Path) -> Result<InspectionSession, AppError> {
    batch::load_inspection_file(path)
}

/// Generate a report for the entries in an inspection file.
pub fn compare_file(input: &Path, config: &AppConfig) -> Result<String, AppError> {
    let inspection = batch::load_inspection_file(input)?;
    let ctx = create_context(config)?;
    compare::execute(&ctx, &inspection)
}

/// Assemble the prompt for the entries in an inspection file.
pub fn preview_file(input: &Path, config: &AppConfig) -> Result<ReportPrompt, AppError> {
    let inspection = batch::load_inspection_file(input)?;
    let ctx = create_context(config)?;
    compare::preview(&ctx, &inspection)
}

// =============================================================================
// Export API
// =============================================================================

/// Save a report as markdown. Without `path`, a timestamped file is created
/// in the current directory.
pub fn save_report(report: &str, path: Option<&Path>) -> Result<PathBuf, AppError> {
    report_file::write_report(report, path, &std::env::current_dir()?)
}
