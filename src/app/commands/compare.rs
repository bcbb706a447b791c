//! Report generation: prompt assembly and one blocking model call.

use crate::app::AppContext;
use crate::domain::{
    AppError, InspectionSession, ReportPrompt, TemplateRenderer, assemble_report_prompt,
};
use crate::ports::{ChatModel, ChatRequest};

/// Decoding is pinned to deterministic output.
pub const REPORT_TEMPERATURE: f32 = 0.0;

/// Generate the comparison report for the current session.
///
/// Returns the model's text unmodified. The session is only read.
pub fn execute<M, R>(
    ctx: &AppContext<M, R>,
    session: &InspectionSession,
) -> Result<String, AppError>
where
    M: ChatModel,
    R: TemplateRenderer,
{
    let prompt = preview(ctx, session)?;
    let request = ChatRequest {
        model: ctx.model_config().model.clone(),
        temperature: REPORT_TEMPERATURE,
        system: prompt.system,
        user: prompt.user,
    };
    ctx.model().complete(request)
}

/// Assemble the prompt that `execute` would send, without calling the model.
pub fn preview<M, R>(
    ctx: &AppContext<M, R>,
    session: &InspectionSession,
) -> Result<ReportPrompt, AppError>
where
    M: ChatModel,
    R: TemplateRenderer,
{
    ensure_comparable(session)?;

    let prompt = assemble_report_prompt(
        ctx.renderer(),
        ctx.templates(),
        session.pre_records(),
        session.post_records(),
    )?;
    tracing::debug!(
        pre = session.pre_records().len(),
        post = session.post_records().len(),
        system_chars = prompt.system.len(),
        user_chars = prompt.user.len(),
        "report prompt assembled"
    );
    Ok(prompt)
}

fn ensure_comparable(session: &InspectionSession) -> Result<(), AppError> {
    let missing = session.missing_kinds();
    if missing.is_empty() {
        return Ok(());
    }

    let missing = missing.iter().map(ToString::to_string).collect::<Vec<_>>().join(" and ");
    tracing::warn!(%missing, "comparison requested without both datasets");
    Err(AppError::EmptyDataset { missing })
}
