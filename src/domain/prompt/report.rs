//! Two-segment comparison prompt: fixed instructions plus the data payload.

use super::{PromptAssemblyError, PromptContext, TemplateRenderer};
use crate::domain::{PostInspection, PreInspection, RecordKind};
use crate::domain::record::Field;

pub const PRE_DATA_VAR: &str = "pre_earthquake_data";
pub const POST_DATA_VAR: &str = "post_earthquake_data";

/// Raw template sources for both prompt segments.
#[derive(Debug, Clone)]
pub struct ReportTemplates {
    pub system: String,
    pub data: String,
}

/// Rendered prompt, ready to hand to a chat model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPrompt {
    pub system: String,
    pub user: String,
}

/// Render one list as a text block that keeps every field label and value.
pub fn render_records(kind: RecordKind, records: &[Vec<Field>]) -> String {
    if records.is_empty() {
        return format!("(no {} entries)", kind);
    }

    let mut out = String::new();
    for (index, fields) in records.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("Entry {}:\n", index + 1));
        for (label, value) in fields {
            out.push_str(&format!("  {}: {}\n", label, value));
        }
    }
    out.trim_end().to_string()
}

/// Build the system and user messages for a pre/post comparison.
pub fn assemble_report_prompt(
    renderer: &impl TemplateRenderer,
    templates: &ReportTemplates,
    pre: &[PreInspection],
    post: &[PostInspection],
) -> Result<ReportPrompt, PromptAssemblyError> {
    let pre_fields: Vec<Vec<Field>> = pre.iter().map(PreInspection::fields).collect();
    let post_fields: Vec<Vec<Field>> = post.iter().map(PostInspection::fields).collect();

    let context = PromptContext::new()
        .with_var(PRE_DATA_VAR, render_records(RecordKind::Pre, &pre_fields))
        .with_var(POST_DATA_VAR, render_records(RecordKind::Post, &post_fields));

    let system = renderer.render(&templates.system, &PromptContext::new(), "system.md")?;
    let user = renderer.render(&templates.data, &context, "data.j2")?;

    Ok(ReportPrompt { system, user })
}
