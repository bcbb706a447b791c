pub mod context;
pub mod error;
pub mod report;
pub mod template;

pub use context::PromptContext;
pub use error::PromptAssemblyError;
pub use report::{ReportPrompt, ReportTemplates, assemble_report_prompt, render_records};
pub use template::TemplateRenderer;
