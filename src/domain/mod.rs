pub mod configuration;
pub mod error;
pub mod prompt;
pub mod record;
pub mod room;
pub mod session;

pub use configuration::{AppConfig, ModelApiConfig};
pub use error::AppError;
pub use prompt::{
    PromptAssemblyError, PromptContext, ReportPrompt, ReportTemplates, TemplateRenderer,
    assemble_report_prompt,
};
pub use record::{InspectionRecord, PostInspection, PreInspection, RecordKind};
pub use room::{CrackPresence, Room};
pub use session::{EntrySummary, InspectionSession, SessionView};
