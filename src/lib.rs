//! quakediff: collect pre/post-earthquake wall inspections and ask a chat
//! model for a per-room discrepancy report.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    DefaultContext, compare, compare_file, create_context, load_config, load_config_at,
    load_inspection_file, preview, preview_file, remove, save_report, submit,
};
pub use app::commands::compare::REPORT_TEMPERATURE;
pub use domain::{
    AppConfig, AppError, CrackPresence, EntrySummary, InspectionRecord, InspectionSession,
    ModelApiConfig, PostInspection, PreInspection, RecordKind, ReportPrompt, Room, SessionView,
};
pub use ports::{ChatModel, ChatRequest};
