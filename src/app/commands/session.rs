//! Form submissions and removals against the active session.

use crate::domain::{AppError, InspectionRecord, InspectionSession, RecordKind, SessionView};

/// Append one submitted form to the session.
pub fn submit(session: &mut InspectionSession, record: InspectionRecord) -> SessionView {
    let kind = record.kind();
    let room = record.room();
    let view = session.append(record);
    tracing::info!(%kind, %room, count = view.entries(kind).len(), "entry submitted");
    view
}

/// Remove the entry shown at 1-based `position`.
pub fn remove(
    session: &mut InspectionSession,
    kind: RecordKind,
    position: usize,
) -> Result<SessionView, AppError> {
    let len = session.len(kind);
    let Some(index) = position.checked_sub(1) else {
        return Err(AppError::IndexOutOfRange { kind, index: position, len });
    };

    let view = session.remove_at(kind, index).inspect_err(|err| {
        tracing::warn!(%kind, position, error = %err, "removal rejected");
    })?;
    tracing::info!(%kind, position, remaining = view.entries(kind).len(), "entry removed");
    Ok(view)
}
