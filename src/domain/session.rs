//! Per-session store of submitted inspection records.
//!
//! A session starts empty, lives as long as the interactive run that owns it,
//! and is discarded on drop. Nothing here is shared between sessions.

use std::collections::BTreeSet;

use crate::domain::{AppError, InspectionRecord, PostInspection, PreInspection, RecordKind, Room};

/// Ordered pre- and post-event records for one interactive session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InspectionSession {
    pre: Vec<PreInspection>,
    post: Vec<PostInspection>,
}

impl InspectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the list for its kind and return the updated view.
    pub fn append(&mut self, record: InspectionRecord) -> SessionView {
        match record {
            InspectionRecord::Pre(record) => self.pre.push(record),
            InspectionRecord::Post(record) => self.post.push(record),
        }
        self.view()
    }

    /// Remove the entry at zero-based `index`; later entries shift down.
    pub fn remove_at(&mut self, kind: RecordKind, index: usize) -> Result<SessionView, AppError> {
        let len = self.len(kind);
        if index >= len {
            return Err(AppError::IndexOutOfRange { kind, index, len });
        }
        match kind {
            RecordKind::Pre => {
                self.pre.remove(index);
            }
            RecordKind::Post => {
                self.post.remove(index);
            }
        }
        Ok(self.view())
    }

    /// Records of one kind in submission order.
    pub fn list_all(&self, kind: RecordKind) -> Vec<InspectionRecord> {
        match kind {
            RecordKind::Pre => self.pre.iter().cloned().map(InspectionRecord::Pre).collect(),
            RecordKind::Post => self.post.iter().cloned().map(InspectionRecord::Post).collect(),
        }
    }

    pub fn pre_records(&self) -> &[PreInspection] {
        &self.pre
    }

    pub fn post_records(&self) -> &[PostInspection] {
        &self.post
    }

    pub fn len(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Pre => self.pre.len(),
            RecordKind::Post => self.post.len(),
        }
    }

    pub fn is_empty(&self, kind: RecordKind) -> bool {
        self.len(kind) == 0
    }

    /// Kinds that currently have no records, in pre/post order.
    pub fn missing_kinds(&self) -> Vec<RecordKind> {
        RecordKind::ALL.into_iter().filter(|kind| self.is_empty(*kind)).collect()
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            pre: summarize(self.pre.iter().map(|record| record.room)),
            post: summarize(self.post.iter().map(|record| record.room)),
        }
    }
}

fn summarize(rooms: impl Iterator<Item = Room>) -> Vec<EntrySummary> {
    rooms.enumerate().map(|(index, room)| EntrySummary { position: index + 1, room }).collect()
}

/// One row of the entry list shown under each form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntrySummary {
    /// 1-based display position.
    pub position: usize,
    pub room: Room,
}

/// Render model returned by every session mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionView {
    pub pre: Vec<EntrySummary>,
    pub post: Vec<EntrySummary>,
}

impl SessionView {
    pub fn entries(&self, kind: RecordKind) -> &[EntrySummary] {
        match kind {
            RecordKind::Pre => &self.pre,
            RecordKind::Post => &self.post,
        }
    }

    /// Rooms present in exactly one of the two lists.
    ///
    /// Informational only: the comparison runs regardless.
    pub fn unmatched_rooms(&self) -> Vec<Room> {
        let pre: BTreeSet<Room> = self.pre.iter().map(|entry| entry.room).collect();
        let post: BTreeSet<Room> = self.post.iter().map(|entry| entry.room).collect();
        pre.symmetric_difference(&post).copied().collect()
    }
}
