//! Non-interactive input: a TOML file of pre and post entries.
//!
//! ```toml
//! [[pre]]
//! room = "Room 1"
//! wall_height_ft = 10.0
//! wall_width_ft = 8.0
//! wall_thickness_in = 6.0
//! visible_cracks = "No"
//!
//! [[post]]
//! room = "Room 1"
//! wall_height_ft = 9.8
//! wall_width_ft = 8.0
//! wall_thickness_in = 6.0
//! new_crack_count = 2
//! total_crack_length_ft = 3.5
//! max_crack_width_in = 0.25
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::app::commands::session;
use crate::domain::{AppError, InspectionSession, PostInspection, PreInspection};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct InspectionFile {
    #[serde(default)]
    pre: Vec<PreInspection>,
    #[serde(default)]
    post: Vec<PostInspection>,
}

/// Read an inspection file into a fresh session, keeping file order.
pub fn load_inspection_file(path: &Path) -> Result<InspectionSession, AppError> {
    let content = fs::read_to_string(path).map_err(|err| {
        AppError::config_error(format!(
            "Failed to read inspection file {}: {}",
            path.display(),
            err
        ))
    })?;
    parse_inspection_content(&content)
}

/// Parse inspection entries from TOML content.
pub fn parse_inspection_content(content: &str) -> Result<InspectionSession, AppError> {
    let file: InspectionFile = toml::from_str(content)?;

    let mut inspection = InspectionSession::new();
    for record in file.pre {
        session::submit(&mut inspection, record.into());
    }
    for record in file.post {
        session::submit(&mut inspection, record.into());
    }
    Ok(inspection)
}
