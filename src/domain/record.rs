//! Inspection record types for both sides of the comparison.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{CrackPresence, Room};

/// Which list a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Pre,
    Post,
}

impl RecordKind {
    pub const ALL: [RecordKind; 2] = [RecordKind::Pre, RecordKind::Post];
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Pre => f.write_str("pre-earthquake"),
            RecordKind::Post => f.write_str("post-earthquake"),
        }
    }
}

/// Wall measurement taken before the event.
///
/// Crack length and width are only meaningful when `visible_cracks` is
/// `Yes`, but they are kept as entered either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreInspection {
    pub room: Room,
    pub wall_height_ft: f64,
    pub wall_width_ft: f64,
    pub wall_thickness_in: f64,
    pub visible_cracks: CrackPresence,
    #[serde(default)]
    pub crack_length_ft: f64,
    #[serde(default)]
    pub crack_width_in: f64,
}

/// Wall measurement taken after the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostInspection {
    pub room: Room,
    pub wall_height_ft: f64,
    pub wall_width_ft: f64,
    pub wall_thickness_in: f64,
    /// Logically a count; fractional input is accepted as entered.
    pub new_crack_count: f64,
    pub total_crack_length_ft: f64,
    pub max_crack_width_in: f64,
}

/// One submitted record of either kind.
#[derive(Debug, Clone, PartialEq)]
pub enum InspectionRecord {
    Pre(PreInspection),
    Post(PostInspection),
}

/// A labeled field value as it appears in the prompt payload.
pub type Field = (&'static str, String);

impl PreInspection {
    /// Every field of the record, in form order.
    pub fn fields(&self) -> Vec<Field> {
        vec![
            ("Room_Number", self.room.label().to_string()),
            ("Height_of_the_wall_in_feet", measure(self.wall_height_ft)),
            ("Width_of_the_wall_in_feet", measure(self.wall_width_ft)),
            ("Thickness_of_the_wall_in_inches", measure(self.wall_thickness_in)),
            (
                "Any_visible_cracks_or_fractures_on_the_wall?",
                self.visible_cracks.label().to_string(),
            ),
            ("Length_of_any_existing_cracks_in_feet_if_present", measure(self.crack_length_ft)),
            ("Width_of_any_existing_cracks_in_inches_if_present", measure(self.crack_width_in)),
        ]
    }
}

impl PostInspection {
    /// Every field of the record, in form order.
    pub fn fields(&self) -> Vec<Field> {
        vec![
            ("Room_Number", self.room.label().to_string()),
            ("Current_height_of_the_wall_in_feet", measure(self.wall_height_ft)),
            ("Current_width_of_the_wall_in_feet", measure(self.wall_width_ft)),
            ("Current_thickness_of_the_wall_in_inches", measure(self.wall_thickness_in)),
            ("Total_number_of_new_cracks_in_the_wall", measure(self.new_crack_count)),
            ("Total_length_of_all_cracks_combined_in_feet", measure(self.total_crack_length_ft)),
            ("Maximum_width_of_any_crack_observed_in_inches", measure(self.max_crack_width_in)),
        ]
    }
}

impl InspectionRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            InspectionRecord::Pre(_) => RecordKind::Pre,
            InspectionRecord::Post(_) => RecordKind::Post,
        }
    }

    pub fn room(&self) -> Room {
        match self {
            InspectionRecord::Pre(record) => record.room,
            InspectionRecord::Post(record) => record.room,
        }
    }
}

impl From<PreInspection> for InspectionRecord {
    fn from(value: PreInspection) -> Self {
        InspectionRecord::Pre(value)
    }
}

impl From<PostInspection> for InspectionRecord {
    fn from(value: PostInspection) -> Self {
        InspectionRecord::Post(value)
    }
}

/// Shortest round-trip rendering; keeps a decimal point so `10.0` stays `10.0`.
fn measure(value: f64) -> String {
    format!("{:?}", value)
}
