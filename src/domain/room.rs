use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Room under inspection. Pre and post forms share this enumeration because
/// the comparison keys on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Room {
    #[serde(rename = "Room 1")]
    Room1,
    #[serde(rename = "Room 2")]
    Room2,
    #[serde(rename = "Room 3")]
    Room3,
}

impl Room {
    /// All rooms in selector order.
    pub const ALL: [Room; 3] = [Room::Room1, Room::Room2, Room::Room3];

    /// Label shown in forms and written into the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Room::Room1 => "Room 1",
            Room::Room2 => "Room 2",
            Room::Room3 => "Room 3",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|room| room.label() == value.trim())
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Room {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| AppError::InvalidRoom(s.to_string()))
    }
}

/// Answer to "Any visible cracks or fractures on the wall?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrackPresence {
    Yes,
    No,
}

impl CrackPresence {
    /// Selector order of the source form.
    pub const ALL: [CrackPresence; 2] = [CrackPresence::Yes, CrackPresence::No];

    pub fn label(&self) -> &'static str {
        match self {
            CrackPresence::Yes => "Yes",
            CrackPresence::No => "No",
        }
    }
}

impl fmt::Display for CrackPresence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CrackPresence {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|value| value.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::InvalidCrackPresence(s.to_string()))
    }
}
