//! Terminal forms for one pre- or post-earthquake entry.
//!
//! Numeric fields take any real number the input parses; plausibility is
//! left to the report.

use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input, Select};

use crate::domain::{AppError, CrackPresence, PostInspection, PreInspection, Room};

/// Ask for every pre-earthquake field. `None` when the user cancels.
pub(super) fn prompt_pre_inspection() -> Result<Option<PreInspection>, AppError> {
    println!("Before Earthquake (Pre-Earthquake Inspection):");
    let Some(room) = select_room()? else { return Ok(None) };
    let Some(wall_height_ft) = prompt_measure("Height of the wall (in feet)")? else {
        return Ok(None);
    };
    let Some(wall_width_ft) = prompt_measure("Width of the wall (in feet)")? else {
        return Ok(None);
    };
    let Some(wall_thickness_in) = prompt_measure("Thickness of the wall (in inches)")? else {
        return Ok(None);
    };
    let Some(visible_cracks) = select_crack_presence()? else { return Ok(None) };
    let Some(crack_length_ft) =
        prompt_measure("Length of any existing cracks (in feet, if present)")?
    else {
        return Ok(None);
    };
    let Some(crack_width_in) =
        prompt_measure("Width of any existing cracks (in inches, if present)")?
    else {
        return Ok(None);
    };

    Ok(Some(PreInspection {
        room,
        wall_height_ft,
        wall_width_ft,
        wall_thickness_in,
        visible_cracks,
        crack_length_ft,
        crack_width_in,
    }))
}

/// Ask for every post-earthquake field. `None` when the user cancels.
pub(super) fn prompt_post_inspection() -> Result<Option<PostInspection>, AppError> {
    println!("After Earthquake (Post-Earthquake Inspection):");
    let Some(room) = select_room()? else { return Ok(None) };
    let Some(wall_height_ft) = prompt_measure("Current height of the wall (in feet)")? else {
        return Ok(None);
    };
    let Some(wall_width_ft) = prompt_measure("Current width of the wall (in feet)")? else {
        return Ok(None);
    };
    let Some(wall_thickness_in) = prompt_measure("Current thickness of the wall (in inches)")?
    else {
        return Ok(None);
    };
    let Some(new_crack_count) = prompt_measure("Total number of new cracks in the wall")? else {
        return Ok(None);
    };
    let Some(total_crack_length_ft) =
        prompt_measure("Total length of all cracks combined (in feet)")?
    else {
        return Ok(None);
    };
    let Some(max_crack_width_in) =
        prompt_measure("Maximum width of any crack observed (in inches)")?
    else {
        return Ok(None);
    };

    Ok(Some(PostInspection {
        room,
        wall_height_ft,
        wall_width_ft,
        wall_thickness_in,
        new_crack_count,
        total_crack_length_ft,
        max_crack_width_in,
    }))
}

fn select_room() -> Result<Option<Room>, AppError> {
    let items: Vec<&str> = Room::ALL.iter().map(Room::label).collect();
    let selection = Select::new()
        .with_prompt("Room Number")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Interaction(format!("Failed to select room: {}", err)))?;

    Ok(selection.map(|index| Room::ALL[index]))
}

fn select_crack_presence() -> Result<Option<CrackPresence>, AppError> {
    let items: Vec<&str> = CrackPresence::ALL.iter().map(CrackPresence::label).collect();
    let selection = Select::new()
        .with_prompt("Any visible cracks or fractures on the wall?")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Interaction(format!("Failed to select answer: {}", err)))?;

    Ok(selection.map(|index| CrackPresence::ALL[index]))
}

fn prompt_measure(label: &str) -> Result<Option<f64>, AppError> {
    match Input::<f64>::new().with_prompt(label).default(0.0).interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Interaction(format!("Failed to read '{}': {}", label, err))),
    }
}
