//! Interactive inspection session.
//!
//! The session lives for one run of this loop and is dropped on exit. Every
//! mutation hands back a `SessionView` that is rendered straight away.

use dialoguer::{Input, Select};

use super::form;
use crate::app::api::{self, DefaultContext};
use crate::domain::{AppConfig, AppError, InspectionSession, RecordKind, SessionView};

const EMPTY_DATA_WARNING: &str =
    "Please submit both Pre-Earthquake and Post-Earthquake data before comparing.";
const MENU_BACK_OPTION: &str = "[back]";

#[derive(Debug, Clone, Copy)]
enum MenuAction {
    AddPre,
    AddPost,
    ListEntries,
    RemovePre,
    RemovePost,
    Compare,
    SaveReport,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 8] = [
        MenuAction::AddPre,
        MenuAction::AddPost,
        MenuAction::ListEntries,
        MenuAction::RemovePre,
        MenuAction::RemovePost,
        MenuAction::Compare,
        MenuAction::SaveReport,
        MenuAction::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            MenuAction::AddPre => "Enter Pre-Earthquake Data",
            MenuAction::AddPost => "Enter Post-Earthquake Data",
            MenuAction::ListEntries => "List entries",
            MenuAction::RemovePre => "Remove a Pre-Earthquake entry",
            MenuAction::RemovePost => "Remove a Post-Earthquake entry",
            MenuAction::Compare => "Compare Data",
            MenuAction::SaveReport => "Save last report",
            MenuAction::Quit => "Quit",
        }
    }
}

pub(super) fn run_session(config: &AppConfig) -> Result<(), AppError> {
    let ctx = api::create_context(config)?;
    let mut inspection = InspectionSession::new();
    let mut last_report: Option<String> = None;

    println!("Damage Estimate Analysis Report Generator");
    tracing::debug!(model = %config.model.model, "session started");

    while let Some(action) = prompt_action()? {
        match action {
            MenuAction::AddPre => {
                if let Some(record) = form::prompt_pre_inspection()? {
                    let view = api::submit(&mut inspection, record.into());
                    println!("✅ Pre-Earthquake Data Submitted");
                    render_view(&view);
                }
            }
            MenuAction::AddPost => {
                if let Some(record) = form::prompt_post_inspection()? {
                    let view = api::submit(&mut inspection, record.into());
                    println!("✅ Post-Earthquake Data Submitted");
                    render_view(&view);
                }
            }
            MenuAction::ListEntries => render_view(&inspection.view()),
            MenuAction::RemovePre => remove_entry(&mut inspection, RecordKind::Pre)?,
            MenuAction::RemovePost => remove_entry(&mut inspection, RecordKind::Post)?,
            MenuAction::Compare => {
                if let Some(report) = compare(&ctx, &inspection) {
                    last_report = Some(report);
                }
            }
            MenuAction::SaveReport => save_report(last_report.as_deref())?,
            MenuAction::Quit => break,
        }
    }

    tracing::debug!(
        pre = inspection.len(RecordKind::Pre),
        post = inspection.len(RecordKind::Post),
        "session ended"
    );
    Ok(())
}

fn prompt_action() -> Result<Option<MenuAction>, AppError> {
    let items: Vec<&str> = MenuAction::ALL.iter().map(MenuAction::label).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Interaction(format!("Failed to select action: {}", err)))?;

    Ok(selection.map(|index| MenuAction::ALL[index]))
}

/// Run the comparison; failures are shown and the session carries on.
fn compare(ctx: &DefaultContext, inspection: &InspectionSession) -> Option<String> {
    let unmatched = inspection.view().unmatched_rooms();
    if !unmatched.is_empty() && inspection.missing_kinds().is_empty() {
        let rooms: Vec<&str> = unmatched.iter().map(|room| room.label()).collect();
        println!("ℹ️  Rooms entered on one side only: {}", rooms.join(", "));
    }

    println!("Generating Report...");
    match api::compare(ctx, inspection) {
        Ok(report) => {
            println!("\nGenerated Report\n");
            println!("{}", report);
            Some(report)
        }
        Err(AppError::EmptyDataset { .. }) => {
            println!("⚠️  {}", EMPTY_DATA_WARNING);
            None
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("The entries are unchanged. Select \"Compare Data\" to try again.");
            None
        }
    }
}

fn remove_entry(inspection: &mut InspectionSession, kind: RecordKind) -> Result<(), AppError> {
    let view = inspection.view();
    let entries = view.entries(kind);
    if entries.is_empty() {
        println!("No {} entries to remove.", kind);
        return Ok(());
    }

    let mut items: Vec<String> = entries
        .iter()
        .map(|entry| format!("Remove Entry {} ({})", entry.position, entry.room))
        .collect();
    items.push(MENU_BACK_OPTION.to_string());

    let selection = Select::new()
        .with_prompt("Select entry")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Interaction(format!("Failed to select entry: {}", err)))?;

    let Some(index) = selection else { return Ok(()) };
    if index == items.len() - 1 {
        return Ok(());
    }

    match api::remove(inspection, kind, entries[index].position) {
        Ok(view) => render_view(&view),
        Err(err @ AppError::IndexOutOfRange { .. }) => println!("⚠️  {}", err),
        Err(err) => return Err(err),
    }
    Ok(())
}

fn save_report(report: Option<&str>) -> Result<(), AppError> {
    let Some(report) = report else {
        println!("No report generated yet. Select \"Compare Data\" first.");
        return Ok(());
    };

    let path: String = Input::new()
        .with_prompt("File name (empty for a timestamped name)")
        .allow_empty(true)
        .interact_text()
        .map_err(|err| AppError::Interaction(format!("Failed to read file name: {}", err)))?;

    let path = path.trim();
    let target = (!path.is_empty()).then(|| std::path::Path::new(path));
    let written = api::save_report(report, target)?;
    println!("✅ Saved report to {}", written.display());
    Ok(())
}

fn render_view(view: &SessionView) {
    for kind in RecordKind::ALL {
        let entries = view.entries(kind);
        println!("{} entries: {}", kind, entries.len());
        for entry in entries {
            println!("  {}. {}", entry.position, entry.room);
        }
    }
}
