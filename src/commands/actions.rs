//! Promote and assign command handlers
//!
//! Both actions are simulated: they confirm, then report. The store is only
//! read.

use anyhow::Result;

use staffdeck::application::actions::{assign_project, request_promotion};
use staffdeck::application::{ActionOutcome, ProjectCatalog};
use staffdeck::presentation::factory::create_confirmation;
use staffdeck::StaffdeckError;

use super::{require_employee, GlobalOptions, Session};
use crate::ui::views::actions::ActionView;

pub fn cmd_promote(opts: &GlobalOptions, id: u32, yes: bool) -> Result<()> {
    let session = Session::open(opts)?;
    let store = session.store();
    let employee = require_employee(&store, id)?;

    let confirmation = create_confirmation(yes, session.ui.interactive);
    let outcome = request_promotion(employee, confirmation.as_ref());

    if session.ui.json {
        return emit_outcome("promote", id, &outcome);
    }

    let view = ActionView::new("Promote", employee, &outcome);
    session.print(&view.render(session.ui.color, session.ui.unicode));
    Ok(())
}

pub fn cmd_assign(opts: &GlobalOptions, id: u32, project: &str, yes: bool) -> Result<()> {
    let session = Session::open(opts)?;
    let store = session.store();
    let employee = require_employee(&store, id)?;

    let catalog = ProjectCatalog::default();
    let confirmation = create_confirmation(yes, session.ui.interactive);
    let outcome = assign_project(employee, project, &catalog, confirmation.as_ref())
        .map_err(StaffdeckError::from)?;

    if session.ui.json {
        return emit_outcome("assign", id, &outcome);
    }

    let view = ActionView::new("Assign Project", employee, &outcome);
    session.print(&view.render(session.ui.color, session.ui.unicode));
    Ok(())
}

fn emit_outcome(command: &str, id: u32, outcome: &ActionOutcome) -> Result<()> {
    let (status, message) = match outcome {
        ActionOutcome::Submitted { message } => ("submitted", Some(message.as_str())),
        ActionOutcome::Cancelled => ("cancelled", None),
    };
    crate::ui::json::emit(serde_json::json!({
        "event": "data",
        "command": command,
        "id": id,
        "outcome": status,
        "message": message,
    }))?;
    Ok(())
}
