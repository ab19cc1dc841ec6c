//! Show command handler

use anyhow::Result;

use staffdeck::domain::services::{EmployeeProfile, PerformanceTier};
use staffdeck::infrastructure::ChaChaRandom;

use super::{employee_json, require_employee, GlobalOptions, Session};
use crate::ui::views::profile::ProfileView;

pub fn cmd_show(opts: &GlobalOptions, id: u32) -> Result<()> {
    let session = Session::open(opts)?;
    let store = session.store();
    let employee = require_employee(&store, id)?;
    let bookmarked = store.is_bookmarked(employee.id);

    // Same employee, same history across runs.
    let mut random = ChaChaRandom::seeded(u64::from(employee.id.get()));
    let profile = EmployeeProfile::generate(&mut random);

    if session.ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "data",
            "command": "show",
            "employee": employee_json(employee, bookmarked)?,
            "tier": PerformanceTier::from_rating(employee.performance).label(),
            "profile": profile,
        }))?;
        return Ok(());
    }

    let view = ProfileView::new(employee, bookmarked, &profile);
    session.print(&view.render(session.ui.color, session.ui.unicode));
    Ok(())
}
