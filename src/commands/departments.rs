//! Departments command handler

use anyhow::Result;

use staffdeck::Department;

use super::{GlobalOptions, Session};
use crate::ui::views::departments::DepartmentsView;

pub fn cmd_departments(opts: &GlobalOptions) -> Result<()> {
    if opts.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "data",
            "command": "departments",
            "departments": Department::names(),
        }))?;
        return Ok(());
    }

    let session = Session::open(opts)?;
    let stats = session.store().department_stats();
    session.print(&DepartmentsView::new(&stats).render(session.ui.color, session.ui.unicode));
    Ok(())
}
