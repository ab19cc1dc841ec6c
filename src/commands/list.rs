//! List and bookmarks command handlers

use anyhow::Result;

use staffdeck::domain::services::EmployeeQuery;
use staffdeck::{Department, Employee, EmployeeStore, StaffdeckError};

use super::{employee_json, GlobalOptions, Session};
use crate::ui::views::employees::EmployeesView;

pub fn cmd_list(opts: &GlobalOptions, text: Option<String>, department: Option<String>) -> Result<()> {
    let department = parse_department_filter(department.as_deref())?;

    let session = Session::open(opts)?;
    let store = session.store();

    let query = EmployeeQuery::new(text.clone().unwrap_or_default(), department);
    let matches = store.search(&query);

    if session.ui.json {
        return emit_employees("list", &store, &matches);
    }

    let filter = describe_filter(text.as_deref(), department);
    let view = EmployeesView::new(
        "Employees",
        &session.store_path,
        &matches,
        store.employees().len(),
        store.bookmark_ids(),
    )
    .with_filter(filter);
    session.print(&view.render(session.ui.color, session.ui.unicode));
    Ok(())
}

pub fn cmd_bookmarks(opts: &GlobalOptions) -> Result<()> {
    let session = Session::open(opts)?;
    let store = session.store();
    let bookmarked = store.bookmarked_employees();

    if session.ui.json {
        return emit_employees("bookmarks", &store, &bookmarked);
    }

    let view = EmployeesView::new(
        "Bookmarks",
        &session.store_path,
        &bookmarked,
        store.employees().len(),
        store.bookmark_ids(),
    )
    .with_empty_hint("Run `staffdeck bookmark <id>` to bookmark an employee.");
    session.print(&view.render(session.ui.color, session.ui.unicode));
    Ok(())
}

fn emit_employees(command: &str, store: &EmployeeStore, employees: &[&Employee]) -> Result<()> {
    let items = employees
        .iter()
        .map(|e| employee_json(e, store.is_bookmarked(e.id)))
        .collect::<Result<Vec<_>>>()?;

    crate::ui::json::emit(serde_json::json!({
        "event": "data",
        "command": command,
        "total": store.employees().len(),
        "count": items.len(),
        "employees": items,
    }))?;
    Ok(())
}

/// A blank selector means every department.
fn parse_department_filter(raw: Option<&str>) -> Result<Option<Department>, StaffdeckError> {
    raw.map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::parse::<Department>)
        .transpose()
        .map_err(StaffdeckError::from)
}

fn describe_filter(text: Option<&str>, department: Option<Department>) -> Option<String> {
    let text = text.map(str::trim).filter(|t| !t.is_empty());
    match (text, department) {
        (None, None) => None,
        (Some(t), None) => Some(format!("\"{}\"", t)),
        (None, Some(d)) => Some(d.to_string()),
        (Some(t), Some(d)) => Some(format!("\"{}\" in {}", t, d)),
    }
}
