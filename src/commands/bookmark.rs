//! Bookmark toggle command handler

use anyhow::Result;

use super::{require_employee, GlobalOptions, Session};
use crate::ui::views::actions::BookmarkView;

pub fn cmd_bookmark(opts: &GlobalOptions, id: u32) -> Result<()> {
    let session = Session::open(opts)?;
    let mut store = session.store();
    let employee = require_employee(&store, id)?.clone();

    // A failed save still toggles for this run; report it and carry on.
    let save_error = store.toggle_bookmark(employee.id).err();
    let bookmarked = store.is_bookmarked(employee.id);

    if session.ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "data",
            "command": "bookmark",
            "id": employee.id,
            "bookmarked": bookmarked,
            "persisted": save_error.is_none(),
            "bookmark_count": store.bookmark_ids().len(),
        }))?;
        return Ok(());
    }

    let view = BookmarkView::new(&employee, bookmarked, save_error.as_ref());
    session.print(&view.render(session.ui.color, session.ui.unicode));
    Ok(())
}
