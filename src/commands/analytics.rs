//! Analytics command handler

use anyhow::Result;

use super::{GlobalOptions, Session};
use crate::ui::views::analytics::AnalyticsView;

pub fn cmd_analytics(opts: &GlobalOptions) -> Result<()> {
    let session = Session::open(opts)?;
    let store = session.store();
    let stats = store.department_stats();
    let ratio = store.bookmark_ratio();

    if session.ui.json {
        let departments: serde_json::Map<String, serde_json::Value> = stats
            .iter()
            .map(|(name, stat)| {
                (
                    name.to_string(),
                    serde_json::json!({
                        "count": stat.count,
                        "average_rating": stat.average_rating(),
                    }),
                )
            })
            .collect();

        crate::ui::json::emit(serde_json::json!({
            "event": "data",
            "command": "analytics",
            "employees": store.employees().len(),
            "departments": departments,
            "bookmarks": ratio,
        }))?;
        return Ok(());
    }

    let view = AnalyticsView::new(&session.store_path, &stats, ratio);
    session.print(&view.render(session.ui.color, session.ui.unicode));
    Ok(())
}
