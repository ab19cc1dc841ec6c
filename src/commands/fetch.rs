//! Fetch command handler

use anyhow::Result;

use staffdeck::presentation::{create_ingest_use_case, IngestOverrides};
use staffdeck::StaffdeckError;

use super::{GlobalOptions, Session};
use crate::ui::views::fetch::FetchView;

pub fn cmd_fetch(opts: &GlobalOptions, overrides: IngestOverrides) -> Result<()> {
    let session = Session::open(opts)?;
    let mut store = session.store();

    let (mut use_case, seed) = create_ingest_use_case(&session.config, &overrides);
    let report = use_case.run(&mut store).map_err(StaffdeckError::from)?;

    if session.ui.json {
        let duplicates: Vec<u32> = report.duplicate_ids.iter().map(|id| id.get()).collect();
        crate::ui::json::emit(serde_json::json!({
            "event": "data",
            "command": "fetch",
            "source": report.source,
            "fetched": report.fetched,
            "seed": seed,
            "duplicate_ids": duplicates,
            "persisted": report.persisted(),
            "persist_error": report.persist_error.as_ref().map(|e| e.to_string()),
            "store": session.store_path.display().to_string(),
        }))?;
        return Ok(());
    }

    let view = FetchView::new(&report, seed, &session.store_path);
    session.print(&view.render(session.ui.color, session.ui.unicode));
    Ok(())
}
