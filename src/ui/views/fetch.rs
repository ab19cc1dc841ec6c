use std::path::Path;

use staffdeck::application::IngestReport;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub struct FetchView<'a> {
    report: &'a IngestReport,
    seed: u64,
    store_path: &'a Path,
}

impl<'a> FetchView<'a> {
    pub fn new(report: &'a IngestReport, seed: u64, store_path: &'a Path) -> Self {
        Self {
            report,
            seed,
            store_path,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut header = CommandHeader::new(Icon::Fetch, "Fetch Employees");
        header.add("Source", self.report.source.as_str());
        header.add("Store", self.store_path.display().to_string());
        header.add("Seed", self.seed.to_string());
        let mut out = header.render(supports_color, supports_unicode);
        out.push('\n');

        let mut summary = match &self.report.persist_error {
            None => ResultSummary::success("Employees Loaded"),
            Some(_) => ResultSummary::partial("Employees Loaded (not saved)"),
        };
        summary.add_stat("employees", self.report.fetched);

        if !self.report.duplicate_ids.is_empty() {
            let ids: Vec<String> = self.report.duplicate_ids.iter().map(|id| id.to_string()).collect();
            summary.add_warning(format!("Duplicate ids from source: {}", ids.join(", ")));
        }
        if let Some(e) = &self.report.persist_error {
            summary.add_warning(format!("Could not save: {}", e));
        }
        summary.with_next_step("staffdeck list");

        out.push_str(&summary.render(supports_color, supports_unicode));
        out
    }
}
