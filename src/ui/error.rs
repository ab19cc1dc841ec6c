//! Top-level error rendering for the binary.

use staffdeck::StaffdeckError;

use crate::ui::blocks::error::ErrorBlock;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let block = match err.downcast_ref::<StaffdeckError>() {
        Some(StaffdeckError::EmployeeNotFound { id }) => {
            ErrorBlock::new("Employee not found", format!("No employee with id {}.", id))
                .with_fix("Run `staffdeck list` to see valid ids")
        }
        Some(StaffdeckError::UnknownDepartment(e)) => ErrorBlock::new("Unknown department", e.to_string())
            .with_fix("Run `staffdeck departments` for valid names"),
        Some(StaffdeckError::UnknownProject(e)) => ErrorBlock::new("Unknown project", e.to_string()),
        Some(StaffdeckError::Ingest(e)) => ErrorBlock::new("Fetch failed", e.to_string())
            .with_fix("Check the network or `source.url`, then run `staffdeck fetch` again"),
        Some(StaffdeckError::Store(e)) => ErrorBlock::new("Store error", e.to_string()),
        Some(other) => ErrorBlock::new("Error", other.to_string()),
        None => ErrorBlock::new("Error", format!("{:#}", err)),
    };
    block.render(supports_color, supports_unicode)
}

/// With `-v`, the underlying causes follow the block.
pub fn print_error(err: &anyhow::Error, json: bool, verbose: u8) {
    if json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        }));
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!("{}", format_error(err, caps.supports_color, caps.supports_unicode));
    if verbose > 0 {
        eprint!("{}", cause_chain(err));
    }
}

fn cause_chain(err: &anyhow::Error) -> String {
    err.chain()
        .skip(1)
        .map(|cause| format!("  caused by: {}\n", cause))
        .collect()
}
