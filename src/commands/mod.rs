//! Command handlers. Each one opens a [`Session`], does its work through the
//! library, then prints a view or a JSON event.

pub mod actions;
pub mod analytics;
pub mod bookmark;
pub mod departments;
pub mod fetch;
pub mod list;
pub mod show;

use std::path::PathBuf;

use anyhow::Result;

use staffdeck::config::Config;
use staffdeck::presentation::{factory, ColorWhen};
use staffdeck::{Employee, EmployeeId, EmployeeStore, StaffdeckError};

use crate::ui::context::UiContext;

/// Flags shared by every subcommand.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    pub json: bool,
    pub verbose: u8,
    pub color: Option<ColorWhen>,
    pub store: Option<PathBuf>,
}

pub struct Session {
    pub config: Config,
    pub ui: UiContext,
    pub store_path: PathBuf,
}

impl Session {
    pub fn open(opts: &GlobalOptions) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config = Config::load_or_default(Some(&cwd));
        let ui = UiContext::new(opts.json, opts.color, &config);
        let store_path = factory::store_path(opts.store.as_deref(), &config);
        Ok(Self {
            config,
            ui,
            store_path,
        })
    }

    pub fn store(&self) -> EmployeeStore {
        factory::create_store(self.store_path.clone())
    }

    pub fn print(&self, rendered: &str) {
        print!("{}", rendered);
    }
}

pub fn require_employee(store: &EmployeeStore, id: u32) -> Result<&Employee, StaffdeckError> {
    let id = EmployeeId::new(id);
    store
        .find(id)
        .ok_or(StaffdeckError::EmployeeNotFound { id })
}

/// Employee as JSON with its bookmark flag merged in.
pub fn employee_json(employee: &Employee, bookmarked: bool) -> Result<serde_json::Value> {
    let mut value = serde_json::to_value(employee)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("bookmarked".to_string(), serde_json::Value::Bool(bookmarked));
    }
    Ok(value)
}
