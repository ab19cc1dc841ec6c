//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --color, --verbose, --store) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// staffdeck - terminal HR dashboard
#[derive(Parser, Debug)]
#[command(name = "staffdeck")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'staffdeck fetch' first to load employees.")]
pub struct Cli {
    /// Print newline-delimited JSON events instead of formatted output
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Store file (defaults to ~/.staffdeck/hr-dashboard-storage.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch employees from the source and replace the stored list
    Fetch {
        /// Seed for department and rating assignment
        #[arg(long)]
        seed: Option<u64>,

        /// Number of employees to request
        #[arg(long)]
        limit: Option<usize>,

        /// Source URL (overrides config)
        #[arg(long)]
        url: Option<String>,
    },

    /// List employees, optionally filtered
    List {
        /// Case-insensitive match on first name, last name or email
        #[arg(short, long)]
        query: Option<String>,

        /// Only this department (Engineering, Marketing, Sales, HR, Finance)
        #[arg(short, long)]
        department: Option<String>,
    },

    /// Show one employee's profile
    Show {
        /// Employee id
        id: u32,
    },

    /// Toggle the bookmark on an employee
    Bookmark {
        /// Employee id
        id: u32,
    },

    /// List bookmarked employees
    Bookmarks,

    /// Department averages and bookmark ratio
    Analytics,

    /// Request a promotion (simulated, nothing is stored)
    Promote {
        /// Employee id
        id: u32,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Assign an employee to a project (simulated, nothing is stored)
    Assign {
        /// Employee id
        id: u32,

        /// Project name
        project: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List department names
    Departments,
}
