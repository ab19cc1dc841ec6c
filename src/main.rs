//! staffdeck CLI - terminal HR dashboard
//!
//! Usage: staffdeck <COMMAND>
//!
//! Commands:
//!   fetch        Load employees from the source into the local store
//!   list         Search and filter employees
//!   show         Employee profile
//!   bookmark     Toggle a bookmark
//!   bookmarks    Bookmarked employees
//!   analytics    Department averages and bookmark ratio
//!   promote      Simulated promotion request
//!   assign       Simulated project assignment
//!   departments  Department names

use is_terminal::IsTerminal;

use anyhow::Result;
use clap::Parser;

use staffdeck::logging::{init_logging, LogConfig, LogFormat};
use staffdeck::presentation::{Cli, ColorWhen, Commands, IngestOverrides};

mod commands;
mod ui;

use commands::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let ansi = match cli.color {
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Never) => false,
        Some(ColorWhen::Auto) | None => std::io::stderr().is_terminal(),
    };
    let mut log_config = LogConfig::from_verbosity(cli.verbose).with_ansi(ansi);
    if cli.json {
        log_config = log_config.with_format(LogFormat::Json);
    }
    if let Err(e) = init_logging(&log_config) {
        eprintln!("warning: logging unavailable: {}", e);
    }

    let opts = GlobalOptions {
        json: cli.json,
        verbose: cli.verbose,
        color: cli.color,
        store: cli.store,
    };

    if let Err(e) = run(cli.command, &opts) {
        ui::error::print_error(&e, opts.json, opts.verbose);
        std::process::exit(1);
    }
}

fn run(command: Commands, opts: &GlobalOptions) -> Result<()> {
    match command {
        Commands::Fetch { seed, limit, url } => {
            commands::fetch::cmd_fetch(opts, IngestOverrides { seed, limit, url })
        }
        Commands::List { query, department } => commands::list::cmd_list(opts, query, department),
        Commands::Show { id } => commands::show::cmd_show(opts, id),
        Commands::Bookmark { id } => commands::bookmark::cmd_bookmark(opts, id),
        Commands::Bookmarks => commands::list::cmd_bookmarks(opts),
        Commands::Analytics => commands::analytics::cmd_analytics(opts),
        Commands::Promote { id, yes } => commands::actions::cmd_promote(opts, id, yes),
        Commands::Assign { id, project, yes } => {
            commands::actions::cmd_assign(opts, id, &project, yes)
        }
        Commands::Departments => commands::departments::cmd_departments(opts),
    }
}
