use std::path::PathBuf;

use clap::Parser;
use epicor_user_sync::Result;
use epicor_user_sync::config::Config;
use epicor_user_sync::logging::init_logging;
use epicor_user_sync::sync::{
    self, DEFAULT_INACTIVE_EMPLOYEES, DEFAULT_NEW_EMPLOYEES, EmployeeFiles,
};
use tracing::info;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose)?;

    let config = Config::from_env()?;
    let files = EmployeeFiles {
        new_employees: cli.new_employees,
        inactive_employees: cli.inactive_employees,
    };

    let report = sync::run(&config, &files)?;
    info!(
        created = report.created,
        inactivated = report.inactivated,
        "user synchronisation finished"
    );
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Create and disable Epicor user accounts from employee CSV files."
)]
struct Cli {
    /// CSV of employees whose accounts should be created.
    #[arg(long, default_value = DEFAULT_NEW_EMPLOYEES)]
    new_employees: PathBuf,

    /// CSV of employees whose accounts should be disabled.
    #[arg(long, default_value = DEFAULT_INACTIVE_EMPLOYEES)]
    inactive_employees: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}
