use anyhow::Result;
use clap::Parser;

mod check_cmd;
mod cli;
mod logging;
mod migrate_cmd;
mod restore_cmd;
mod verify_cmd;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Migrate(args) => logging::init(Some(&args.log_file)),
        _ => logging::init(None),
    }

    match cli.command {
        Command::Check(args) => check_cmd::run_check(args),
        Command::Migrate(args) => migrate_cmd::run_migrate(args),
        Command::Verify(args) => verify_cmd::run_verify(args),
        Command::Restore(args) => restore_cmd::run_restore(args),
    }
}
