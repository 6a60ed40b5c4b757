use anyhow::Result;
use triwan_migrate::precheck::{build_precheck_report, render_precheck_text};
use uci_store_core::DirStore;

use crate::cli::{CheckArgs, OutputFormat};

pub fn run_check(args: CheckArgs) -> Result<()> {
    let mut stores = DirStore::open(&args.config_dir);
    let report = build_precheck_report(&mut stores);

    match args.format {
        OutputFormat::Text => println!("{}", render_precheck_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
