use std::time::Duration;

use anyhow::Result;
use triwan_migrate::link::SysfsLinks;
use triwan_migrate::verify::{build_verify_report, render_verify_text};

use crate::cli::{OutputFormat, VerifyArgs};

const VERIFY_POLL_INTERVAL: Duration = Duration::from_secs(1);

pub fn run_verify(args: VerifyArgs) -> Result<()> {
    let links = SysfsLinks {
        sys_root: args.sys_root.clone(),
    };
    let report = build_verify_report(
        &links,
        Duration::from_secs(args.verify_timeout_secs),
        VERIFY_POLL_INTERVAL,
    );

    match args.format {
        OutputFormat::Text => println!("{}", render_verify_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    // Verification is diagnostic only; a warn outcome is still a clean exit.
    Ok(())
}
