use std::time::Duration;

use anyhow::{bail, Context, Result};
use triwan_migrate::artifacts::write_artifacts;
use triwan_migrate::backup;
use triwan_migrate::link::SysfsLinks;
use triwan_migrate::plan::{MigrationPlan, CRITICAL_STORES, SERVICES};
use triwan_migrate::precheck::{build_precheck_report, render_precheck_text};
use triwan_migrate::report::{render_summary, MigrationSummary};
use triwan_migrate::services::{restart_all, InitScripts};
use triwan_migrate::steps;
use triwan_migrate::verify::build_verify_report;
use uci_store_core::DirStore;

use crate::cli::{MigrateArgs, OutputFormat};

const VERIFY_POLL_INTERVAL: Duration = Duration::from_secs(1);

pub fn run_migrate(args: MigrateArgs) -> Result<()> {
    if !args.allow_unprivileged && !nix::unistd::Uid::effective().is_root() {
        bail!(
            "migration must run with elevated privilege; --allow-unprivileged is for dev/testing only"
        );
    }

    let plan = MigrationPlan::resolve(args.weights_file.as_deref());
    let mut stores = DirStore::open(&args.config_dir);

    let precheck = build_precheck_report(&mut stores);
    for line in render_precheck_text(&precheck).lines() {
        tracing::info!("{line}");
    }

    // Snapshot every critical store before the first mutation. Failure here
    // aborts with nothing changed.
    let backup_dir = backup::snapshot(&args.config_dir, &args.backup_root, &CRITICAL_STORES)
        .context("backup failed; aborting before any mutation")?;
    tracing::info!("backed up stores to {}", backup_dir.display());

    steps::apply_all(&mut stores, &plan, |store| {
        if let Err(err) = backup::record_checkpoint(&backup_dir, store) {
            tracing::warn!("failed to record checkpoint for '{store}': {err}");
        }
    })
    .context("store commit failed; committed stores stay in place, see checkpoint file")?;

    let mut warnings = 0;
    if args.skip_restart {
        tracing::info!("skipping service restarts");
    } else {
        warnings += restart_all(
            &InitScripts::default(),
            &SERVICES,
            Duration::from_secs(args.settle_secs),
        );
    }

    let links = SysfsLinks {
        sys_root: args.sys_root.clone(),
    };
    let verify = build_verify_report(
        &links,
        Duration::from_secs(args.verify_timeout_secs),
        VERIFY_POLL_INTERVAL,
    );

    let artifacts = if args.skip_artifacts {
        Vec::new()
    } else {
        match write_artifacts(&args.bin_dir) {
            Ok(paths) => paths,
            Err(err) => {
                tracing::warn!("failed to write operator scripts: {err}");
                warnings += 1;
                Vec::new()
            }
        }
    };

    let summary = MigrationSummary {
        precheck,
        backup_dir,
        weights: plan.weights,
        verify,
        artifacts,
        warnings,
    };

    match args.format {
        OutputFormat::Text => println!("{}", render_summary(&summary)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}
