use anyhow::Result;
use triwan_migrate::backup;

use crate::cli::RestoreArgs;

pub fn run_restore(args: RestoreArgs) -> Result<()> {
    let restored = backup::restore(&args.backup_dir, &args.config_dir)?;
    for store in &restored {
        println!("restored {store}");
    }
    tracing::info!(
        "restored {} store(s) from {}",
        restored.len(),
        args.backup_dir.display()
    );
    Ok(())
}
