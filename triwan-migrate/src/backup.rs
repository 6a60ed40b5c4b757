//! Pre-mutation snapshots and explicit restore.
//!
//! Backups are a precondition for safety, not best-effort: a failed copy of
//! any single store aborts the whole migration before the first mutation.
//! Snapshots are write-once and never consulted automatically; the
//! `restore` subcommand copies them back only on operator request.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Local;

/// Name of the checkpoint file inside a backup directory that records which
/// stores committed, one per line, in commit order.
pub const CHECKPOINT_FILE: &str = "committed";

/// Snapshot each named store file into a fresh timestamped directory under
/// `backup_root`, as `{name}.bak`. Returns the directory created.
pub fn snapshot(stores_root: &Path, backup_root: &Path, stores: &[&str]) -> Result<PathBuf> {
    let stamp = Local::now().format("%Y%m%d-%H%M%S").to_string();
    let mut dir = backup_root.join(&stamp);
    let mut attempt = 1;
    while dir.exists() {
        dir = backup_root.join(format!("{stamp}-{attempt}"));
        attempt += 1;
    }
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create backup directory {}", dir.display()))?;

    for store in stores {
        let src = stores_root.join(store);
        let dst = dir.join(format!("{store}.bak"));
        fs::copy(&src, &dst).with_context(|| {
            format!(
                "failed to back up store '{store}' from {} to {}",
                src.display(),
                dst.display()
            )
        })?;
    }

    Ok(dir)
}

/// Append a committed store name to the checkpoint file in the backup
/// directory.
pub fn record_checkpoint(backup_dir: &Path, store: &str) -> Result<()> {
    let path = backup_dir.join(CHECKPOINT_FILE);
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open checkpoint file {}", path.display()))?;
    writeln!(file, "{store}")
        .with_context(|| format!("failed to append to checkpoint file {}", path.display()))
}

/// Copy every `{name}.bak` snapshot in `backup_dir` back over the live store
/// files. Returns the restored store names, sorted.
pub fn restore(backup_dir: &Path, stores_root: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(backup_dir)
        .with_context(|| format!("failed to read backup directory {}", backup_dir.display()))?;

    let mut restored = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("failed to read backup directory {}", backup_dir.display()))?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(store) = name.strip_suffix(".bak") else {
            continue;
        };
        fs::copy(&path, stores_root.join(store))
            .with_context(|| format!("failed to restore store '{store}'"))?;
        restored.push(store.to_string());
    }

    if restored.is_empty() {
        bail!("no .bak snapshots found in {}", backup_dir.display());
    }
    restored.sort();
    Ok(restored)
}
