//! Generated operator scripts.
//!
//! Two self-contained, zero-argument shell scripts are written for
//! post-migration use: a status report (link state and IPv4 address per
//! WAN) and a batch interface restart. They are static text derived from
//! the WAN assignment table, not part of the migration state machine.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::plan::WAN_ASSIGNMENTS;

pub const STATUS_SCRIPT_NAME: &str = "wan-status";
pub const RESTART_SCRIPT_NAME: &str = "wan-restart";

/// Write both scripts into `bin_dir` with mode 0755, creating the directory
/// if needed. Returns the paths written.
pub fn write_artifacts(bin_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(bin_dir)
        .with_context(|| format!("failed to create bin directory {}", bin_dir.display()))?;

    let mut written = Vec::new();
    for (name, body) in [
        (STATUS_SCRIPT_NAME, status_script()),
        (RESTART_SCRIPT_NAME, restart_script()),
    ] {
        let path = bin_dir.join(name);
        fs::write(&path, body)
            .with_context(|| format!("failed to write script {}", path.display()))?;
        let mut perms = fs::metadata(&path)
            .with_context(|| format!("failed to stat script {}", path.display()))?
            .permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms)
            .with_context(|| format!("failed to chmod script {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

fn status_script() -> String {
    let mut out = String::from(
        "#!/bin/sh\n\
         # Print link state and IPv4 address for each WAN interface.\n",
    );
    for wan in &WAN_ASSIGNMENTS {
        out.push_str(&format!(
            "state=$(cat /sys/class/net/{dev}/operstate 2>/dev/null || echo unknown)\n\
             addr=$(ip -4 -o addr show dev {dev} 2>/dev/null | awk '{{print $4}}')\n\
             echo \"{name} ({dev}): $state ${{addr:-no-address}}\"\n",
            name = wan.name,
            dev = wan.ifname,
        ));
    }
    out
}

fn restart_script() -> String {
    let mut out = String::from(
        "#!/bin/sh\n\
         # Cycle all WAN interfaces.\n",
    );
    for wan in &WAN_ASSIGNMENTS {
        out.push_str(&format!(
            "ip link set {dev} down\n\
             sleep 1\n\
             ip link set {dev} up\n",
            dev = wan.ifname,
        ));
    }
    out
}
