use std::fs;
use std::path::Path;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Physical interfaces bound to the LAN bridge after migration.
pub const LAN_IFNAMES: &str = "eth0 eth1";

/// Switch ports carrying the LAN VLAN after migration.
pub const LAN_SWITCH_PORTS: &str = "0 1";

/// Name of the IPv6 companion interface for the new WAN.
pub const WAN3_IPV6_NAME: &str = "wan36";

/// Logical name of the WAN added by this migration.
pub const NEW_WAN: &str = "wan3";

/// Stores snapshotted before mutation and touched by the migration steps.
pub const CRITICAL_STORES: [&str; 5] = ["network", "firewall", "dhcp", "switch", "dualwan"];

/// Services restarted after all stores are committed, in order.
pub const SERVICES: [&str; 3] = ["network", "firewall", "dnsmasq"];

/// One logical WAN and the physical interface it binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WanAssignment {
    pub name: &'static str,
    pub ifname: &'static str,
}

/// The three-WAN target assignment.
pub const WAN_ASSIGNMENTS: [WanAssignment; 3] = [
    WanAssignment {
        name: "wan",
        ifname: "eth4",
    },
    WanAssignment {
        name: "wan2",
        ifname: "eth3",
    },
    WanAssignment {
        name: "wan3",
        ifname: "eth2",
    },
];

/// Per-WAN load-balancing weights. Defaults to an equal 1:1:1 split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weights {
    #[serde(default = "default_weight")]
    pub wan: u32,
    #[serde(default = "default_weight")]
    pub wan2: u32,
    #[serde(default = "default_weight")]
    pub wan3: u32,
}

fn default_weight() -> u32 {
    1
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            wan: 1,
            wan2: 1,
            wan3: 1,
        }
    }
}

/// Everything the migration steps need beyond the store handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationPlan {
    pub weights: Weights,
}

impl MigrationPlan {
    /// Build a plan, loading weights from an optional TOML file.
    pub fn resolve(weights_file: Option<&Path>) -> Self {
        let (weights, source) = load_weights(weights_file);
        tracing::info!(
            "using weights from {source}: wan={} wan2={} wan3={}",
            weights.wan,
            weights.wan2,
            weights.wan3
        );
        Self { weights }
    }
}

/// Load weights from a TOML file, falling back to embedded defaults with a
/// warning when the file is absent or invalid. Returns the weights and a
/// description of where they came from.
pub fn load_weights(path: Option<&Path>) -> (Weights, String) {
    let Some(path) = path else {
        return (Weights::default(), "embedded".to_string());
    };

    match load_weights_file(path) {
        Ok(weights) => (weights, format!("file:{}", path.display())),
        Err(err) => {
            tracing::warn!(
                "failed to load weights from {} ({err}); using embedded defaults",
                path.display()
            );
            (Weights::default(), "embedded".to_string())
        }
    }
}

fn load_weights_file(path: &Path) -> Result<Weights> {
    let raw = fs::read_to_string(path)?;
    let weights: Weights = toml::from_str(&raw)?;
    if weights.wan == 0 || weights.wan2 == 0 || weights.wan3 == 0 {
        bail!("weights must be positive integers");
    }
    Ok(weights)
}
