use serde::Serialize;
use uci_store_core::DirStore;

/// Sentinel for configuration values that are not present. Downstream logic
/// and the operator see this string instead of an error.
pub const NOT_PRESENT: &str = "(not present)";

/// Read-only snapshot of the topology state relevant to the migration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrecheckReport {
    /// Current LAN interface binding, or the sentinel.
    pub lan_ifname: String,
    /// Current multi-WAN enable flag, or the sentinel.
    pub multiwan_enabled: String,
    /// Whether a "wan2" interface definition already exists.
    pub wan2_defined: bool,
}

/// Build the precondition report. This never fails: unreadable stores are
/// logged as warnings and degrade to sentinels, so a partial or first-run
/// state stays diagnosable.
pub fn build_precheck_report(stores: &mut DirStore) -> PrecheckReport {
    let (lan_ifname, wan2_defined) = match stores.load("network") {
        Ok(network) => (
            network
                .get("lan")
                .and_then(|s| s.option("ifname"))
                .unwrap_or(NOT_PRESENT)
                .to_string(),
            network.get("wan2").is_some(),
        ),
        Err(err) => {
            tracing::warn!("precheck could not read network store: {err}");
            (NOT_PRESENT.to_string(), false)
        }
    };

    let multiwan_enabled = match stores.load("dualwan") {
        Ok(dualwan) => dualwan
            .get("general")
            .and_then(|s| s.option("enabled"))
            .unwrap_or(NOT_PRESENT)
            .to_string(),
        Err(err) => {
            tracing::warn!("precheck could not read dualwan store: {err}");
            NOT_PRESENT.to_string()
        }
    };

    PrecheckReport {
        lan_ifname,
        multiwan_enabled,
        wan2_defined,
    }
}

/// Render the precondition report for terminal output.
pub fn render_precheck_text(report: &PrecheckReport) -> String {
    let mut out = Vec::new();
    out.push("precheck".to_string());
    out.push(format!("- lan ifname: {}", report.lan_ifname));
    out.push(format!("- multiwan enabled: {}", report.multiwan_enabled));
    out.push(format!("- wan2 defined: {}", report.wan2_defined));
    out.join("\n")
}
