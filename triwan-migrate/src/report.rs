use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use crate::plan::{Weights, LAN_IFNAMES, WAN_ASSIGNMENTS};
use crate::precheck::PrecheckReport;
use crate::verify::{render_verify_text, VerifyOutcome, VerifyReport};

/// Everything the operator sees at the end of a migration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationSummary {
    pub precheck: PrecheckReport,
    pub backup_dir: PathBuf,
    pub weights: Weights,
    pub verify: VerifyReport,
    pub artifacts: Vec<PathBuf>,
    pub warnings: usize,
}

/// Render the final summary for terminal output. Emitted regardless of
/// warning state.
pub fn render_summary(summary: &MigrationSummary) -> String {
    let mut out = Vec::new();

    let headline = match summary.verify.outcome {
        VerifyOutcome::Pass if summary.warnings == 0 => {
            "migration complete".green().bold().to_string()
        }
        _ => "migration complete (with warnings)".yellow().bold().to_string(),
    };
    out.push(headline);

    out.push(String::new());
    out.push("port assignments".to_string());
    out.push(format!("- lan -> {LAN_IFNAMES}"));
    for wan in &WAN_ASSIGNMENTS {
        out.push(format!("- {} -> {}", wan.name, wan.ifname));
    }
    out.push(format!(
        "- weights: wan={} wan2={} wan3={}",
        summary.weights.wan, summary.weights.wan2, summary.weights.wan3
    ));

    out.push(String::new());
    out.push(render_verify_text(&summary.verify));

    out.push(String::new());
    out.push("operational commands".to_string());
    if summary.artifacts.is_empty() {
        out.push("- none written".to_string());
    } else {
        for path in &summary.artifacts {
            out.push(format!("- {}", path.display()));
        }
    }

    out.push(String::new());
    out.push(format!(
        "backup: {}",
        summary.backup_dir.display().to_string().cyan()
    ));
    if summary.warnings > 0 {
        out.push(format!("warnings: {}", summary.warnings).yellow().to_string());
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{render_summary, MigrationSummary};
    use crate::link::LinkState;
    use crate::plan::Weights;
    use crate::precheck::PrecheckReport;
    use crate::verify::{VerifyOutcome, VerifyReport, WanLink};

    fn summary(outcome: VerifyOutcome, warnings: usize) -> MigrationSummary {
        MigrationSummary {
            precheck: PrecheckReport {
                lan_ifname: "eth0 eth1 eth2 eth3 eth4".to_string(),
                multiwan_enabled: "(not present)".to_string(),
                wan2_defined: false,
            },
            backup_dir: PathBuf::from("/etc/triwan-backups/20260829-120000"),
            weights: Weights::default(),
            verify: VerifyReport {
                outcome,
                links: vec![WanLink {
                    name: "wan".to_string(),
                    ifname: "eth4".to_string(),
                    state: LinkState::Up,
                }],
            },
            artifacts: vec![PathBuf::from("/usr/sbin/wan-status")],
            warnings,
        }
    }

    #[test]
    fn lists_ports_commands_and_backup() {
        let text = render_summary(&summary(VerifyOutcome::Pass, 0));
        assert!(text.contains("- lan -> eth0 eth1"));
        assert!(text.contains("- wan3 -> eth2"));
        assert!(text.contains("/usr/sbin/wan-status"));
        assert!(text.contains("20260829-120000"));
    }

    #[test]
    fn warning_counts_appear_when_present() {
        let text = render_summary(&summary(VerifyOutcome::Warn, 2));
        assert!(text.contains("with warnings"));
        assert!(text.contains("warnings: 2"));
    }
}
