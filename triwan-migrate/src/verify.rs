use std::time::Duration;

use serde::Serialize;

use crate::link::{poll_links, LinkState, LinkStatusSource};
use crate::plan::WAN_ASSIGNMENTS;

/// Overall verification outcome. Purely diagnostic; never fails the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerifyOutcome {
    /// At least one WAN link is up.
    Pass,
    /// All WAN links are down or unknown.
    Warn,
}

/// Link state of one logical WAN at verification time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WanLink {
    pub name: String,
    pub ifname: String,
    pub state: LinkState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub outcome: VerifyOutcome,
    pub links: Vec<WanLink>,
}

/// Classify a set of link states: pass whenever at least one is up.
pub fn classify(states: &[LinkState]) -> VerifyOutcome {
    if states.contains(&LinkState::Up) {
        VerifyOutcome::Pass
    } else {
        VerifyOutcome::Warn
    }
}

/// Poll the three WAN interfaces through the status boundary and classify
/// the result.
pub fn build_verify_report(
    source: &dyn LinkStatusSource,
    timeout: Duration,
    interval: Duration,
) -> VerifyReport {
    let ifnames: Vec<&str> = WAN_ASSIGNMENTS.iter().map(|wan| wan.ifname).collect();
    let states = poll_links(source, &ifnames, timeout, interval);

    let links: Vec<WanLink> = WAN_ASSIGNMENTS
        .iter()
        .zip(&states)
        .map(|(wan, state)| WanLink {
            name: wan.name.to_string(),
            ifname: wan.ifname.to_string(),
            state: *state,
        })
        .collect();

    VerifyReport {
        outcome: classify(&states),
        links,
    }
}

/// Render the verification report for terminal output.
pub fn render_verify_text(report: &VerifyReport) -> String {
    let mut out = Vec::new();
    let outcome = match report.outcome {
        VerifyOutcome::Pass => "pass",
        VerifyOutcome::Warn => "warn",
    };
    out.push(format!("verify outcome={outcome}"));
    for link in &report.links {
        let state = match link.state {
            LinkState::Up => "up",
            LinkState::Down => "down",
            LinkState::Unknown => "unknown",
        };
        out.push(format!("- {} ({}): {state}", link.name, link.ifname));
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{build_verify_report, classify, render_verify_text, VerifyOutcome};
    use crate::link::{LinkState, LinkStatusSource};

    struct Fixed(Vec<(&'static str, LinkState)>);

    impl LinkStatusSource for Fixed {
        fn status(&self, ifname: &str) -> LinkState {
            self.0
                .iter()
                .find(|(name, _)| *name == ifname)
                .map(|(_, state)| *state)
                .unwrap_or(LinkState::Unknown)
        }
    }

    #[test]
    fn one_up_link_passes() {
        assert_eq!(
            classify(&[LinkState::Down, LinkState::Up, LinkState::Unknown]),
            VerifyOutcome::Pass
        );
    }

    #[test]
    fn all_down_or_unknown_warns() {
        assert_eq!(
            classify(&[LinkState::Down, LinkState::Down, LinkState::Unknown]),
            VerifyOutcome::Warn
        );
        assert_eq!(classify(&[]), VerifyOutcome::Warn);
    }

    #[test]
    fn report_covers_all_three_wans_in_order() {
        let source = Fixed(vec![
            ("eth4", LinkState::Down),
            ("eth3", LinkState::Up),
            ("eth2", LinkState::Unknown),
        ]);
        let report = build_verify_report(&source, Duration::ZERO, Duration::from_millis(1));

        assert_eq!(report.outcome, VerifyOutcome::Pass);
        let names: Vec<_> = report.links.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["wan", "wan2", "wan3"]);
        assert_eq!(report.links[2].state, LinkState::Unknown);
    }

    #[test]
    fn text_render_names_each_wan() {
        let source = Fixed(vec![
            ("eth4", LinkState::Down),
            ("eth3", LinkState::Down),
            ("eth2", LinkState::Down),
        ]);
        let report = build_verify_report(&source, Duration::ZERO, Duration::from_millis(1));
        let text = render_verify_text(&report);
        assert!(text.contains("verify outcome=warn"));
        assert!(text.contains("- wan3 (eth2): down"));
    }
}
