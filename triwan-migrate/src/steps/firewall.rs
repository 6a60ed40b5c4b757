//! Firewall rule step: add the new WAN to the WAN zone membership and
//! append the two wan3-scoped allow rules.
//!
//! Both mutations are append-only domains, so each one checks for an
//! existing entry before inserting: zone membership goes through
//! [`TokenSet::add_unique`] (exact-token match, order preserved) and rules
//! are looked up by name.

use uci_store_core::{TokenSet, UciDocument, UciSection};

use crate::plan::{MigrationPlan, NEW_WAN};

pub fn apply(doc: &mut UciDocument, _plan: &MigrationPlan) {
    match doc.find_by_option_mut("zone", "name", "wan") {
        Some(zone) => {
            let mut networks = TokenSet::parse(zone.option("network").unwrap_or(""));
            if networks.add_unique(NEW_WAN) {
                zone.set_option("network", networks.to_string());
            }
        }
        None => {
            let zone = doc.add("zone");
            zone.set_option("name", "wan");
            zone.set_option("network", NEW_WAN);
        }
    }

    ensure_rule(doc, "Allow-DHCP-Renew-wan3", |rule| {
        rule.set_option("proto", "udp");
        rule.set_option("dest_port", "68");
    });
    ensure_rule(doc, "Allow-Ping-wan3", |rule| {
        rule.set_option("proto", "icmp");
        rule.set_option("icmp_type", "echo-request");
    });
}

/// Append an anonymous wan3-scoped accept rule unless one with this name
/// already exists.
fn ensure_rule(doc: &mut UciDocument, name: &str, fill: impl FnOnce(&mut UciSection)) {
    if doc.find_by_option("rule", "name", name).is_some() {
        return;
    }
    let rule = doc.add("rule");
    rule.set_option("name", name);
    rule.set_option("src", NEW_WAN);
    rule.set_option("family", "ipv4");
    rule.set_option("target", "ACCEPT");
    fill(rule);
}
