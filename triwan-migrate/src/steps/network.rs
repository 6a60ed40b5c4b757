//! Network topology step: rebind the LAN to the two-port set and define the
//! three WAN interfaces plus the IPv6 companion for the new WAN.

use uci_store_core::UciDocument;

use crate::plan::{MigrationPlan, LAN_IFNAMES, WAN3_IPV6_NAME, WAN_ASSIGNMENTS};

pub fn apply(doc: &mut UciDocument, _plan: &MigrationPlan) {
    let lan = doc.ensure_typed("interface", "lan");
    lan.set_option("ifname", LAN_IFNAMES);

    for wan in &WAN_ASSIGNMENTS {
        let section = doc.ensure_typed("interface", wan.name);
        section.set_option("proto", "dhcp");
        section.set_option("ifname", wan.ifname);
        section.set_option("mtu", "1500");
    }

    // IPv6 companion rides the same physical uplink as wan3.
    let wan3_ifname = WAN_ASSIGNMENTS[2].ifname;
    let companion = doc.ensure_typed("interface", WAN3_IPV6_NAME);
    companion.set_option("proto", "dhcpv6");
    companion.set_option("ifname", wan3_ifname);
}
