//! Switch port step: shrink the LAN VLAN to the two-port set and rebind the
//! IPTV service interface list to match.

use uci_store_core::UciDocument;

use crate::plan::{MigrationPlan, LAN_IFNAMES, LAN_SWITCH_PORTS};

pub fn apply(doc: &mut UciDocument, _plan: &MigrationPlan) {
    let vlan = doc.ensure_typed("switch_vlan", "lan_vlan");
    vlan.set_option("device", "switch0");
    vlan.set_option("vlan", "1");
    vlan.set_option("ports", LAN_SWITCH_PORTS);

    let iptv = doc.ensure_typed("service", "iptv");
    iptv.set_option("ifname", LAN_IFNAMES);
}
