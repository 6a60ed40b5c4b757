//! DHCP step: the new WAN is a client-facing uplink, so the router must not
//! serve DHCP on it.

use uci_store_core::UciDocument;

use crate::plan::{MigrationPlan, NEW_WAN};

pub fn apply(doc: &mut UciDocument, _plan: &MigrationPlan) {
    let entry = doc.ensure_typed("dhcp", NEW_WAN);
    entry.set_option("interface", NEW_WAN);
    entry.set_option("ignore", "1");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use uci_store_core::parse;

    use super::apply;
    use crate::plan::MigrationPlan;

    #[test]
    fn adds_ignore_entry_without_touching_lan_pool() {
        let mut doc = parse(
            "config dnsmasq\n\
             \toption domainneeded '1'\n\
             \n\
             config dhcp 'lan'\n\
             \toption interface 'lan'\n\
             \toption start '100'\n",
        )
        .expect("parse");

        apply(&mut doc, &MigrationPlan::resolve(None));

        let wan3 = doc.get("wan3").expect("wan3");
        assert_eq!(wan3.section_type, "dhcp");
        assert_eq!(wan3.option("interface"), Some("wan3"));
        assert_eq!(wan3.option("ignore"), Some("1"));

        let lan = doc.get("lan").expect("lan");
        assert_eq!(lan.option("start"), Some("100"));
    }
}
