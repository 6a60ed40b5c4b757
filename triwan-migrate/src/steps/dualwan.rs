//! Multi-WAN policy step: enable load balancing and set per-WAN enable
//! flags and weights.

use uci_store_core::UciDocument;

use crate::plan::MigrationPlan;

pub fn apply(doc: &mut UciDocument, plan: &MigrationPlan) {
    let general = doc.ensure_typed("dualwan", "general");
    general.set_option("enabled", "1");
    general.set_option("wan_enabled", "1");
    general.set_option("wan2_enabled", "1");
    general.set_option("wan3_enabled", "1");
    general.set_option("wan_weight", plan.weights.wan.to_string());
    general.set_option("wan2_weight", plan.weights.wan2.to_string());
    general.set_option("wan3_weight", plan.weights.wan3.to_string());
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use uci_store_core::{parse, UciDocument};

    use super::apply;
    use crate::plan::{MigrationPlan, Weights};

    #[test]
    fn enables_all_wans_with_equal_default_weights() {
        let mut doc = parse("config dualwan 'general'\n\toption enabled '0'\n").expect("parse");
        apply(&mut doc, &MigrationPlan::resolve(None));

        let general = doc.get("general").expect("general");
        assert_eq!(general.option("enabled"), Some("1"));
        for wan in ["wan", "wan2", "wan3"] {
            assert_eq!(general.option(&format!("{wan}_enabled")), Some("1"));
            assert_eq!(general.option(&format!("{wan}_weight")), Some("1"));
        }
    }

    #[test]
    fn applies_configured_weights() {
        let mut doc = UciDocument::new();
        let plan = MigrationPlan {
            weights: Weights {
                wan: 3,
                wan2: 2,
                wan3: 1,
            },
        };
        apply(&mut doc, &plan);

        let general = doc.get("general").expect("general");
        assert_eq!(general.option("wan_weight"), Some("3"));
        assert_eq!(general.option("wan2_weight"), Some("2"));
        assert_eq!(general.option("wan3_weight"), Some("1"));
    }
}
