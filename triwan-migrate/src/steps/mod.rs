//! The ordered store mutations that carry out the topology change.
//!
//! Each step touches exactly one store and is a sequence of idempotent
//! key assignments: re-running a step with identical inputs converges to
//! the same final state. The two inherently append-only domains (firewall
//! zone membership and the anonymous rule list) guard their appends with
//! explicit existence checks instead.

use uci_store_core::{DirStore, StoreError, UciDocument};

use crate::plan::MigrationPlan;

pub mod dhcp;
pub mod dualwan;
pub mod firewall;
pub mod network;
pub mod switch_ports;

/// One migration step: the store it mutates and the mutation itself.
#[derive(Clone, Copy)]
pub struct Step {
    pub store: &'static str,
    pub apply: fn(&mut UciDocument, &MigrationPlan),
}

/// All steps in execution order. A commit failure in any step aborts the
/// remainder; earlier commits stay in place.
pub const ALL: [Step; 5] = [
    Step {
        store: "network",
        apply: network::apply,
    },
    Step {
        store: "dualwan",
        apply: dualwan::apply,
    },
    Step {
        store: "switch",
        apply: switch_ports::apply,
    },
    Step {
        store: "firewall",
        apply: firewall::apply,
    },
    Step {
        store: "dhcp",
        apply: dhcp::apply,
    },
];

/// Run every step against the store set, committing each store immediately
/// after its mutation. `on_commit` is invoked with the store name after
/// each successful commit (checkpoint bookkeeping).
pub fn apply_all(
    stores: &mut DirStore,
    plan: &MigrationPlan,
    mut on_commit: impl FnMut(&str),
) -> Result<(), StoreError> {
    for step in &ALL {
        let doc = stores.load(step.store)?;
        (step.apply)(doc, plan);
        stores.commit(step.store)?;
        tracing::info!("committed store '{}'", step.store);
        on_commit(step.store);
    }
    Ok(())
}
