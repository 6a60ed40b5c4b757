//! Single-WAN to three-WAN router configuration migration.
//!
//! This library implements a configuration-migration engine for a fixed
//! topology change: a router whose network stack is bound to one (or two)
//! WAN uplinks is rewritten to carry three load-balanced WANs. The
//! migration is a sequence of idempotent mutations against five UCI-style
//! configuration stores ("network", "firewall", "dhcp", "switch",
//! "dualwan"), gated by a read-only precondition report, guarded by a
//! full snapshot of every store, and followed by best-effort service
//! restarts and link verification.
//!
//! # Architecture
//!
//! - [`plan`] — Fixed topology targets (interface assignments, port sets,
//!   services) and the configurable load-balancing weights
//! - [`precheck`] — Read-only precondition report with explicit
//!   "not present" sentinels for absent state
//! - [`backup`] — Timestamped per-store snapshots, committed-store
//!   checkpoints, and explicit restore
//! - [`steps`] — The five store mutations, one commit per store
//! - [`services`] — Init-script restarts with warning-only failure handling
//! - [`link`] — Link-status boundary with a bounded poll replacing fixed
//!   settle sleeps
//! - [`verify`] — Pass/warn classification of post-migration link state
//! - [`artifacts`] — Generated operator scripts (status, restart)
//! - [`report`] — Terminal-friendly colored summary
//!
//! # Failure model
//!
//! Backup and commit failures abort the run; already-committed stores stay
//! committed and the checkpoint file in the backup directory records how
//! far the run got. Service restart failures and link-down verification
//! results are warnings only. Absent configuration values never error;
//! they resolve to sentinels.
//!
//! # Built on uci-store-core
//!
//! All store parsing, serialization, and buffered-commit handling lives in
//! `uci-store-core`. Everything topology-specific is in this crate.

pub mod artifacts;
pub mod backup;
pub mod link;
pub mod plan;
pub mod precheck;
pub mod report;
pub mod services;
pub mod steps;
pub mod verify;
