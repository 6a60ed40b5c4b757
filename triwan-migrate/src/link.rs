//! Link-status query boundary.
//!
//! Link bring-up after a network restart is asynchronous and outside this
//! system's control, so callers poll the boundary with a bounded timeout
//! instead of sleeping a fixed interval. Any query error resolves to
//! [`LinkState::Unknown`]; downstream logic never branches on an undefined
//! value.

use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use serde::Serialize;

/// Tri-state link status for one interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkState {
    Up,
    Down,
    Unknown,
}

/// Boundary to the live interface-status subsystem.
pub trait LinkStatusSource {
    fn status(&self, ifname: &str) -> LinkState;
}

/// Read link state from sysfs (`{sys_root}/class/net/{ifname}/operstate`).
#[derive(Debug, Clone)]
pub struct SysfsLinks {
    pub sys_root: PathBuf,
}

impl LinkStatusSource for SysfsLinks {
    fn status(&self, ifname: &str) -> LinkState {
        let path = self
            .sys_root
            .join("class/net")
            .join(ifname)
            .join("operstate");
        match fs::read_to_string(&path) {
            Ok(state) if state.trim() == "up" => LinkState::Up,
            Ok(_) => LinkState::Down,
            Err(_) => LinkState::Unknown,
        }
    }
}

/// Poll every interface until at least one reports up or `timeout` elapses,
/// sampling every `interval`. Returns the final snapshot in input order.
/// A zero timeout samples exactly once.
pub fn poll_links(
    source: &dyn LinkStatusSource,
    ifnames: &[&str],
    timeout: Duration,
    interval: Duration,
) -> Vec<LinkState> {
    let deadline = Instant::now() + timeout;
    loop {
        let states: Vec<LinkState> = ifnames.iter().map(|name| source.status(name)).collect();
        let now = Instant::now();
        if states.contains(&LinkState::Up) || now >= deadline {
            return states;
        }
        thread::sleep(interval.min(deadline - now));
    }
}
