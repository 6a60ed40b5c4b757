//! Service restarts after all stores are committed.
//!
//! A restart failure is a warning, never fatal: the migration is
//! structurally complete once the stores are committed, and a service that
//! failed to cycle picks up the new configuration on its next start.

use std::path::PathBuf;
use std::process::Command;
use std::thread;
use std::time::Duration;

use thiserror::Error;

/// Errors from a single service restart attempt.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The init script could not be spawned.
    #[error("failed to spawn restart for '{service}': {source}")]
    Spawn {
        service: String,
        #[source]
        source: std::io::Error,
    },
    /// The init script ran but reported failure.
    #[error("restart of '{service}' exited with {status}")]
    Exit {
        service: String,
        status: std::process::ExitStatus,
    },
}

/// Boundary to the OS service manager.
pub trait ServiceManager {
    fn restart(&self, service: &str) -> Result<(), ServiceError>;
}

/// Restart services through their init scripts (`/etc/init.d/<name> restart`).
#[derive(Debug, Clone)]
pub struct InitScripts {
    pub init_dir: PathBuf,
}

impl Default for InitScripts {
    fn default() -> Self {
        Self {
            init_dir: PathBuf::from("/etc/init.d"),
        }
    }
}

impl ServiceManager for InitScripts {
    fn restart(&self, service: &str) -> Result<(), ServiceError> {
        let script = self.init_dir.join(service);
        let status = Command::new(&script)
            .arg("restart")
            .status()
            .map_err(|source| ServiceError::Spawn {
                service: service.to_string(),
                source,
            })?;
        if !status.success() {
            return Err(ServiceError::Exit {
                service: service.to_string(),
                status,
            });
        }
        Ok(())
    }
}

/// Restart each service in order, pausing for `settle` after the network
/// stack restart so dependent services come back against settled links.
/// Returns the number of failed restarts (each logged as a warning).
pub fn restart_all(manager: &dyn ServiceManager, services: &[&str], settle: Duration) -> usize {
    let mut failures = 0;
    for service in services {
        match manager.restart(service) {
            Ok(()) => tracing::info!("restarted service '{service}'"),
            Err(err) => {
                tracing::warn!("service restart failed: {err}");
                failures += 1;
            }
        }
        if *service == "network" && !settle.is_zero() {
            tracing::info!("waiting {}s for network to settle", settle.as_secs());
            thread::sleep(settle);
        }
    }
    failures
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::time::Duration;

    use super::{restart_all, ServiceError, ServiceManager};

    struct Fake {
        fail: &'static str,
        calls: RefCell<Vec<String>>,
    }

    impl ServiceManager for Fake {
        fn restart(&self, service: &str) -> Result<(), ServiceError> {
            self.calls.borrow_mut().push(service.to_string());
            if service == self.fail {
                return Err(ServiceError::Spawn {
                    service: service.to_string(),
                    source: std::io::Error::other("gone"),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn one_failure_does_not_stop_remaining_restarts() {
        let fake = Fake {
            fail: "firewall",
            calls: RefCell::new(Vec::new()),
        };
        let failures = restart_all(
            &fake,
            &["network", "firewall", "dnsmasq"],
            Duration::ZERO,
        );

        assert_eq!(failures, 1);
        assert_eq!(
            *fake.calls.borrow(),
            ["network", "firewall", "dnsmasq"]
        );
    }

    #[test]
    fn all_restarts_succeeding_reports_zero_failures() {
        let fake = Fake {
            fail: "",
            calls: RefCell::new(Vec::new()),
        };
        assert_eq!(restart_all(&fake, &["network"], Duration::ZERO), 0);
    }
}
