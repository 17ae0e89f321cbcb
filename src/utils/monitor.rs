#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::time::Instant;
#[cfg(feature = "cli")]
use sysinfo::{Pid, RefreshKind, System};

/// Optional process diagnostics, logged at phase boundaries when enabled.
/// Replaces ad-hoc `ps`/thread-id printing with structured log lines; has
/// no effect on validation results.
#[cfg(feature = "cli")]
pub struct SystemMonitor {
    system: Mutex<System>,
    pid: Pid,
    start_time: Instant,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let mut system = System::new_with_specifics(RefreshKind::everything());
        system.refresh_all();

        Self {
            system: Mutex::new(system),
            pid: sysinfo::get_current_pid().unwrap_or(Pid::from_u32(0)),
            start_time: Instant::now(),
            enabled,
        }
    }

    pub fn log_stats(&self, phase: &str) {
        if !self.enabled {
            return;
        }
        let Ok(mut system) = self.system.lock() else {
            return;
        };
        system.refresh_all();

        if let Some(process) = system.process(self.pid) {
            tracing::info!(
                "{} - CPU: {:.1}%, Memory: {}MB, Elapsed: {:?}",
                phase,
                process.cpu_usage(),
                process.memory() / 1024 / 1024,
                self.start_time.elapsed()
            );
        }
    }

    pub fn log_final_stats(&self) {
        if self.enabled {
            tracing::info!("Total time: {:?}", self.start_time.elapsed());
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(feature = "cli")]
impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

// No-op implementation when built without the CLI feature.
#[cfg(not(feature = "cli"))]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_stats(&self, _phase: &str) {}

    pub fn log_final_stats(&self) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}
