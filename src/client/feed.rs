use dioxus::logger::tracing::{info, warn};

use crate::shared::{SensorSnapshot, SnapshotCollection};

/// Connection indicator shown on the page. The only health signal the client exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Pending,
    Online,
    Degraded,
}

impl ConnectionStatus {
    pub fn opacity(self) -> &'static str {
        match self {
            ConnectionStatus::Pending => "0.6",
            ConnectionStatus::Online => "1",
            ConnectionStatus::Degraded => "0.3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConnectionStatus::Pending => "Connecting",
            ConnectionStatus::Online => "Live",
            ConnectionStatus::Degraded => "Offline",
        }
    }
}

/// Poll boundary: absorbs fetch results, keeping the last good collection on failure.
#[derive(Debug, Clone, Default)]
pub struct SnapshotFeed {
    latest: SnapshotCollection,
    status: ConnectionStatus,
    consecutive_failures: u32,
}

impl SnapshotFeed {
    /// Returns the fresh collection on success, `None` when the poll failed.
    pub fn absorb(&mut self, result: anyhow::Result<SnapshotCollection>) -> Option<&[SensorSnapshot]> {
        match result {
            Ok(sensors) => {
                if self.consecutive_failures > 0 {
                    info!(
                        "[feed] back online after {} failed poll(s)",
                        self.consecutive_failures
                    );
                }
                self.latest = sensors;
                self.status = ConnectionStatus::Online;
                self.consecutive_failures = 0;
                Some(&self.latest)
            }
            Err(e) => {
                self.consecutive_failures += 1;
                self.status = ConnectionStatus::Degraded;
                warn!(
                    "[feed] poll failed ({} in a row), keeping last data: {:#}",
                    self.consecutive_failures, e
                );
                None
            }
        }
    }

    pub fn sensors(&self) -> &[SensorSnapshot] {
        &self.latest
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }
}
