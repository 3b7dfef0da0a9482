use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tuning knobs for a [`Vsm`](crate::Vsm) instance.
///
/// Deserializable so a host application can keep it next to its own settings;
/// missing fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VsmConfig {
    /// Longest time the training worker blocks on its input before
    /// re-checking cancellation (milliseconds).
    pub cancel_poll_ms: u64,
    /// Minimum number of index entries per rayon split during a scan.
    /// Indexes smaller than this are scanned on the calling thread.
    pub parallel_threshold: usize,
}

impl Default for VsmConfig {
    fn default() -> Self {
        Self {
            cancel_poll_ms: 10,
            parallel_threshold: 1024,
        }
    }
}

impl VsmConfig {
    /// poll interval, never zero
    pub fn cancel_poll(&self) -> Duration {
        Duration::from_millis(self.cancel_poll_ms.max(1))
    }
}
