// Simulated availability for in memory adapters.
//
// Purpose
// - Let tests and local runs make an in memory collaborator slow or unreachable
//   without a real backend.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct Availability {
    offline: AtomicBool,
    delay_ms: AtomicU64,
}

impl Availability {
    pub fn toggle_offline(&self) {
        self.offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }

    pub fn set_delay_ms(&self, delay_ms: u64) {
        self.delay_ms.store(delay_ms, Ordering::SeqCst);
    }

    /// Waits out the configured delay, then reports whether the backend answers.
    pub async fn reachable(&self) -> bool {
        let delay_ms = self.delay_ms.load(Ordering::SeqCst);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        !self.is_offline()
    }
}
