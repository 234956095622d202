// In memory implementation of the ScanEventSource port.
//
// Purpose
// - Support handler tests and local runs without a badge-scanner backend.
//
// Responsibilities
// - Keep swipes per employee in the order they were recorded.
// - Return the swipes falling inside the requested window, without reordering them.

use crate::modules::work_statistics::core::ports::{ScanEventSource, SourceError};
use crate::modules::work_statistics::core::range::TimeWindow;
use crate::modules::work_statistics::core::scan_event::ScanEvent;
use crate::shared::core::primitives::EmployeeId;
use crate::shared::infrastructure::availability::Availability;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryScanEvents {
    events: RwLock<HashMap<EmployeeId, Vec<ScanEvent>>>,
    pub availability: Availability,
}

impl InMemoryScanEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record(&self, event: ScanEvent) {
        self.events
            .write()
            .await
            .entry(event.employee_id)
            .or_default()
            .push(event);
    }

    pub async fn record_all(&self, events: impl IntoIterator<Item = ScanEvent>) {
        let mut guard = self.events.write().await;
        for event in events {
            guard.entry(event.employee_id).or_default().push(event);
        }
    }
}

#[async_trait::async_trait]
impl ScanEventSource for InMemoryScanEvents {
    async fn fetch_scan_events(
        &self,
        employee_id: EmployeeId,
        window: TimeWindow,
    ) -> Result<Vec<ScanEvent>, SourceError> {
        if !self.availability.reachable().await {
            return Err(SourceError::Unavailable("Scan event source offline".into()));
        }
        let guard = self.events.read().await;
        Ok(guard
            .get(&employee_id)
            .map(|events| {
                events
                    .iter()
                    .filter(|event| window.contains(&event.timestamp))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
