// In memory implementation of the EmployeeDirectory port.

use crate::modules::work_statistics::core::ports::{EmployeeDirectory, SourceError};
use crate::modules::work_statistics::core::statistics::EmployeeProfile;
use crate::shared::core::primitives::EmployeeId;
use crate::shared::infrastructure::availability::Availability;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryDirectory {
    profiles: RwLock<HashMap<EmployeeId, EmployeeProfile>>,
    pub availability: Availability,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, profile: EmployeeProfile) {
        self.profiles
            .write()
            .await
            .insert(profile.employee_id, profile);
    }
}

#[async_trait::async_trait]
impl EmployeeDirectory for InMemoryDirectory {
    async fn resolve(&self, employee_id: EmployeeId) -> Result<EmployeeProfile, SourceError> {
        if !self.availability.reachable().await {
            return Err(SourceError::Unavailable("Employee directory offline".into()));
        }
        self.profiles
            .read()
            .await
            .get(&employee_id)
            .cloned()
            .ok_or(SourceError::NotFound(employee_id))
    }
}
