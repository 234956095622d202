use crate::modules::work_statistics::core::statistics::EmployeeProfile;
use crate::shared::core::primitives::EmployeeId;

pub fn profile(employee_id: EmployeeId) -> EmployeeProfile {
    EmployeeProfile {
        employee_id,
        full_name: "Ada Lovelace".to_string(),
        department: "Engineering".to_string(),
        image_reference: Some("sha256:ada".to_string()),
        expected_start: None,
    }
}
