use crate::modules::work_statistics::core::task::TaskRecord;
use crate::tests::fixtures::scans::{EMPLOYEE, at};
use rust_decimal::Decimal;

pub fn task(task_id: &str, estimated: Option<Decimal>, spent: Decimal) -> TaskRecord {
    TaskRecord {
        task_id: task_id.to_string(),
        employee_id: EMPLOYEE,
        estimated_minutes: estimated,
        spent_minutes: spent,
        updated_at: at("2024-02-05 12:00:00"),
    }
}
