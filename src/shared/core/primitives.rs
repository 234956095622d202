// Primitive value types shared across the statistics context.
//
// Purpose
// - Give every module the same identifier type and the same rule for turning
//   durations into reportable decimal minutes.
//
// Responsibilities
// - Convert whole milliseconds into minutes exactly once, at a fixed scale.
// - Never go through floating point.

use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

pub type EmployeeId = Uuid;

/// Number of decimal places kept on every minute figure.
pub const MINUTE_SCALE: u32 = 2;

const MILLIS_PER_MINUTE: i64 = 60_000;

pub fn millis_to_minutes(millis: i64) -> Decimal {
    (Decimal::from(millis) / Decimal::from(MILLIS_PER_MINUTE))
        .round_dp_with_strategy(MINUTE_SCALE, RoundingStrategy::MidpointNearestEven)
        .normalize()
}
