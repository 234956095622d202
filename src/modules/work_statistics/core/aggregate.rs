// Pure end to end aggregation for one employee.
//
// Purpose
// - Chain classifier, workday aggregator, task aggregator and assembler over
//   inputs that have already been fetched.
//
// Boundaries
// - No input or output, no clock. Identical inputs give identical output.

use crate::modules::work_statistics::core::classify::classify;
use crate::modules::work_statistics::core::policy::StatisticsPolicy;
use crate::modules::work_statistics::core::range::DateRange;
use crate::modules::work_statistics::core::scan_event::ScanEvent;
use crate::modules::work_statistics::core::statistics::{
    EmployeeProfile, EmployeeTotalStatistics, StatisticsWarning, assemble,
};
use crate::modules::work_statistics::core::task::{TaskRecord, aggregate_tasks};
use crate::modules::work_statistics::core::workday::summarize;
use tracing::debug;

pub fn aggregate_employee_statistics(
    profile: EmployeeProfile,
    range: &DateRange,
    events: &[ScanEvent],
    tasks: &[TaskRecord],
    policy: &StatisticsPolicy,
) -> EmployeeTotalStatistics {
    let offset = policy.utc_offset;
    let (in_range, outside): (Vec<ScanEvent>, Vec<ScanEvent>) = events
        .iter()
        .cloned()
        .partition(|event| range.contains(event.local_day(&offset)));

    let classified = classify(
        profile.employee_id,
        &in_range,
        &offset,
        policy.min_scan_interval,
    );
    let rule = policy.lateness_rule(profile.expected_start);
    let workdays = summarize(&classified, rule.as_ref(), &offset);
    let task_totals = aggregate_tasks(tasks);

    let mut warnings = workdays.warnings;
    if !outside.is_empty() {
        debug!(count = outside.len(), "ignoring swipes outside the requested range");
        warnings.push(StatisticsWarning::EventsOutsideRange {
            count: outside.len(),
        });
    }

    assemble(profile, range, &workdays.summaries, task_totals, warnings)
}

#[cfg(test)]
mod aggregate_employee_statistics_tests {
    use super::*;
    use crate::tests::fixtures::directory::profile;
    use crate::tests::fixtures::scans::{EMPLOYEE, day, scan};
    use crate::tests::fixtures::tasks::task;
    use rstest::{fixture, rstest};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[fixture]
    fn range() -> DateRange {
        DateRange::new(day("2024-02-01"), day("2024-02-07"), 366).unwrap()
    }

    #[fixture]
    fn week_of_swipes() -> Vec<ScanEvent> {
        vec![
            scan("2024-02-01 09:05:00"),
            scan("2024-02-01 18:00:00"),
            scan("2024-02-02 08:58:00"),
            scan("2024-02-02 08:58:30"),
            scan("2024-02-02 17:00:00"),
            scan("2024-02-05 09:30:00"),
            scan("2024-02-06 12:00:00"),
            scan("2024-02-06 09:00:00"),
        ]
    }

    #[rstest]
    fn it_should_aggregate_a_week(range: DateRange, week_of_swipes: Vec<ScanEvent>) {
        let tasks = vec![
            task("t-1", Some(dec!(120)), dec!(150)),
            task("t-2", None, dec!(30)),
            task("t-3", Some(dec!(90)), dec!(60)),
        ];
        let stats = aggregate_employee_statistics(
            profile(EMPLOYEE),
            &range,
            &week_of_swipes,
            &tasks,
            &StatisticsPolicy::default(),
        );

        assert_eq!(stats.total_work_minutes, dec!(1017));
        assert_eq!(stats.total_work_days, 2);
        assert_eq!(stats.late_count, 2);
        assert_eq!(stats.total_late_minutes, dec!(35));
        assert_eq!(stats.total_tasks_without_estimate, 1);
        assert_eq!(stats.total_task_minutes_done, dec!(240));
        assert_eq!(stats.total_task_minutes_needed, dec!(30));
        assert!(matches!(
            stats.warnings.as_slice(),
            [StatisticsWarning::MalformedDay { .. }]
        ));
    }

    #[rstest]
    fn it_should_be_idempotent(range: DateRange, week_of_swipes: Vec<ScanEvent>) {
        let run = || {
            let stats = aggregate_employee_statistics(
                profile(EMPLOYEE),
                &range,
                &week_of_swipes,
                &[task("t-1", Some(dec!(10)), dec!(3.3))],
                &StatisticsPolicy::default(),
            );
            serde_json::to_vec(&stats).unwrap()
        };
        assert_eq!(run(), run());
    }

    #[rstest]
    fn it_should_report_swipes_outside_the_range(range: DateRange) {
        let events = vec![
            scan("2024-01-31 09:00:00"),
            scan("2024-02-01 09:00:00"),
            scan("2024-02-01 17:00:00"),
            scan("2024-02-08 09:00:00"),
        ];
        let stats = aggregate_employee_statistics(
            profile(EMPLOYEE),
            &range,
            &events,
            &[],
            &StatisticsPolicy::default(),
        );
        assert_eq!(stats.total_work_minutes, dec!(480));
        assert_eq!(
            stats.warnings,
            vec![StatisticsWarning::EventsOutsideRange { count: 2 }]
        );
    }

    #[rstest]
    fn it_should_degrade_lateness_without_any_expected_start(
        range: DateRange,
        week_of_swipes: Vec<ScanEvent>,
    ) {
        let policy = StatisticsPolicy {
            expected_start: None,
            ..StatisticsPolicy::default()
        };
        let stats =
            aggregate_employee_statistics(profile(EMPLOYEE), &range, &week_of_swipes, &[], &policy);
        assert_eq!(stats.late_count, 0);
        assert_eq!(stats.total_late_minutes, Decimal::ZERO);
        assert!(stats.warnings.contains(&StatisticsWarning::LatenessNotEvaluated));
    }

    #[rstest]
    fn it_should_return_zeroes_for_an_idle_range(range: DateRange) {
        let stats = aggregate_employee_statistics(
            profile(EMPLOYEE),
            &range,
            &[],
            &[],
            &StatisticsPolicy::default(),
        );
        assert_eq!(stats.total_work_minutes, Decimal::ZERO);
        assert_eq!(stats.total_work_days, 0);
        assert_eq!(stats.late_count, 0);
        assert!(stats.warnings.is_empty());
    }
}
