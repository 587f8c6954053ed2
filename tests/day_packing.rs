mod common;
use crate::common::{PlanBuilder, init_tracing, names};

use std::error::Error;

use studyplan::plan::pack_days;
use studyplan::plan_days;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn priority_pair_fits_exactly_in_one_day() -> TestResult {
    init_tracing();

    let (registry, graph) = PlanBuilder::new()
        .topic("A", 2, 5)
        .topic("B", 3, 8)
        .build_parts();

    let days = plan_days(&registry, &graph, 5)?;

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].number, 1);
    assert_eq!(names(&registry, &days[0].topics), vec!["B", "A"]);
    assert_eq!(days[0].total_hours, 5);
    assert!(!days[0].exceeds(5));
    Ok(())
}

#[test]
fn chained_topics_share_a_roomy_day() -> TestResult {
    init_tracing();

    let (registry, graph) = PlanBuilder::new()
        .topic("A", 2, 5)
        .topic("B", 3, 5)
        .dependency(0, 1)
        .build_parts();

    let days = plan_days(&registry, &graph, 10)?;

    assert_eq!(days.len(), 1);
    assert_eq!(names(&registry, &days[0].topics), vec!["A", "B"]);
    Ok(())
}

#[test]
fn oversized_single_topic_gets_day_one_alone() -> TestResult {
    init_tracing();

    let (registry, graph) = PlanBuilder::new().topic("A", 8, 1).build_parts();

    let days = plan_days(&registry, &graph, 5)?;

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].number, 1);
    assert_eq!(days[0].topics, vec![0]);
    assert_eq!(days[0].total_hours, 8);
    assert!(days[0].exceeds(5));
    Ok(())
}

#[test]
fn no_topics_no_days() -> TestResult {
    init_tracing();

    let (registry, graph) = PlanBuilder::new().build_parts();

    assert!(plan_days(&registry, &graph, 1)?.is_empty());
    assert!(plan_days(&registry, &graph, 24)?.is_empty());
    Ok(())
}

#[test]
fn overflow_opens_next_day_without_reordering() {
    let registry = PlanBuilder::new()
        .topic("t0", 3, 1)
        .topic("t1", 2, 1)
        .topic("t2", 4, 1)
        .topic("t3", 1, 1)
        .topic("t4", 1, 1)
        .build()
        .registry();

    let order = vec![0, 1, 2, 3, 4];
    let days = pack_days(&order, &registry, 5);

    let grouped: Vec<Vec<usize>> = days.iter().map(|d| d.topics.clone()).collect();
    assert_eq!(grouped, vec![vec![0, 1], vec![2, 3], vec![4]]);

    let numbers: Vec<u32> = days.iter().map(|d| d.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    let hours: Vec<u64> = days.iter().map(|d| d.total_hours).collect();
    assert_eq!(hours, vec![5, 5, 1]);
}

#[test]
fn oversized_topic_in_the_middle_is_isolated() {
    let registry = PlanBuilder::new()
        .topic("small", 2, 1)
        .topic("huge", 8, 1)
        .topic("tiny", 1, 1)
        .build()
        .registry();

    let days = pack_days(&[0, 1, 2], &registry, 5);

    let grouped: Vec<Vec<usize>> = days.iter().map(|d| d.topics.clone()).collect();
    assert_eq!(grouped, vec![vec![0], vec![1], vec![2]]);
    assert!(!days[0].exceeds(5));
    assert!(days[1].exceeds(5));
    assert!(!days[2].exceeds(5));
}

#[test]
fn day_entries_expose_topic_details() {
    let registry = PlanBuilder::new()
        .topic("Arrays", 2, 5)
        .topic("Trees", 3, 8)
        .build()
        .registry();

    let days = pack_days(&[1, 0], &registry, 10);
    let entries: Vec<(String, u32, u8)> = days[0]
        .entries(&registry)
        .map(|t| (t.name.clone(), t.duration, t.priority.get()))
        .collect();

    assert_eq!(
        entries,
        vec![("Trees".to_string(), 3, 8), ("Arrays".to_string(), 2, 5)]
    );
}

#[test]
fn cycle_propagates_through_plan_days() {
    init_tracing();

    let (registry, graph) = PlanBuilder::new()
        .topic("A", 1, 1)
        .topic("B", 1, 1)
        .dependency(0, 1)
        .dependency(1, 0)
        .build_parts();

    let result = plan_days(&registry, &graph, 5);
    assert!(matches!(
        result,
        Err(studyplan::errors::PlannerError::CycleDetected { .. })
    ));
}
