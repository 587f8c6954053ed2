mod common;
use crate::common::{init_tracing, names};

use std::error::Error;
use std::path::PathBuf;

use studyplan::config::load_and_validate;
use studyplan::plan_days;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn data_structures_demo_produces_expected_days() -> TestResult {
    init_tracing();

    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let plan = load_and_validate(manifest.join("demos/data-structures.toml"))?;

    assert_eq!(plan.plan.daily_hours, 5);
    assert_eq!(plan.topics.len(), 6);
    assert_eq!(plan.dependencies.len(), 5);

    let registry = plan.registry();
    let days = plan_days(&registry, &plan.graph(), plan.plan.daily_hours)?;

    let grouped: Vec<Vec<String>> = days.iter().map(|d| names(&registry, &d.topics)).collect();
    assert_eq!(
        grouped,
        vec![
            vec!["Arrays".to_string(), "Sorting".to_string()],
            vec!["LinkedLists".to_string()],
            vec!["Trees".to_string()],
            vec!["Graphs".to_string()],
            vec!["Stacks".to_string()],
        ]
    );

    let over: Vec<u32> = days
        .iter()
        .filter(|d| d.exceeds(plan.plan.daily_hours))
        .map(|d| d.number)
        .collect();
    assert_eq!(over, vec![4]);
    Ok(())
}
