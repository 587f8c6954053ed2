#![allow(dead_code)]

pub use studyplan_test_utils::builders::PlanBuilder;
pub use studyplan_test_utils::init_tracing;

use studyplan::plan::TopicRegistry;
use studyplan::types::TopicId;

/// Map topic ids to their names, for readable assertions.
pub fn names(registry: &TopicRegistry, ids: &[TopicId]) -> Vec<String> {
    ids.iter()
        .map(|&id| registry.name_of(id).to_string())
        .collect()
}
