#![allow(dead_code)]

use studyplan::config::{DependencyConfig, PlanFile, PlanSection, RawPlanFile, TopicConfig};
use studyplan::plan::{DependencyGraph, TopicRegistry};
use studyplan::types::{Hours, Priority, TopicId};

/// Builder for plan inputs to simplify test setup.
///
/// Topics get ids in the order they are added. Dependencies are recorded as
/// given, without range checks, so tests can also feed invalid pairs through
/// validation.
pub struct PlanBuilder {
    raw: RawPlanFile,
}

impl PlanBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawPlanFile {
                plan: PlanSection::default(),
                topics: Vec::new(),
                dependencies: Vec::new(),
            },
        }
    }

    pub fn daily_hours(mut self, hours: Hours) -> Self {
        self.raw.plan.daily_hours = hours;
        self
    }

    /// Add a topic; `priority` must be in `1..=10`.
    pub fn topic(mut self, name: &str, duration: Hours, priority: u8) -> Self {
        self.raw.topics.push(TopicConfig {
            name: name.to_string(),
            duration,
            priority: Priority::try_from(priority).expect("test priority out of range"),
        });
        self
    }

    /// `prerequisite` must be studied before `dependent`.
    pub fn dependency(mut self, prerequisite: TopicId, dependent: TopicId) -> Self {
        self.raw.dependencies.push(DependencyConfig {
            prerequisite,
            dependent,
        });
        self
    }

    pub fn raw(self) -> RawPlanFile {
        self.raw
    }

    pub fn build(self) -> PlanFile {
        PlanFile::try_from(self.raw).expect("Failed to build valid plan from builder")
    }

    /// Registry and graph for the validated plan.
    pub fn build_parts(self) -> (TopicRegistry, DependencyGraph) {
        let plan = self.build();
        (plan.registry(), plan.graph())
    }
}

impl Default for PlanBuilder {
    fn default() -> Self {
        Self::new()
    }
}
