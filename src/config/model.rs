// src/config/model.rs

use serde::Deserialize;

use crate::plan::{DependencyGraph, TopicRegistry};
use crate::types::{Hours, Priority, TopicId};

/// Plan file exactly as read from TOML, before validation.
///
/// ```toml
/// [plan]
/// daily_hours = 5
///
/// [[topic]]
/// name = "Arrays"
/// duration = 2
/// priority = 5
///
/// [[topic]]
/// name = "Linked Lists"
/// duration = 3
/// priority = 8
///
/// [[dependency]]
/// prerequisite = 0
/// dependent = 1
/// ```
///
/// Topic ids are the zero-based positions of the `[[topic]]` entries.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawPlanFile {
    #[serde(default)]
    pub plan: PlanSection,

    #[serde(default, rename = "topic")]
    pub topics: Vec<TopicConfig>,

    #[serde(default, rename = "dependency")]
    pub dependencies: Vec<DependencyConfig>,
}

/// `[plan]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanSection {
    /// Maximum study hours per day.
    #[serde(default = "default_daily_hours")]
    pub daily_hours: Hours,
}

fn default_daily_hours() -> Hours {
    4
}

impl Default for PlanSection {
    fn default() -> Self {
        Self {
            daily_hours: default_daily_hours(),
        }
    }
}

/// One `[[topic]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TopicConfig {
    pub name: String,
    /// Hours needed; must be > 0.
    pub duration: Hours,
    pub priority: Priority,
}

/// One `[[dependency]]` entry: `prerequisite` must be studied before
/// `dependent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DependencyConfig {
    pub prerequisite: TopicId,
    pub dependent: TopicId,
}

/// Validated plan file.
///
/// Every topic has a non-empty name and a positive duration, `daily_hours` is
/// positive, and every dependency references existing topic ids. Pairs that
/// referenced unknown ids were dropped during validation.
#[derive(Debug, Clone)]
pub struct PlanFile {
    pub plan: PlanSection,
    pub topics: Vec<TopicConfig>,
    pub dependencies: Vec<DependencyConfig>,
    /// Number of dependency pairs discarded for referencing unknown ids.
    pub dropped_dependencies: usize,
}

impl PlanFile {
    pub(crate) fn new_unchecked(
        plan: PlanSection,
        topics: Vec<TopicConfig>,
        dependencies: Vec<DependencyConfig>,
        dropped_dependencies: usize,
    ) -> Self {
        Self {
            plan,
            topics,
            dependencies,
            dropped_dependencies,
        }
    }

    /// Build the topic registry, ids following file order.
    pub fn registry(&self) -> TopicRegistry {
        let mut registry = TopicRegistry::new();
        for topic in &self.topics {
            registry.add(topic.name.clone(), topic.duration, topic.priority);
        }
        registry
    }

    /// Build the dependency graph from the validated pairs.
    pub fn graph(&self) -> DependencyGraph {
        let mut graph = DependencyGraph::new(self.topics.len());
        for dep in &self.dependencies {
            graph.add_dependency(dep.prerequisite, dep.dependent);
        }
        graph
    }
}
