// src/config/validate.rs

use tracing::warn;

use crate::config::model::{DependencyConfig, PlanFile, RawPlanFile};
use crate::errors::{PlannerError, Result};

impl TryFrom<RawPlanFile> for PlanFile {
    type Error = crate::errors::PlannerError;

    fn try_from(raw: RawPlanFile) -> std::result::Result<Self, Self::Error> {
        validate_plan_section(&raw)?;
        validate_topics(&raw)?;
        let (dependencies, dropped) = filter_dependencies(&raw);
        Ok(PlanFile::new_unchecked(
            raw.plan,
            raw.topics,
            dependencies,
            dropped,
        ))
    }
}

fn validate_plan_section(cfg: &RawPlanFile) -> Result<()> {
    if cfg.plan.daily_hours == 0 {
        return Err(PlannerError::ConfigError(
            "[plan].daily_hours must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_topics(cfg: &RawPlanFile) -> Result<()> {
    // Priority range is enforced by `Priority` during deserialisation.
    for (id, topic) in cfg.topics.iter().enumerate() {
        if topic.name.trim().is_empty() {
            return Err(PlannerError::ConfigError(format!(
                "topic {id} must have a non-empty name"
            )));
        }
        if topic.duration == 0 {
            return Err(PlannerError::ConfigError(format!(
                "topic {id} ('{}') must have a duration >= 1 hour (got 0)",
                topic.name
            )));
        }
    }
    Ok(())
}

/// Keep only pairs whose ids both name an existing topic.
fn filter_dependencies(cfg: &RawPlanFile) -> (Vec<DependencyConfig>, usize) {
    let topic_count = cfg.topics.len();
    let mut kept = Vec::with_capacity(cfg.dependencies.len());
    let mut dropped = 0;

    for dep in &cfg.dependencies {
        if dep.prerequisite < topic_count && dep.dependent < topic_count {
            kept.push(*dep);
        } else {
            warn!(
                prerequisite = dep.prerequisite,
                dependent = dep.dependent,
                topic_count,
                "invalid topic ids in dependency; ignoring"
            );
            dropped += 1;
        }
    }

    (kept, dropped)
}
