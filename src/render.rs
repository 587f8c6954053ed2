// src/render.rs

//! Human-readable plan output.

use std::io::Write;

use crate::errors::Result;
use crate::plan::{Day, TopicRegistry};
use crate::types::Hours;

const HEADER: &str = "=== GENERATED STUDY PLAN ===";
const FOOTER: &str = "============================";

/// Write one block per day, topics in assignment order.
///
/// Nothing is written for an empty plan.
pub fn render_plan<W: Write>(
    out: &mut W,
    days: &[Day],
    registry: &TopicRegistry,
    daily_hours: Hours,
) -> Result<()> {
    if days.is_empty() {
        return Ok(());
    }

    writeln!(out, "{HEADER}")?;

    for (index, day) in days.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }

        if day.exceeds(daily_hours) {
            writeln!(
                out,
                "Day {}: (over daily limit: {}/{} hrs)",
                day.number, day.total_hours, daily_hours
            )?;
        } else {
            writeln!(out, "Day {}:", day.number)?;
        }

        for topic in day.entries(registry) {
            writeln!(
                out,
                "  [ ] Study '{}' ({} hrs) - Priority: {}",
                topic.name, topic.duration, topic.priority
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{FOOTER}")?;
    Ok(())
}

/// Render the plan into a `String`.
pub fn plan_to_string(days: &[Day], registry: &TopicRegistry, daily_hours: Hours) -> Result<String> {
    let mut buf = Vec::new();
    render_plan(&mut buf, days, registry, daily_hours)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
