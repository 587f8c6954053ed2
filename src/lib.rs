// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod input;
pub mod logging;
pub mod plan;
pub mod render;
pub mod types;

use std::io::{self, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{PlanFile, RawPlanFile, load_from_path};
use crate::plan::{Day, DependencyGraph, TopicRegistry, pack_days, priority_order};
use crate::types::Hours;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - plan input (file or interactive prompts)
/// - validation
/// - priority ordering + day packing
/// - rendering to stdout
pub fn run(args: CliArgs) -> Result<()> {
    let mut raw = if args.interactive {
        let stdin = io::stdin();
        input::prompt_plan(stdin.lock(), io::stdout())?
    } else {
        load_from_path(&args.plan)?
    };

    if let Some(hours) = args.daily_hours {
        debug!(hours, "overriding [plan].daily_hours from CLI");
        raw.plan.daily_hours = hours;
    }

    let plan = PlanFile::try_from(raw)?;

    if args.dry_run {
        print_dry_run(&plan);
        return Ok(());
    }

    let registry = plan.registry();
    let graph = plan.graph();
    let daily_hours = plan.plan.daily_hours;
    let days = plan_days(&registry, &graph, daily_hours)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out)?;
    render::render_plan(&mut out, &days, &registry, daily_hours)?;
    Ok(())
}

/// Order the topics and pack them into days of at most `daily_hours`.
///
/// A cyclic graph is reported as [`errors::PlannerError::CycleDetected`];
/// the caller decides whether that ends the program.
pub fn plan_days(
    registry: &TopicRegistry,
    graph: &DependencyGraph,
    daily_hours: Hours,
) -> errors::Result<Vec<Day>> {
    let order = priority_order(registry, graph)?;
    let days = pack_days(&order, registry, daily_hours);
    info!(topics = order.len(), days = days.len(), "study plan generated");
    Ok(days)
}

/// Convenience: validate a raw plan and produce its days in one step.
pub fn plan_from_raw(raw: RawPlanFile) -> errors::Result<(TopicRegistry, Vec<Day>)> {
    let plan = PlanFile::try_from(raw)?;
    let registry = plan.registry();
    let days = plan_days(&registry, &plan.graph(), plan.plan.daily_hours)?;
    Ok((registry, days))
}

/// Simple dry-run output: print topics, dependencies and capacity.
fn print_dry_run(plan: &PlanFile) {
    println!("studyplan dry-run");
    println!("  plan.daily_hours = {}", plan.plan.daily_hours);
    println!();

    println!("topics ({}):", plan.topics.len());
    for (id, topic) in plan.topics.iter().enumerate() {
        println!(
            "  [{id}] {} ({} hrs, priority {})",
            topic.name, topic.duration, topic.priority
        );
    }

    if !plan.dependencies.is_empty() {
        println!();
        println!("dependencies ({}):", plan.dependencies.len());
        for dep in &plan.dependencies {
            println!(
                "  {} -> {}",
                plan.topics[dep.prerequisite].name, plan.topics[dep.dependent].name
            );
        }
    }

    if plan.dropped_dependencies > 0 {
        println!();
        println!("  ({} invalid dependency pairs ignored)", plan.dropped_dependencies);
    }

    debug!("dry-run complete (no scheduling)");
}
