// src/input.rs

//! Interactive plan entry.
//!
//! Asks for the same information a plan file holds, in this order: topic
//! count, then name / duration / priority for each topic, then the number of
//! dependency rules and each `ID1 ID2` pair, then the daily hour budget.
//!
//! Answers are whitespace-separated tokens, so several answers may share a
//! line. Prompts go to `out`; nothing is printed to stdout directly, which
//! keeps the flow testable with in-memory readers and writers.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::config::model::{DependencyConfig, PlanSection, RawPlanFile, TopicConfig};
use crate::errors::{PlannerError, Result};
use crate::types::Priority;

/// Whitespace tokenizer over a line-oriented reader.
struct Tokens<R> {
    reader: R,
    /// Remaining tokens of the current line, reversed so `pop` yields the next.
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
        }
    }

    fn next_token(&mut self, what: &str) -> Result<String> {
        loop {
            if let Some(tok) = self.pending.pop() {
                return Ok(tok);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(PlannerError::InvalidInput(format!(
                    "unexpected end of input while reading {what}"
                )));
            }
            self.pending = line.split_whitespace().rev().map(str::to_string).collect();
        }
    }

    fn next_parsed<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let tok = self.next_token(what)?;
        tok.parse::<T>()
            .map_err(|_| PlannerError::InvalidInput(format!("expected {what}, got '{tok}'")))
    }
}

/// Collect a plan interactively from `input`, writing prompts to `out`.
///
/// Dependency pairs that name unknown or negative ids are reported on `out`
/// and skipped. The returned file still has to go through
/// [`crate::config::PlanFile::try_from`] for attribute validation.
pub fn prompt_plan<R: BufRead, W: Write>(input: R, mut out: W) -> Result<RawPlanFile> {
    let mut tokens = Tokens::new(input);

    writeln!(out, "--- Study Planner Input ---")?;
    write!(out, "Enter total number of topics: ")?;
    out.flush()?;
    let topic_count: usize = tokens.next_parsed("a topic count")?;

    // Counts are user-typed; grow as answers arrive instead of reserving.
    let mut topics = Vec::new();
    for id in 0..topic_count {
        writeln!(out, "\nDetails for Topic ID {id}:")?;
        write!(out, "  Name (no spaces, e.g. Arrays): ")?;
        out.flush()?;
        let name = tokens.next_token("a topic name")?;

        write!(out, "  Duration (hours): ")?;
        out.flush()?;
        let duration = tokens.next_parsed("a duration in hours")?;

        write!(out, "  Priority (1-10, 10=Highest): ")?;
        out.flush()?;
        let raw_priority: u8 = tokens.next_parsed("a priority between 1 and 10")?;
        let priority = Priority::try_from(raw_priority).map_err(PlannerError::InvalidInput)?;

        debug!(id, %name, duration, %priority, "topic entered");
        topics.push(TopicConfig {
            name,
            duration,
            priority,
        });
    }

    write!(out, "\nEnter number of dependency rules: ")?;
    out.flush()?;
    let rule_count: usize = tokens.next_parsed("a dependency count")?;

    let mut dependencies = Vec::new();
    if rule_count > 0 {
        writeln!(
            out,
            "Enter dependencies as pairs 'ID1 ID2' (ID1 must be done before ID2):"
        )?;
        for _ in 0..rule_count {
            let prerequisite: i64 = tokens.next_parsed("a prerequisite id")?;
            let dependent: i64 = tokens.next_parsed("a dependent id")?;

            match (checked_id(prerequisite, topic_count), checked_id(dependent, topic_count)) {
                (Some(prerequisite), Some(dependent)) => {
                    dependencies.push(DependencyConfig {
                        prerequisite,
                        dependent,
                    });
                }
                _ => {
                    warn!(prerequisite, dependent, "invalid topic ids in dependency; ignoring");
                    writeln!(
                        out,
                        "  Warning: Invalid IDs {prerequisite} -> {dependent} ignored."
                    )?;
                }
            }
        }
    }

    write!(out, "\nEnter max study hours available per day: ")?;
    out.flush()?;
    let daily_hours = tokens.next_parsed("daily study hours")?;

    Ok(RawPlanFile {
        plan: PlanSection { daily_hours },
        topics,
        dependencies,
    })
}

fn checked_id(raw: i64, topic_count: usize) -> Option<usize> {
    usize::try_from(raw).ok().filter(|&id| id < topic_count)
}
