// src/plan/packer.rs

use tracing::{debug, warn};

use crate::plan::registry::{Topic, TopicRegistry};
use crate::types::{Hours, TopicId};

/// One day of the plan: a non-empty run of consecutive topics from the
/// schedule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    /// 1-based day number.
    pub number: u32,
    pub topics: Vec<TopicId>,
    /// Sum of the durations of `topics`.
    pub total_hours: u64,
}

impl Day {
    fn open(number: u32) -> Self {
        Self {
            number,
            topics: Vec::new(),
            total_hours: 0,
        }
    }

    /// Whether this day holds more hours than `capacity`.
    ///
    /// Only a day holding a single oversized topic can be over capacity.
    pub fn exceeds(&self, capacity: Hours) -> bool {
        self.total_hours > u64::from(capacity)
    }

    /// Resolve the day's topic ids against `registry`, in assignment order.
    pub fn entries<'r>(&'r self, registry: &'r TopicRegistry) -> impl Iterator<Item = &'r Topic> {
        self.topics.iter().filter_map(move |&id| registry.get(id))
    }
}

/// Greedily split `order` into days of at most `capacity` hours.
///
/// Topics are never reordered or split. A topic that does not fit into the
/// current day starts a new one, and a topic longer than `capacity` gets a day
/// to itself. An empty order produces no days.
pub fn pack_days(order: &[TopicId], registry: &TopicRegistry, capacity: Hours) -> Vec<Day> {
    let capacity_hours = u64::from(capacity);
    let mut days: Vec<Day> = Vec::new();
    let mut current = Day::open(1);

    for &id in order {
        let Some(topic) = registry.get(id) else {
            warn!(topic = id, "scheduled topic missing from registry; skipping");
            continue;
        };
        let duration = u64::from(topic.duration);

        // An empty day always takes the next topic, even an oversized one.
        if !current.topics.is_empty() && current.total_hours + duration > capacity_hours {
            let next = Day::open(current.number + 1);
            let full = std::mem::replace(&mut current, next);
            debug!(day = full.number, hours = full.total_hours, "day closed");
            days.push(full);
        }

        if duration > capacity_hours {
            warn!(
                topic = %topic.name,
                duration = topic.duration,
                capacity,
                day = current.number,
                "topic exceeds daily capacity; placing it alone"
            );
        }

        current.topics.push(id);
        current.total_hours += duration;
    }

    if !current.topics.is_empty() {
        debug!(day = current.number, hours = current.total_hours, "day closed");
        days.push(current);
    }

    days
}
