// src/plan/ready_set.rs

use crate::plan::registry::TopicRegistry;
use crate::types::TopicId;

/// Topics whose prerequisites are all resolved but which are not yet placed
/// in the schedule.
///
/// Extraction picks the highest priority; among equal priorities the topic
/// inserted earliest (of those currently held) wins. A linear scan over an
/// insertion-ordered `Vec` keeps that tie-break exact.
#[derive(Debug)]
pub struct ReadySet<'a> {
    registry: &'a TopicRegistry,
    ready: Vec<TopicId>,
}

impl<'a> ReadySet<'a> {
    pub fn new(registry: &'a TopicRegistry) -> Self {
        Self {
            registry,
            ready: Vec::new(),
        }
    }

    /// Add a topic that has no outstanding prerequisites.
    pub fn insert(&mut self, id: TopicId) {
        debug_assert!(!self.ready.contains(&id), "topic {id} inserted twice");
        self.ready.push(id);
    }

    /// Remove and return the most urgent topic, or `None` when empty.
    pub fn extract_best(&mut self) -> Option<TopicId> {
        let mut best: Option<(usize, u8)> = None;

        for (index, &id) in self.ready.iter().enumerate() {
            let priority = self.priority_of(id);
            // Strictly greater: the earlier entry keeps ties.
            if best.is_none_or(|(_, best_priority)| priority > best_priority) {
                best = Some((index, priority));
            }
        }

        // `Vec::remove` shifts the tail left, preserving insertion order.
        best.map(|(index, _)| self.ready.remove(index))
    }

    pub fn len(&self) -> usize {
        self.ready.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ready.is_empty()
    }

    pub fn contains(&self, id: TopicId) -> bool {
        self.ready.contains(&id)
    }

    fn priority_of(&self, id: TopicId) -> u8 {
        self.registry.get(id).map(|t| t.priority.get()).unwrap_or(0)
    }
}
