// src/plan/registry.rs

use crate::types::{Hours, Priority, TopicId};

/// A single unit of study work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: TopicId,
    pub name: String,
    /// Time needed to study the topic, in hours (always > 0).
    pub duration: Hours,
    pub priority: Priority,
}

/// Static table of topics indexed by their dense id.
///
/// Ids are handed out in insertion order, so the registry is always a
/// contiguous `0..len()` range.
#[derive(Debug, Clone, Default)]
pub struct TopicRegistry {
    topics: Vec<Topic>,
}

impl TopicRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a topic and return its id.
    pub fn add(&mut self, name: impl Into<String>, duration: Hours, priority: Priority) -> TopicId {
        let id = self.topics.len();
        self.topics.push(Topic {
            id,
            name: name.into(),
            duration,
            priority,
        });
        id
    }

    pub fn get(&self, id: TopicId) -> Option<&Topic> {
        self.topics.get(id)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Topic> {
        self.topics.iter()
    }

    /// Display name for `id`, or a placeholder for unknown ids.
    pub fn name_of(&self, id: TopicId) -> &str {
        self.get(id).map(|t| t.name.as_str()).unwrap_or("<unknown>")
    }
}
