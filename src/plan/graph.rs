// src/plan/graph.rs

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::types::TopicId;

/// Prerequisite graph over dense topic ids.
///
/// For every topic we keep the topics that depend on it (in registration
/// order) and how many prerequisite edges point at it. The graph is sized once
/// for a known topic count and is never resized afterwards.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// `dependents[p]` lists every `d` registered via `add_dependency(p, d)`.
    dependents: Vec<Vec<TopicId>>,
    /// Number of registered prerequisite edges pointing at each topic.
    in_degree: Vec<usize>,
}

impl DependencyGraph {
    /// Create an edgeless graph for `topic_count` topics.
    pub fn new(topic_count: usize) -> Self {
        Self {
            dependents: vec![Vec::new(); topic_count],
            in_degree: vec![0; topic_count],
        }
    }

    /// Record that `dependent` cannot start before `prerequisite` finishes.
    ///
    /// Self-loops and repeated pairs are accepted as-is: a repeated pair counts
    /// once more toward the dependent's in-degree, and a self-loop leaves the
    /// topic permanently blocked.
    ///
    /// # Panics
    ///
    /// Panics if either id is outside `0..topic_count()`. Ids are validated
    /// where dependency pairs enter the program.
    pub fn add_dependency(&mut self, prerequisite: TopicId, dependent: TopicId) {
        self.dependents[prerequisite].push(dependent);
        self.in_degree[dependent] += 1;
        debug!(prerequisite, dependent, "dependency recorded");
    }

    pub fn topic_count(&self) -> usize {
        self.in_degree.len()
    }

    /// Topics that directly depend on `id`, in registration order.
    pub fn dependents_of(&self, id: TopicId) -> &[TopicId] {
        self.dependents
            .get(id)
            .map(|d| d.as_slice())
            .unwrap_or(&[])
    }

    /// Number of prerequisite edges recorded for `id`.
    pub fn in_degree_of(&self, id: TopicId) -> usize {
        self.in_degree.get(id).copied().unwrap_or(0)
    }

    /// Snapshot of all in-degrees, indexed by topic id.
    pub fn in_degrees(&self) -> Vec<usize> {
        self.in_degree.clone()
    }

    /// All recorded `(prerequisite, dependent)` edges, duplicates included.
    pub fn edges(&self) -> impl Iterator<Item = (TopicId, TopicId)> + '_ {
        self.dependents
            .iter()
            .enumerate()
            .flat_map(|(p, ds)| ds.iter().map(move |&d| (p, d)))
    }

    /// Topics that lie on at least one dependency cycle, sorted by id.
    ///
    /// A topic is on a cycle when its strongly connected component has more
    /// than one member, or when it depends on itself.
    pub fn cyclic_topics(&self) -> Vec<TopicId> {
        let mut graph: DiGraphMap<TopicId, ()> = DiGraphMap::new();

        for id in 0..self.topic_count() {
            graph.add_node(id);
        }
        for (p, d) in self.edges() {
            graph.add_edge(p, d, ());
        }

        let mut on_cycle: Vec<TopicId> = tarjan_scc(&graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1 || graph.contains_edge(component[0], component[0])
            })
            .flatten()
            .collect();

        on_cycle.sort_unstable();
        on_cycle
    }
}
