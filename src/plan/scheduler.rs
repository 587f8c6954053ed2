// src/plan/scheduler.rs

use tracing::{debug, info, warn};

use crate::errors::{PlannerError, Result};
use crate::plan::graph::DependencyGraph;
use crate::plan::ready_set::ReadySet;
use crate::plan::registry::TopicRegistry;
use crate::types::TopicId;

/// Where a topic is in the ordering run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicState {
    /// At least one prerequisite has not been scheduled yet.
    Blocked,
    /// All prerequisites are scheduled; waiting in the ready set.
    Ready,
    /// Placed in the schedule order.
    Scheduled,
}

/// Priority-guided topological sort over a [`DependencyGraph`].
///
/// This is Kahn's algorithm with the FIFO queue replaced by a [`ReadySet`]:
/// whenever several topics are available, the most urgent one goes next.
///
/// The graph itself is never modified; each [`Scheduler::run`] works on a
/// fresh copy of the in-degrees, so running twice yields the same order.
#[derive(Debug)]
pub struct Scheduler<'a> {
    registry: &'a TopicRegistry,
    graph: &'a DependencyGraph,
    states: Vec<TopicState>,
    /// Prerequisite edges still unresolved in the current run.
    remaining: Vec<usize>,
}

impl<'a> Scheduler<'a> {
    pub fn new(registry: &'a TopicRegistry, graph: &'a DependencyGraph) -> Self {
        if graph.topic_count() != registry.len() {
            warn!(
                topics = registry.len(),
                graph_topics = graph.topic_count(),
                "dependency graph size does not match topic registry"
            );
        }

        Self {
            registry,
            graph,
            states: vec![TopicState::Blocked; registry.len()],
            remaining: vec![0; registry.len()],
        }
    }

    /// State of `id` after the most recent run (all `Blocked` before any run).
    pub fn state_of(&self, id: TopicId) -> Option<TopicState> {
        self.states.get(id).copied()
    }

    /// Produce a full topological order of every registered topic.
    ///
    /// Fails with [`PlannerError::CycleDetected`] when the ready set drains
    /// before every topic has been scheduled.
    pub fn run(&mut self) -> Result<Vec<TopicId>> {
        let registry = self.registry;
        let graph = self.graph;
        let total = registry.len();
        let mut ready = ReadySet::new(registry);
        let mut order: Vec<TopicId> = Vec::with_capacity(total);

        self.reset();

        for id in 0..total {
            if self.remaining[id] == 0 {
                self.mark_ready(id, &mut ready);
            }
        }
        debug!(initial_ready = ready.len(), total, "scheduler: seeded ready set");

        while let Some(id) = ready.extract_best() {
            self.states[id] = TopicState::Scheduled;
            order.push(id);
            debug!(
                topic = %registry.name_of(id),
                position = order.len(),
                "topic scheduled"
            );

            for &dependent in graph.dependents_of(id) {
                let Some(remaining) = self.remaining.get_mut(dependent) else {
                    warn!(dependent, "dependent outside topic registry; ignoring");
                    continue;
                };
                debug_assert!(*remaining > 0, "in-degree of {dependent} would go negative");
                *remaining -= 1;

                if *remaining == 0 && self.states[dependent] == TopicState::Blocked {
                    self.mark_ready(dependent, &mut ready);
                }
            }
        }

        if order.len() != total {
            let cycle: Vec<String> = graph
                .cyclic_topics()
                .into_iter()
                .map(|id| registry.name_of(id).to_string())
                .collect();
            warn!(
                scheduled = order.len(),
                total,
                ?cycle,
                "scheduler: unresolved prerequisites remain"
            );
            return Err(PlannerError::CycleDetected {
                scheduled: order.len(),
                total,
                cycle,
            });
        }

        info!(topics = total, "scheduler: priority order complete");
        Ok(order)
    }

    fn reset(&mut self) {
        for (id, state) in self.states.iter_mut().enumerate() {
            *state = TopicState::Blocked;
            self.remaining[id] = self.graph.in_degree_of(id);
        }
    }

    fn mark_ready(&mut self, id: TopicId, ready: &mut ReadySet<'_>) {
        self.states[id] = TopicState::Ready;
        ready.insert(id);
        debug!(topic = %self.registry.name_of(id), "topic ready");
    }
}

/// Convenience wrapper: build a [`Scheduler`] and run it once.
pub fn priority_order(registry: &TopicRegistry, graph: &DependencyGraph) -> Result<Vec<TopicId>> {
    Scheduler::new(registry, graph).run()
}
