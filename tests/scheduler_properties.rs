use proptest::prelude::*;
use studyplan::errors::PlannerError;
use studyplan::plan::{DependencyGraph, TopicRegistry, pack_days, priority_order};
use studyplan::types::{Priority, TopicId};

/// Topics as `(duration, priority)` plus raw edge endpoints.
type PlanShape = (Vec<(u32, u8)>, Vec<(usize, usize)>);

// Acyclic by construction: every edge points from a lower id to a higher one.
fn dag_strategy(max_topics: usize) -> impl Strategy<Value = PlanShape> {
    (1..=max_topics).prop_flat_map(|n| {
        let topics = proptest::collection::vec((1u32..=8, 1u8..=10), n);
        let edges = proptest::collection::vec((0..n, 0..n), 0..(2 * n));
        (topics, edges).prop_map(|(topics, raw_edges)| {
            let edges = raw_edges
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| (a.min(b), a.max(b)))
                .collect();
            (topics, edges)
        })
    })
}

fn build(topics: &[(u32, u8)], edges: &[(usize, usize)]) -> (TopicRegistry, DependencyGraph) {
    let mut registry = TopicRegistry::new();
    for (i, &(duration, priority)) in topics.iter().enumerate() {
        let priority = Priority::try_from(priority).unwrap();
        registry.add(format!("topic_{i}"), duration, priority);
    }

    let mut graph = DependencyGraph::new(topics.len());
    for &(p, d) in edges {
        graph.add_dependency(p, d);
    }
    (registry, graph)
}

fn position(order: &[TopicId]) -> Vec<usize> {
    let mut pos = vec![usize::MAX; order.len()];
    for (i, &id) in order.iter().enumerate() {
        pos[id] = i;
    }
    pos
}

proptest! {
    #[test]
    fn order_is_a_topological_permutation((topics, edges) in dag_strategy(12)) {
        let (registry, graph) = build(&topics, &edges);
        let order = priority_order(&registry, &graph).unwrap();

        let mut sorted = order.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..topics.len()).collect::<Vec<_>>());

        let pos = position(&order);
        for &(p, d) in &edges {
            prop_assert!(pos[p] < pos[d], "edge {} -> {} violated in {:?}", p, d, order);
        }
    }

    #[test]
    fn scheduling_is_deterministic((topics, edges) in dag_strategy(12)) {
        let (registry, graph) = build(&topics, &edges);
        let first = priority_order(&registry, &graph).unwrap();
        let second = priority_order(&registry, &graph).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn without_edges_order_is_stable_priority_sort(
        topics in proptest::collection::vec((1u32..=8, 1u8..=10), 0..12)
    ) {
        let (registry, graph) = build(&topics, &[]);
        let order = priority_order(&registry, &graph).unwrap();

        // Everything is ready up front, so the order is a stable sort by
        // descending priority.
        let mut expected: Vec<TopicId> = (0..topics.len()).collect();
        expected.sort_by_key(|&id| std::cmp::Reverse(topics[id].1));
        prop_assert_eq!(order, expected);
    }

    #[test]
    fn injected_cycle_is_always_reported(
        (topics, edges) in dag_strategy(12),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        prop_assume!(topics.len() >= 2);
        let x = a.index(topics.len());
        let y = b.index(topics.len());
        prop_assume!(x != y);

        let mut edges = edges;
        edges.push((x, y));
        edges.push((y, x));
        let (registry, graph) = build(&topics, &edges);

        match priority_order(&registry, &graph) {
            Err(PlannerError::CycleDetected { scheduled, total, cycle }) => {
                prop_assert!(scheduled < total);
                prop_assert_eq!(total, topics.len());
                let topic_x = format!("topic_{x}");
                let topic_y = format!("topic_{y}");
                prop_assert!(cycle.contains(&topic_x));
                prop_assert!(cycle.contains(&topic_y));
            }
            other => prop_assert!(false, "expected CycleDetected, got {:?}", other),
        }
    }

    #[test]
    fn packing_preserves_order_and_respects_capacity(
        (topics, edges) in dag_strategy(12),
        capacity in 1u32..=10,
    ) {
        let (registry, graph) = build(&topics, &edges);
        let order = priority_order(&registry, &graph).unwrap();
        let days = pack_days(&order, &registry, capacity);

        let flattened: Vec<TopicId> = days.iter().flat_map(|d| d.topics.iter().copied()).collect();
        prop_assert_eq!(&flattened, &order);

        for (i, day) in days.iter().enumerate() {
            prop_assert_eq!(day.number as usize, i + 1);
            prop_assert!(!day.topics.is_empty());

            let sum: u64 = day.topics.iter().map(|&id| u64::from(topics[id].0)).sum();
            prop_assert_eq!(sum, day.total_hours);

            if day.exceeds(capacity) {
                prop_assert_eq!(day.topics.len(), 1);
            }
        }

        // Greedy: the first topic of each later day did not fit the day before.
        for pair in days.windows(2) {
            let first_next = pair[1].topics[0];
            let would_be = pair[0].total_hours + u64::from(topics[first_next].0);
            prop_assert!(would_be > u64::from(capacity));
        }
    }
}
