// src/plan/mod.rs

//! Topic ordering and day packing.
//!
//! - [`registry`] holds the static table of topics.
//! - [`graph`] records prerequisite edges and in-degrees.
//! - [`ready_set`] is the priority-ordered pool of schedulable topics.
//! - [`scheduler`] runs the priority-guided topological sort.
//! - [`packer`] splits the resulting order into capacity-bounded days.

pub mod graph;
pub mod packer;
pub mod ready_set;
pub mod registry;
pub mod scheduler;

pub use graph::DependencyGraph;
pub use packer::{Day, pack_days};
pub use ready_set::ReadySet;
pub use registry::{Topic, TopicRegistry};
pub use scheduler::{Scheduler, TopicState, priority_order};
