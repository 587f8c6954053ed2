// src/types.rs

//! Small shared value types used across the planner.

use std::fmt;

use serde::Deserialize;

/// Dense topic identifier (`0..N-1`), assigned in input order.
pub type TopicId = usize;

/// Study time in whole hours.
pub type Hours = u32;

/// Topic priority in the range `1..=10`; higher means more urgent.
///
/// Deserialisation goes through [`TryFrom<u8>`], so an out-of-range value in a
/// plan file is rejected while the file is being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "u8")]
pub struct Priority(u8);

impl Priority {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Priority(value))
        } else {
            Err(format!(
                "invalid priority: {value} (expected {}..={})",
                Self::MIN,
                Self::MAX
            ))
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
