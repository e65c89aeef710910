use serde::Serialize;

use crate::domain::geometry::Point;

/// Outcome of one pour
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PourReport {
    /// The reported count: settled grains, plus the terminating grain when
    /// the stop predicate fired.
    pub grains: u32,
    pub last_settled: Option<Point>,
    /// Ended because a grain left the grid
    pub lost: bool,
    pub elapsed_ms: f64,
}

impl PourReport {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub part1: u32,
    pub part2: u32,
}
