//! PowderBehavior - how a falling grain picks its next cell
//!
//! Three candidates, always in the same order: straight down, down-left,
//! down-right. The first air cell wins. If any candidate is off the grid the
//! grain can no longer be tracked and is reported out of bounds, even when
//! an in-bounds candidate is free.

use crate::domain::geometry::Point;
use crate::grid::Grid;

/// Candidate offsets in priority order
pub const FALL_ORDER: [(i32, i32); 3] = [(0, 1), (-1, 1), (1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowderStep {
    Fall(Point),
    Rest,
    OutOfBounds,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn candidates(from: Point) -> [Point; 3] {
        FALL_ORDER.map(|(dx, dy)| from.offset(dx, dy))
    }

    pub fn step(&self, grid: &Grid, from: Point) -> PowderStep {
        let candidates = Self::candidates(from);

        if candidates.iter().any(|p| !grid.contains(*p)) {
            return PowderStep::OutOfBounds;
        }

        match candidates.into_iter().find(|p| grid.is_air(p.x, p.y)) {
            Some(next) => PowderStep::Fall(next),
            None => PowderStep::Rest,
        }
    }
}
