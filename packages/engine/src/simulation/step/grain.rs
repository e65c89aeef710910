//! Per-grain state machine
//!
//! Falling -> Settled(point) | Lost. A grain enters one row above the source,
//! so its first step lands in the source row.

use crate::behaviors::{PowderBehavior, PowderStep};
use crate::domain::geometry::Point;
use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrainOutcome {
    Settled(Point),
    Lost,
}

impl GrainOutcome {
    pub fn point(self) -> Option<Point> {
        match self {
            GrainOutcome::Settled(p) => Some(p),
            GrainOutcome::Lost => None,
        }
    }

    pub fn is_lost(self) -> bool {
        self == GrainOutcome::Lost
    }
}

pub(super) fn next_grain(grid: &Grid, powder: &PowderBehavior, source: Point) -> GrainOutcome {
    let mut current = source.offset(0, -1);

    // Every fall moves one row down, so this ends within `height` steps.
    loop {
        match powder.step(grid, current) {
            PowderStep::Fall(next) => current = next,
            PowderStep::OutOfBounds => return GrainOutcome::Lost,
            // source row fully blocked: the grain has nowhere to be written
            PowderStep::Rest if !grid.contains(current) => return GrainOutcome::Lost,
            PowderStep::Rest => return GrainOutcome::Settled(current),
        }
    }
}
