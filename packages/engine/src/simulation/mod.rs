//! Cave - grid ownership and the sand pour
//!
//! The cave owns its grid exclusively; every write is either a rock stamp
//! during construction or a grain settling during a pour.
//!
//! - init/   - bounds, bounded and floored construction, settings
//! - step/   - the per-grain state machine and the pour loop
//! - perf/   - pour timing and reports
//! - facade  - `SandCave`, the JS view of a cave

use crate::behaviors::PowderBehavior;
use crate::domain::errors::CaveError;
use crate::domain::geometry::{Point, RockPath, Stamp};
use crate::domain::input::parse_paths;
use crate::grid::Grid;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/pour_report.rs"]
mod pour_report;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/grain.rs"]
mod grain;
#[path = "step/pour.rs"]
mod pour;
mod facade;

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

pub use facade::SandCave;
pub use grain::GrainOutcome;
pub use init::CaveBounds;
pub use pour::PourPolicy;
pub use pour_report::{Answer, PourReport};
pub use settings::{CaveSettings, DEFAULT_SOURCE};

pub struct Cave {
    grid: Grid,
    powder: PowderBehavior,
    settings: CaveSettings,
    floor_y: Option<i32>,
    sand_count: u32,
}

impl Cave {
    /// Cave sized to the rock paths; grains falling past the lowest rock are lost.
    pub fn bounded(paths: &[RockPath], settings: CaveSettings) -> Result<Self, CaveError> {
        init::create_bounded(paths, settings)
    }

    /// Cave with a flat rock floor under everything, wide enough that no
    /// grain is lost before the source blocks.
    pub fn floored(paths: &[RockPath], settings: CaveSettings) -> Result<Self, CaveError> {
        init::create_floored(paths, settings)
    }

    /// Wrap a prepared grid
    pub fn from_grid(grid: Grid, settings: CaveSettings) -> Self {
        init::create_from_grid(grid, settings, None)
    }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn settings(&self) -> &CaveSettings { &self.settings }

    pub fn source(&self) -> Point { self.settings.source }

    pub fn floor_y(&self) -> Option<i32> { self.floor_y }

    /// Grains settled in this cave so far
    pub fn sand_count(&self) -> u32 { self.sand_count }

    /// Where the next grain would end up, without writing it
    pub fn next_grain(&self) -> GrainOutcome {
        grain::next_grain(&self.grid, &self.powder, self.settings.source)
    }

    /// Drop one grain and commit it if it settles
    pub fn drop_grain(&mut self) -> GrainOutcome {
        let outcome = self.next_grain();
        if let GrainOutcome::Settled(at) = outcome {
            self.settle(at);
        }
        outcome
    }

    pub fn pour(&mut self, policy: PourPolicy) -> PourReport {
        pour::pour(self, policy)
    }

    /// Pour until `until` fires (the firing grain counts) or a grain is lost
    /// (that grain does not count).
    pub fn pour_until<F>(&mut self, until: F) -> PourReport
    where
        F: FnMut(Option<Point>) -> bool,
    {
        pour::pour_until(self, until)
    }

    fn settle(&mut self, at: Point) {
        if self.grid.update_point(Stamp::sand(at)) {
            self.sand_count += 1;
        }
    }
}

/// Parse `input` and run both pours on fresh caves.
pub fn solve(input: &str, settings: CaveSettings) -> Result<Answer, CaveError> {
    let paths = parse_paths(input)?;

    let part1 = Cave::bounded(&paths, settings)?.pour(PourPolicy::Bounded);
    let part2 = Cave::floored(&paths, settings)?.pour(PourPolicy::SourceBlocked);

    Ok(Answer { part1: part1.grains, part2: part2.grains })
}
