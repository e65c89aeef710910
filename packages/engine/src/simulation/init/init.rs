use itertools::{Itertools, MinMaxResult};
use serde::Serialize;
use tracing::debug;

use crate::behaviors::PowderBehavior;
use crate::domain::errors::CaveError;
use crate::domain::geometry::{Point, RockPath};
use crate::grid::Grid;
use crate::raster::draw_paths;

use super::settings::CaveSettings;
use super::Cave;

/// Upper bound on grid cells (one byte each)
pub const MAX_CELLS: u64 = 1 << 28;

/// Extent of the rock paths together with the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaveBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl CaveBounds {
    pub fn from_paths(paths: &[RockPath], source: Point) -> Self {
        let xs = paths.iter().flatten().map(|p| p.x).chain(std::iter::once(source.x));
        let (min_x, max_x) = match xs.minmax() {
            MinMaxResult::MinMax(lo, hi) => (lo, hi),
            MinMaxResult::OneElement(x) => (x, x),
            MinMaxResult::NoElements => (source.x, source.x),
        };
        let max_y = paths.iter().flatten().map(|p| p.y).fold(source.y, i32::max);

        Self { min_x, max_x, max_y }
    }
}

/// Column span `start..end` and row count of a cave grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Extent {
    start: i32,
    end: i32,
    height: i32,
}

impl Extent {
    fn grid(self) -> Result<Grid, CaveError> {
        let width = self.end as i64 - self.start as i64;
        if width < 1 || self.height < 1 || width as u64 * self.height as u64 > MAX_CELLS {
            return Err(CaveError::TooLarge(format!(
                "{}x{} grid at x={} exceeds {} cells",
                width, self.height, self.start, MAX_CELLS
            )));
        }
        Ok(Grid::with_origin(self.start, width as u32, self.height as u32))
    }
}

pub(super) fn create_from_grid(grid: Grid, settings: CaveSettings, floor_y: Option<i32>) -> Cave {
    Cave {
        grid,
        powder: PowderBehavior::new(),
        settings,
        floor_y,
        sand_count: 0,
    }
}

pub(super) fn create_bounded(paths: &[RockPath], settings: CaveSettings) -> Result<Cave, CaveError> {
    settings.validate().map_err(CaveError::InvalidSettings)?;
    let bounds = CaveBounds::from_paths(paths, settings.source);

    // One spare column on each side of the rocks: a grain that gets there has
    // nothing left to land on.
    let extent = Extent {
        start: checked(bounds.min_x.checked_sub(1), "min_x - 1")?.min(0),
        end: checked(bounds.max_x.checked_add(2), "max_x + 2")?,
        height: checked(bounds.max_y.checked_add(1), "max_y + 1")?,
    };

    let mut grid = extent.grid()?;
    let rock_cells = draw_paths(&mut grid, paths)?;
    debug!(?extent, rock_cells, ?bounds, "bounded cave built");

    Ok(create_from_grid(grid, settings, None))
}

pub(super) fn create_floored(paths: &[RockPath], settings: CaveSettings) -> Result<Cave, CaveError> {
    settings.validate().map_err(CaveError::InvalidSettings)?;
    let bounds = CaveBounds::from_paths(paths, settings.source);
    let source = settings.source;

    let floor_y = checked(bounds.max_y.checked_add(settings.floor_gap), "floor row")?;
    // The settled pile is a triangle under the source reaching `floor_y` rows
    // to either side; one more candidate column each way stays on the grid.
    let pile_left = checked(source.x.checked_sub(floor_y).and_then(|x| x.checked_sub(1)), "pile left edge")?;
    let pile_right = checked(source.x.checked_add(floor_y).and_then(|x| x.checked_add(2)), "pile right edge")?;
    let scaled = checked(bounds.max_x.checked_mul(settings.width_factor), "max_x * width_factor")?;
    let rock_right = checked(bounds.max_x.checked_add(1), "max_x + 1")?;

    let extent = Extent {
        start: bounds.min_x.min(pile_left),
        end: scaled.max(pile_right).max(rock_right),
        height: checked(floor_y.checked_add(1), "floor row + 1")?,
    };

    let mut grid = extent.grid()?;
    let floor: RockPath = vec![Point::new(extent.start, floor_y), Point::new(extent.end - 1, floor_y)];
    let rock_cells = draw_paths(&mut grid, paths)? + draw_paths(&mut grid, std::slice::from_ref(&floor))?;
    debug!(?extent, floor_y, rock_cells, ?bounds, "floored cave built");

    Ok(create_from_grid(grid, settings, Some(floor_y)))
}

#[inline]
fn checked(value: Option<i32>, what: &str) -> Result<i32, CaveError> {
    value.ok_or_else(|| CaveError::TooLarge(format!("{} overflows i32", what)))
}
