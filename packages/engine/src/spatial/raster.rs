//! Rock path rasterization
//!
//! Only axis-aligned segments are drawable. A diagonal segment is an input
//! error and is reported rather than skipped.

use crate::core::utils::seq::window;
use crate::domain::errors::CaveError;
use crate::domain::geometry::{Point, RockPath, Stamp};

use super::grid::Grid;

/// Every cell between `start` and `end` inclusive, tagged as rock.
/// Symmetric in argument order.
pub fn rasterize_segment(start: Point, end: Point) -> Result<Vec<Stamp>, CaveError> {
    if start.x == end.x {
        let (lo, hi) = ordered(start.y, end.y);
        return Ok((lo..=hi).map(|y| Stamp::rock(Point::new(start.x, y))).collect());
    }

    if start.y == end.y {
        let (lo, hi) = ordered(start.x, end.x);
        return Ok((lo..=hi).map(|x| Stamp::rock(Point::new(x, start.y))).collect());
    }

    Err(CaveError::DiagonalSegment { start, end })
}

/// Each consecutive vertex pair is one segment. A single vertex draws nothing.
pub fn rasterize_path(vertices: &[Point]) -> Result<Vec<Stamp>, CaveError> {
    let mut stamps = Vec::new();
    for pair in window(vertices, 2) {
        stamps.extend(rasterize_segment(pair[0], pair[1])?);
    }
    Ok(stamps)
}

/// Draw all paths into `grid`; returns the number of in-bounds rock stamps.
/// Off-grid stamps are dropped.
pub fn draw_paths(grid: &mut Grid, paths: &[RockPath]) -> Result<usize, CaveError> {
    let mut drawn = 0;
    for path in paths {
        for stamp in rasterize_path(path)? {
            if grid.update_point(stamp) {
                drawn += 1;
            }
        }
    }
    Ok(drawn)
}

#[inline]
fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b { (a, b) } else { (b, a) }
}
