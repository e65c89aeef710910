use std::fmt;
use std::ops::Range;

use super::Grid;

/// Text view of a column window of the grid, one line per row.
pub struct GridView<'a> {
    grid: &'a Grid,
    columns: Range<usize>,
}

impl Grid {
    /// View restricted to world columns `columns` (clamped to the grid)
    pub fn view(&self, columns: Range<i32>) -> GridView<'_> {
        let local = |x: i32| (x as i64 - self.origin_x as i64).clamp(0, self.width as i64) as usize;
        let end = local(columns.end);
        let start = local(columns.start).min(end);
        GridView { grid: self, columns: start..end }
    }
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = (self.columns.start, self.columns.end);
        for y in 0..self.grid.height() {
            let line: String = self.grid.row(y)[start..end].iter().map(|m| m.glyph()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = GridView { grid: self, columns: 0..self.width as usize };
        fmt::Display::fmt(&view, f)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::geometry::{Point, Stamp};
    use crate::spatial::grid::Grid;

    #[test]
    fn renders_glyphs_per_row() {
        let mut grid = Grid::new(3, 2);
        grid.update_point(Stamp::rock(Point::new(0, 1)));
        grid.update_point(Stamp::sand(Point::new(2, 0)));
        assert_eq!(grid.to_string(), "..o\n#..\n");
    }

    #[test]
    fn view_clamps_columns() {
        let mut grid = Grid::new(3, 1);
        grid.update_point(Stamp::rock(Point::new(2, 0)));
        assert_eq!(grid.view(1..10).to_string(), ".#\n");
        assert_eq!(grid.view(5..9).to_string(), "\n");
        assert_eq!(grid.view(-4..2).to_string(), "..\n");
    }

    #[test]
    fn view_columns_are_world_coordinates() {
        let mut grid = Grid::with_origin(-2, 4, 1);
        grid.update_point(Stamp::sand(Point::new(-1, 0)));
        assert_eq!(grid.view(-1..1).to_string(), "o.\n");
        assert_eq!(grid.to_string(), ".o..\n");
    }
}
