//! Grid - flat row-major storage for cave cells
//!
//! One `Material` per cell in a single contiguous `Vec`, indexed
//! `y * width + (x - origin_x)`. Coordinates come in as `i32` so callers can
//! probe off-grid candidates; `has_point` is the only bounds test.
//!
//! The grid covers columns `origin_x..origin_x + width`. Floored caves move
//! the origin left of zero so the pile under the source always fits.
//!
//! Non-air cells are immutable: `update_point` refuses to overwrite them
//! with a different material.

mod render;

pub use render::GridView;

use crate::domain::geometry::{Point, Stamp};
use crate::domain::materials::{Material, MaterialId};

pub struct Grid {
    origin_x: i32,
    width: u32,
    height: u32,
    size: usize,
    cells: Vec<Material>,
}

impl Grid {
    /// All-air grid
    pub fn new(width: u32, height: u32) -> Self {
        Self::of_size(width, height, |_, _| Material::Air)
    }

    /// Allocate a grid and initialize each cell with `fill(x, y)`
    pub fn of_size(width: u32, height: u32, mut fill: impl FnMut(u32, u32) -> Material) -> Self {
        let size = width as usize * height as usize;
        let mut cells = Vec::with_capacity(size);
        for y in 0..height {
            for x in 0..width {
                cells.push(fill(x, y));
            }
        }

        Self { origin_x: 0, width, height, size, cells }
    }

    /// All-air grid covering columns `origin_x..origin_x + width`
    pub fn with_origin(origin_x: i32, width: u32, height: u32) -> Self {
        Self { origin_x, ..Self::new(width, height) }
    }

    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    /// World x of the first column
    #[inline]
    pub fn origin_x(&self) -> i32 { self.origin_x }

    // === Index conversion (grid-local columns) ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let x = (idx % self.width as usize) as u32;
        let y = (idx / self.width as usize) as u32;
        (x, y)
    }

    // === Bounds checking ===
    #[inline]
    pub fn has_point(&self, x: i32, y: i32) -> bool {
        let col = x as i64 - self.origin_x as i64;
        col >= 0 && col < self.width as i64 && y >= 0 && (y as i64) < self.height as i64
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.has_point(p.x, p.y)
    }

    /// Flat index of world point (x, y), if it is on the grid
    #[inline]
    fn slot(&self, x: i32, y: i32) -> Option<usize> {
        if !self.has_point(x, y) {
            return None;
        }
        let col = (x as i64 - self.origin_x as i64) as u32;
        Some(self.index(col, y as u32))
    }

    // === Cell access ===
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Material> {
        let idx = self.slot(x, y)?;
        Some(*fast!(self.cells, [idx]))
    }

    /// Out-of-bounds cells are never air
    #[inline]
    pub fn is_air(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(Material::is_air)
    }

    /// Write the stamp's material at its coordinates.
    ///
    /// Returns `false` without writing when the point is off-grid or the cell
    /// already holds a different non-air material.
    pub fn update_point(&mut self, stamp: Stamp) -> bool {
        let Stamp { at, material } = stamp;
        let Some(idx) = self.slot(at.x, at.y) else {
            return false;
        };

        let current = self.cells[idx];
        if !current.is_air() && current != material {
            return false;
        }
        self.cells[idx] = material;
        true
    }

    pub fn count(&self, material: Material) -> usize {
        self.cells.iter().filter(|&&c| c == material).count()
    }

    pub fn cells(&self) -> &[Material] {
        &self.cells
    }

    /// Row `y` as a slice
    pub fn row(&self, y: u32) -> &[Material] {
        let start = self.index(0, y);
        &self.cells[start..start + self.width as usize]
    }

    // === Raw pointer for JS interop ===
    pub fn cells_ptr(&self) -> *const MaterialId {
        // `Material` is repr(u8)
        self.cells.as_ptr() as *const MaterialId
    }
}
