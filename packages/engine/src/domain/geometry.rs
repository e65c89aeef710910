use std::fmt;

use serde::{Deserialize, Serialize};

use super::materials::Material;

/// Integer cave coordinate. Signed so candidates left of or above the grid
/// are representable before the bounds check rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A point tagged with the material to write there
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp {
    pub at: Point,
    pub material: Material,
}

impl Stamp {
    pub const fn new(at: Point, material: Material) -> Self {
        Self { at, material }
    }

    pub const fn rock(at: Point) -> Self {
        Self::new(at, Material::Rock)
    }

    pub const fn sand(at: Point) -> Self {
        Self::new(at, Material::Sand)
    }
}

/// Ordered vertices of one rock formation
pub type RockPath = Vec<Point>;
