//! JS-facing surface: the `SandCave` class plus the free functions exported
//! from the crate root.

pub use crate::simulation::SandCave;
