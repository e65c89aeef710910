pub mod errors;
pub mod geometry;
pub mod input;
pub mod materials;
