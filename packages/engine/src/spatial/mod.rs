pub mod grid;
pub mod raster;
