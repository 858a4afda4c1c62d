mod camera;
mod error;
mod grid;

pub use camera::{compute_footprint, CameraGeometry, Footprint};
pub use error::FootprintError;
pub use grid::{compute_grid_cell, to_grid_cell, GridCell};
