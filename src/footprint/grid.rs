use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::camera::{compute_footprint, CameraGeometry, Footprint};
use super::error::FootprintError;

/// Degrees of latitude per 10 m of ground distance.
///
/// Together with [`LON_DEG_PER_10M`] this is only accurate near
/// [`REFERENCE_LATITUDE_DEG`]; no geodesic correction is applied.
pub const LAT_DEG_PER_10M: f64 = 0.0000904;

/// Degrees of longitude per 10 m of ground distance at the reference latitude.
pub const LON_DEG_PER_10M: f64 = 0.0000898;

/// Latitude at which the two conversion factors were derived.
pub const REFERENCE_LATITUDE_DEG: f64 = 33.1519;

/// Sweep step size in geographic degrees.
///
/// `length_deg` is the step along X (longitude), `width_deg` along Y (latitude).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct GridCell {
    pub length_deg: f64,
    pub width_deg: f64,
}

pub fn to_grid_cell(footprint: &Footprint) -> GridCell {
    GridCell {
        width_deg: (LAT_DEG_PER_10M * footprint.width_m) / 10.0,
        length_deg: (LON_DEG_PER_10M * footprint.length_m) / 10.0,
    }
}

pub fn compute_grid_cell(camera: &CameraGeometry) -> Result<GridCell, FootprintError> {
    let footprint = compute_footprint(camera)?;
    let cell = to_grid_cell(&footprint);
    log::debug!(
        "grid cell: width {} deg, length {} deg (reference latitude {} deg)",
        cell.width_deg,
        cell.length_deg,
        REFERENCE_LATITUDE_DEG
    );
    Ok(cell)
}
