use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use super::error::PlanError;
use super::sweep::Sweep;
use super::types::{GeoPoint, Rectangle};
use crate::footprint::{
    compute_footprint, to_grid_cell, CameraGeometry, Footprint, FootprintError, GridCell,
};

#[derive(Debug, Error, PartialEq)]
pub enum SurveyError {
    #[error("{0}")]
    Footprint(#[from] FootprintError),
    #[error("{0}")]
    Plan(#[from] PlanError),
}

/// A planned coverage flight: camera footprint, derived grid and the waypoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Survey {
    pub footprint: Footprint,
    pub grid_cell: GridCell,
    pub columns: usize,
    pub rows: usize,
    pub waypoints: Vec<GeoPoint>,
}

/// Sizes the grid from `camera` and sweeps `area` with it.
pub fn survey(area: &Rectangle, camera: &CameraGeometry) -> Result<Survey, SurveyError> {
    let footprint = compute_footprint(camera)?;
    let grid_cell = to_grid_cell(&footprint);
    let sweep = Sweep::new(area, &grid_cell)?;
    let (columns, rows) = (sweep.columns(), sweep.rows());
    let waypoints: Vec<GeoPoint> = sweep.collect();

    log::info!(
        "Planned {} waypoints ({} columns x {} rows)",
        waypoints.len(),
        columns,
        rows
    );
    let overhang = waypoints.iter().filter(|p| !area.contains(p)).count();
    if overhang > 0 {
        log::debug!("{} waypoints lie past the area edge", overhang);
    }

    Ok(Survey {
        footprint,
        grid_cell,
        columns,
        rows,
        waypoints,
    })
}
