use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("grid cell must be finite and positive (length {length}, width {width})")]
    DegenerateGridCell { length: f64, width: f64 },
    #[error("rectangle bounds must be finite")]
    NonFiniteBounds,
    #[error("sweep would produce {count} waypoints, limit is {limit}")]
    TooManyWaypoints { count: f64, limit: usize },
}
