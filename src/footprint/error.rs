use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FootprintError {
    #[error("invalid camera geometry: {field} = {value}")]
    InvalidGeometry { field: &'static str, value: f64 },
}
