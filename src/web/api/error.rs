use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::footprint::FootprintError;
use crate::planner::{PlanError, SurveyError};

#[derive(Debug)]
pub enum ApiError {
    Footprint(FootprintError),
    Plan(PlanError),
}

impl From<FootprintError> for ApiError {
    fn from(e: FootprintError) -> Self {
        ApiError::Footprint(e)
    }
}

impl From<PlanError> for ApiError {
    fn from(e: PlanError) -> Self {
        ApiError::Plan(e)
    }
}

impl From<SurveyError> for ApiError {
    fn from(e: SurveyError) -> Self {
        match e {
            SurveyError::Footprint(e) => ApiError::Footprint(e),
            SurveyError::Plan(e) => ApiError::Plan(e),
        }
    }
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::Footprint(FootprintError::InvalidGeometry { .. }) => "invalid_geometry",
            ApiError::Plan(PlanError::DegenerateGridCell { .. }) => "degenerate_grid_cell",
            ApiError::Plan(PlanError::NonFiniteBounds) => "non_finite_bounds",
            ApiError::Plan(PlanError::TooManyWaypoints { .. }) => "too_many_waypoints",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Footprint(e) => e.to_string(),
            ApiError::Plan(e) => e.to_string(),
        };
        log::warn!("Rejecting request: {}", message);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::with_message(self.code(), &message)),
        )
            .into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn with_message(error: &str, message: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: Some(message.to_string()),
        }
    }
}
