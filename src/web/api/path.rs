use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::footprint::CameraGeometry;
use crate::planner::{survey, Rectangle, Survey};
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::server::AppState;

/// Area to cover, in the `LeftBottom`/`RightTop` form, with an optional
/// camera overriding the configured one.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PathRequest {
    #[serde(flatten)]
    pub area: Rectangle,
    #[serde(default)]
    pub camera: Option<CameraGeometry>,
}

#[utoipa::path(
    get,
    path = "/api/path",
    tag = "path",
    responses(
        (status = 200, description = "Coverage path over the configured area", body = Survey),
        (status = 400, description = "Configured camera or area is unusable", body = ErrorResponse)
    )
)]
pub async fn get_default_path(State(state): State<AppState>) -> ApiResult<Json<Survey>> {
    let plan = survey(&state.config.area, &state.config.camera)?;
    Ok(Json(plan))
}

#[utoipa::path(
    post,
    path = "/api/path",
    tag = "path",
    request_body = PathRequest,
    responses(
        (status = 200, description = "Coverage path over the requested area", body = Survey),
        (status = 400, description = "Invalid camera geometry or area", body = ErrorResponse)
    )
)]
pub async fn plan_area(
    State(state): State<AppState>,
    Json(request): Json<PathRequest>,
) -> ApiResult<Json<Survey>> {
    let camera = request.camera.unwrap_or(state.config.camera);
    log::info!("Planning path over {:?}", request.area);
    let plan = survey(&request.area, &camera)?;
    Ok(Json(plan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::GeoPoint;
    use crate::web::api::error::ApiError;
    use crate::web::Config;
    use std::sync::Arc;

    fn state() -> AppState {
        AppState {
            config: Arc::new(Config::default()),
        }
    }

    #[tokio::test]
    async fn default_path_covers_configured_area() {
        let Json(plan) = get_default_path(State(state())).await.unwrap();
        assert_eq!(plan.waypoints.len(), plan.columns * plan.rows);
        assert!(!plan.waypoints.is_empty());
    }

    #[tokio::test]
    async fn request_body_uses_wire_names() {
        let body = r#"{
            "LeftBottom": {"X": 6.5485, "Y": 46.5196},
            "RightTop": {"X": 6.5495, "Y": 46.5206},
            "camera": {"vertical_half_angle_rad": 0.6, "horizontal_half_angle_rad": 0.9, "altitude_m": 50.0}
        }"#;
        let request: PathRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.area.left_bottom, GeoPoint::new(6.5485, 46.5196));
        assert_eq!(request.camera.map(|c| c.altitude_m), Some(50.0));

        let Json(plan) = plan_area(State(state()), Json(request)).await.unwrap();
        assert!(!plan.waypoints.is_empty());
    }

    #[tokio::test]
    async fn camera_defaults_to_config() {
        let request = PathRequest {
            area: Rectangle::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.001, 0.001)),
            camera: None,
        };
        let Json(plan) = plan_area(State(state()), Json(request)).await.unwrap();
        let Json(default) = get_default_path(State(state())).await.unwrap();
        assert_eq!(plan.grid_cell, default.grid_cell);
    }

    #[tokio::test]
    async fn invalid_camera_is_rejected() {
        let request = PathRequest {
            area: Rectangle::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)),
            camera: Some(CameraGeometry {
                vertical_half_angle_rad: 0.5,
                horizontal_half_angle_rad: 1.0,
                altitude_m: 0.0,
            }),
        };
        let err = plan_area(State(state()), Json(request)).await.unwrap_err();
        assert!(matches!(err, ApiError::Footprint(_)));
    }
}
