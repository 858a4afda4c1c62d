use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::footprint::{compute_footprint, to_grid_cell, CameraGeometry, Footprint, GridCell};
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::server::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct FootprintQuery {
    #[serde(default)]
    pub vertical_half_angle_rad: Option<f64>,
    #[serde(default)]
    pub horizontal_half_angle_rad: Option<f64>,
    #[serde(default)]
    pub altitude_m: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FootprintResponse {
    pub camera: CameraGeometry,
    pub footprint: Footprint,
    pub grid_cell: GridCell,
}

#[utoipa::path(
    get,
    path = "/api/footprint",
    tag = "footprint",
    params(
        ("vertical_half_angle_rad" = Option<f64>, Query, description = "Vertical half-angle (radians)"),
        ("horizontal_half_angle_rad" = Option<f64>, Query, description = "Horizontal half-angle (radians)"),
        ("altitude_m" = Option<f64>, Query, description = "Flight altitude (metres)")
    ),
    responses(
        (status = 200, description = "Ground footprint and grid cell", body = FootprintResponse),
        (status = 400, description = "Invalid camera geometry", body = ErrorResponse)
    )
)]
pub async fn get_footprint(
    State(state): State<AppState>,
    Query(query): Query<FootprintQuery>,
) -> ApiResult<Json<FootprintResponse>> {
    let defaults = state.config.camera;
    let camera = CameraGeometry {
        vertical_half_angle_rad: query
            .vertical_half_angle_rad
            .unwrap_or(defaults.vertical_half_angle_rad),
        horizontal_half_angle_rad: query
            .horizontal_half_angle_rad
            .unwrap_or(defaults.horizontal_half_angle_rad),
        altitude_m: query.altitude_m.unwrap_or(defaults.altitude_m),
    };

    let footprint = compute_footprint(&camera)?;

    Ok(Json(FootprintResponse {
        camera,
        footprint,
        grid_cell: to_grid_cell(&footprint),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::api::error::ApiError;
    use crate::web::Config;
    use std::sync::Arc;

    fn state() -> AppState {
        AppState {
            config: Arc::new(Config::default()),
        }
    }

    #[tokio::test]
    async fn empty_query_uses_configured_camera() {
        let Json(response) = get_footprint(State(state()), Query(FootprintQuery::default()))
            .await
            .unwrap();
        assert_eq!(response.camera, Config::default().camera);
        assert!((response.footprint.width_m - 16.33).abs() < 0.01);
    }

    #[tokio::test]
    async fn doubling_altitude_doubles_cell() {
        let low = FootprintQuery {
            altitude_m: Some(30.0),
            ..Default::default()
        };
        let high = FootprintQuery {
            altitude_m: Some(60.0),
            ..Default::default()
        };
        let Json(low) = get_footprint(State(state()), Query(low)).await.unwrap();
        let Json(high) = get_footprint(State(state()), Query(high)).await.unwrap();
        assert!((high.grid_cell.width_deg - 2.0 * low.grid_cell.width_deg).abs() < 1e-12);
        assert!((high.grid_cell.length_deg - 2.0 * low.grid_cell.length_deg).abs() < 1e-12);
    }

    #[tokio::test]
    async fn negative_altitude_is_rejected() {
        let query = FootprintQuery {
            altitude_m: Some(-5.0),
            ..Default::default()
        };
        let err = get_footprint(State(state()), Query(query)).await.unwrap_err();
        assert!(matches!(err, ApiError::Footprint(_)));
    }
}
