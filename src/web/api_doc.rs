use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use super::api::footprint::{FootprintQuery, FootprintResponse};
use super::api::path::PathRequest;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::path::get_default_path,
        super::api::path::plan_area,
        super::api::footprint::get_footprint,
    ),
    components(
        schemas(
            PathRequest,
            FootprintQuery,
            FootprintResponse,
            ErrorResponse,
            crate::planner::Survey,
            crate::planner::GeoPoint,
            crate::planner::Rectangle,
            crate::footprint::CameraGeometry,
            crate::footprint::Footprint,
            crate::footprint::GridCell,
        )
    ),
    info(
        title = "Sweep-O-Mat Coverage API",
        description = "Lawn-mower coverage paths for aerial camera surveys",
        version = "0.1.0"
    ),
    tags(
        (name = "path", description = "Serpentine coverage path planning"),
        (name = "footprint", description = "Camera ground footprint")
    )
)]
pub struct ApiDoc;
