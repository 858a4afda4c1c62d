use axum::extract::State;

use crate::footprint::compute_grid_cell;
use crate::planner::{plan_path, render_waypoints};
use crate::web::api::error::ApiResult;
use crate::web::server::AppState;

use super::templates::NavigationTemplate;

pub async fn navigation(State(state): State<AppState>) -> ApiResult<NavigationTemplate> {
    let cell = compute_grid_cell(&state.config.camera)?;
    let waypoints = plan_path(&state.config.area, &cell)?;
    Ok(NavigationTemplate {
        navigation: render_waypoints(&waypoints),
        waypoint_count: waypoints.len(),
    })
}
