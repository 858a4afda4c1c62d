mod error;
mod render;
mod survey;
mod sweep;
mod types;

pub use error::PlanError;
pub use render::render_waypoints;
pub use survey::{survey, Survey, SurveyError};
pub use sweep::plan_path;
pub use types::{GeoPoint, Rectangle};
