use std::fmt::Write;

use super::types::GeoPoint;

/// Renders waypoints in the plain-text transport form `(x, y), (x, y), `.
pub fn render_waypoints(points: &[GeoPoint]) -> String {
    let mut out = String::new();
    for p in points {
        // writing into a String cannot fail
        let _ = write!(out, "({}, {}), ", p.x, p.y);
    }
    out
}
