use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A coordinate pair in degrees. X is the longitude-like axis, Y the latitude-like one.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct GeoPoint {
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
}

impl GeoPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Survey area. Expected to satisfy `left_bottom < right_top` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct Rectangle {
    #[serde(rename = "LeftBottom")]
    pub left_bottom: GeoPoint,
    #[serde(rename = "RightTop")]
    pub right_top: GeoPoint,
}

impl Rectangle {
    pub fn new(left_bottom: GeoPoint, right_top: GeoPoint) -> Self {
        Self {
            left_bottom,
            right_top,
        }
    }

    pub fn span_x(&self) -> f64 {
        self.right_top.x - self.left_bottom.x
    }

    pub fn span_y(&self) -> f64 {
        self.right_top.y - self.left_bottom.y
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.left_bottom.x..=self.right_top.x).contains(&point.x)
            && (self.left_bottom.y..=self.right_top.y).contains(&point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_format() {
        let json = r#"{"LeftBottom": {"X":6.54853888889,"Y":46.5196583333},"RightTop":{"X":6.55609166667,"Y":46.5243833333}}"#;
        let rect: Rectangle = serde_json::from_str(json).unwrap();
        assert_eq!(rect.left_bottom, GeoPoint::new(6.54853888889, 46.5196583333));
        assert_eq!(rect.right_top, GeoPoint::new(6.55609166667, 46.5243833333));
    }

    #[test]
    fn contains_is_inclusive() {
        let rect = Rectangle::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(2.0, 1.0));
        assert!(rect.contains(&GeoPoint::new(0.0, 0.0)));
        assert!(rect.contains(&GeoPoint::new(2.0, 1.0)));
        assert!(!rect.contains(&GeoPoint::new(2.1, 0.5)));
        assert!(!rect.contains(&GeoPoint::new(1.0, -0.1)));
    }
}
