use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use utoipa::ToSchema;

use super::error::FootprintError;

/// Camera aperture and flight altitude for a single capture point.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct CameraGeometry {
    /// Vertical half-angle in radians, fed to `2·h·tan(a/2)`.
    pub vertical_half_angle_rad: f64,
    /// Horizontal half-angle in radians.
    pub horizontal_half_angle_rad: f64,
    /// Flight altitude above ground, metres.
    pub altitude_m: f64,
}

impl CameraGeometry {
    pub fn validate(&self) -> Result<(), FootprintError> {
        check_angle("vertical_half_angle_rad", self.vertical_half_angle_rad)?;
        check_angle("horizontal_half_angle_rad", self.horizontal_half_angle_rad)?;
        if !self.altitude_m.is_finite() || self.altitude_m <= 0.0 {
            return Err(FootprintError::InvalidGeometry {
                field: "altitude_m",
                value: self.altitude_m,
            });
        }
        Ok(())
    }
}

fn check_angle(field: &'static str, value: f64) -> Result<(), FootprintError> {
    // tan(a/2) is only positive and finite for a in (0, π)
    if value.is_finite() && value > 0.0 && value < PI {
        Ok(())
    } else {
        Err(FootprintError::InvalidGeometry { field, value })
    }
}

/// Ground area seen by the camera, in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Footprint {
    pub width_m: f64,
    pub length_m: f64,
}

pub fn compute_footprint(camera: &CameraGeometry) -> Result<Footprint, FootprintError> {
    camera.validate()?;

    log::debug!(
        "camera: vertical {} rad, horizontal {} rad, altitude {} m",
        camera.vertical_half_angle_rad,
        camera.horizontal_half_angle_rad,
        camera.altitude_m
    );

    let footprint = Footprint {
        width_m: 2.0 * camera.altitude_m * (camera.vertical_half_angle_rad / 2.0).tan(),
        length_m: 2.0 * camera.altitude_m * (camera.horizontal_half_angle_rad / 2.0).tan(),
    };

    log::debug!(
        "footprint: width {} m, length {} m",
        footprint.width_m,
        footprint.length_m
    );

    Ok(footprint)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(altitude_m: f64) -> CameraGeometry {
        CameraGeometry {
            vertical_half_angle_rad: 0.523599,
            horizontal_half_angle_rad: 1.0472,
            altitude_m,
        }
    }

    #[test]
    fn default_camera_at_100ft() {
        let fp = compute_footprint(&camera(30.48)).unwrap();
        assert!((fp.width_m - 16.33).abs() < 0.01, "width {}", fp.width_m);
        assert!((fp.length_m - 35.18).abs() < 0.05, "length {}", fp.length_m);
    }

    #[test]
    fn footprint_grows_with_altitude() {
        let mut previous = compute_footprint(&camera(1.0)).unwrap();
        for altitude in [2.0, 10.0, 30.48, 120.0, 500.0] {
            let fp = compute_footprint(&camera(altitude)).unwrap();
            assert!(fp.width_m > previous.width_m);
            assert!(fp.length_m > previous.length_m);
            previous = fp;
        }
    }

    #[test]
    fn positive_for_angles_inside_open_interval() {
        for angle in [1e-6, 0.1, 1.0, PI / 2.0, 3.0, PI - 1e-6] {
            let cam = CameraGeometry {
                vertical_half_angle_rad: angle,
                horizontal_half_angle_rad: angle,
                altitude_m: 10.0,
            };
            let fp = compute_footprint(&cam).unwrap();
            assert!(fp.width_m > 0.0 && fp.width_m.is_finite());
            assert!(fp.length_m > 0.0 && fp.length_m.is_finite());
        }
    }

    #[test]
    fn rejects_non_positive_altitude() {
        for altitude in [0.0, -30.48] {
            let err = compute_footprint(&camera(altitude)).unwrap_err();
            assert_eq!(
                err,
                FootprintError::InvalidGeometry {
                    field: "altitude_m",
                    value: altitude
                }
            );
        }
    }

    #[test]
    fn rejects_bad_angles() {
        let mut cam = camera(30.48);
        cam.vertical_half_angle_rad = f64::NAN;
        assert!(matches!(
            cam.validate(),
            Err(FootprintError::InvalidGeometry {
                field: "vertical_half_angle_rad",
                ..
            })
        ));

        let mut cam = camera(30.48);
        cam.horizontal_half_angle_rad = PI;
        assert!(matches!(
            cam.validate(),
            Err(FootprintError::InvalidGeometry {
                field: "horizontal_half_angle_rad",
                ..
            })
        ));

        let mut cam = camera(30.48);
        cam.horizontal_half_angle_rad = 0.0;
        assert!(cam.validate().is_err());
    }

    #[test]
    fn rejects_infinite_altitude() {
        assert!(compute_footprint(&camera(f64::INFINITY)).is_err());
    }
}
