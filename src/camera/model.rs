use std::fmt;

use log::debug;

use crate::camera::params::{CameraParams, Lens};
use crate::constants::{MAX_FOV_DEG, MAX_RECOMMENDED_FOV_DEG};
use crate::errors::{ResolutionError, Result};
use crate::geometry::resolution::{
    coverage_ratio_from_fov, field_of_view_deg, flying_height_for_resolution, ground_footprint,
    ground_sample_distance, require_positive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageAxis {
    Horizontal,
    Vertical,
}

impl fmt::Display for ImageAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageAxis::Horizontal => write!(f, "horizontal"),
            ImageAxis::Vertical => write!(f, "vertical"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UsabilityWarning {
    WideFieldOfView { axis: ImageAxis, fov_deg: f64 },
}

impl fmt::Display for UsabilityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsabilityWarning::WideFieldOfView { axis, fov_deg } => write!(
                f,
                "{} field of view is {:.1}°, above the {:.0}° limit for standard lenses; results are unreliable",
                axis, fov_deg, MAX_RECOMMENDED_FOV_DEG
            ),
        }
    }
}

/// One image axis. For lenses given by angle, `sensor_dim` holds the coverage ratio and
/// `focal_length` is 1.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisGeometry {
    pixels: f64,
    sensor_dim: f64,
    focal_length: f64,
}

impl AxisGeometry {
    fn field_of_view(&self) -> Result<f64> {
        field_of_view_deg(self.sensor_dim, self.focal_length)
    }

    fn resolution_at(&self, flying_height: f64) -> Result<f64> {
        ground_sample_distance(flying_height, self.sensor_dim, self.focal_length, self.pixels)
    }

    fn footprint_at(&self, flying_height: f64) -> Result<f64> {
        ground_footprint(flying_height, self.sensor_dim, self.focal_length)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisPair {
    pub horizontal: f64,
    pub vertical: f64,
}

impl AxisPair {
    pub fn mean(&self) -> f64 {
        self.horizontal / 2.0 + self.vertical / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    horizontal: AxisGeometry,
    vertical: AxisGeometry,
}

impl Camera {
    pub fn new(params: &CameraParams) -> Result<Self> {
        let px_width = require_positive("image width", f64::from(params.image_width_px))?;
        let px_height = require_positive("image height", f64::from(params.image_height_px))?;

        let (horizontal, vertical) = match params.lens {
            Lens::Focal {
                sensor,
                focal_length_mm,
            } => {
                let focal_length = require_positive("focal length", focal_length_mm)?;
                (
                    AxisGeometry {
                        pixels: px_width,
                        sensor_dim: require_positive("sensor width", sensor.width)?,
                        focal_length,
                    },
                    AxisGeometry {
                        pixels: px_height,
                        sensor_dim: require_positive("sensor height", sensor.height)?,
                        focal_length,
                    },
                )
            }
            Lens::FieldOfView {
                horizontal_deg,
                vertical_deg,
            } => (
                AxisGeometry {
                    pixels: px_width,
                    sensor_dim: coverage_ratio_from_fov(Self::check_angle(
                        "horizontal field of view",
                        horizontal_deg,
                    )?),
                    focal_length: 1.0,
                },
                AxisGeometry {
                    pixels: px_height,
                    sensor_dim: coverage_ratio_from_fov(Self::check_angle(
                        "vertical field of view",
                        vertical_deg,
                    )?),
                    focal_length: 1.0,
                },
            ),
        };

        let camera = Camera {
            horizontal,
            vertical,
        };
        debug!("Camera '{}' geometry: {:?}", params.name, camera);
        Ok(camera)
    }

    fn check_angle(name: &str, degrees: f64) -> Result<f64> {
        let degrees = require_positive(name, degrees)?;
        if degrees >= MAX_FOV_DEG {
            return Err(ResolutionError::InputError(format!(
                "{} must be below {}°, got {}",
                name, MAX_FOV_DEG, degrees
            )));
        }
        Ok(degrees)
    }

    /// Horizontal and vertical field of view in degrees.
    pub fn field_of_view(&self) -> Result<AxisPair> {
        Ok(AxisPair {
            horizontal: self.horizontal.field_of_view()?,
            vertical: self.vertical.field_of_view()?,
        })
    }

    pub fn warnings(&self) -> Result<Vec<UsabilityWarning>> {
        let fov = self.field_of_view()?;
        let warnings = [
            (ImageAxis::Horizontal, fov.horizontal),
            (ImageAxis::Vertical, fov.vertical),
        ]
        .into_iter()
        .filter(|(_, fov_deg)| *fov_deg > MAX_RECOMMENDED_FOV_DEG)
        .map(|(axis, fov_deg)| UsabilityWarning::WideFieldOfView { axis, fov_deg })
        .collect();

        Ok(warnings)
    }

    /// Per-axis ground sample distance. The reported resolution is the mean of both axes.
    pub fn resolution_at(&self, flying_height: f64) -> Result<AxisPair> {
        Ok(AxisPair {
            horizontal: self.horizontal.resolution_at(flying_height)?,
            vertical: self.vertical.resolution_at(flying_height)?,
        })
    }

    /// Flying height at which the mean resolution equals `resolution`.
    pub fn height_for(&self, resolution: f64) -> Result<f64> {
        let resolution = require_positive("resolution", resolution)?;
        let per_unit_height = self.resolution_at(1.0)?.mean();
        flying_height_for_resolution(resolution, per_unit_height, 1.0, 1.0)
    }

    pub fn footprint_at(&self, flying_height: f64) -> Result<AxisPair> {
        Ok(AxisPair {
            horizontal: self.horizontal.footprint_at(flying_height)?,
            vertical: self.vertical.footprint_at(flying_height)?,
        })
    }
}
