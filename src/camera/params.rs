use crate::errors::{ResolutionError, Result};
use crate::geometry::resolution::require_positive;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorSize {
    pub width: f64,  // mm
    pub height: f64, // mm
}

impl SensorSize {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Ok(SensorSize {
            width: require_positive("sensor width", width)?,
            height: require_positive("sensor height", height)?,
        })
    }

    /// Keeps the given width and derives the height from the sensor diagonal.
    pub fn from_width_and_diagonal(width: f64, diagonal: f64) -> Result<Self> {
        let width = require_positive("sensor width", width)?;
        let diagonal = require_positive("sensor diagonal", diagonal)?;
        if diagonal <= width {
            return Err(ResolutionError::InputError(format!(
                "sensor diagonal must exceed the width of {}, got {}",
                width, diagonal
            )));
        }

        SensorSize::new(width, (diagonal * diagonal - width * width).sqrt())
    }

    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }
}

/// How the lens geometry was described.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lens {
    Focal {
        sensor: SensorSize,
        focal_length_mm: f64,
    },
    FieldOfView {
        horizontal_deg: f64,
        vertical_deg: f64,
    },
}

impl Lens {
    pub fn sensor(&self) -> Option<SensorSize> {
        match self {
            Lens::Focal { sensor, .. } => Some(*sensor),
            Lens::FieldOfView { .. } => None,
        }
    }

    pub fn focal_length_mm(&self) -> Option<f64> {
        match self {
            Lens::Focal {
                focal_length_mm, ..
            } => Some(*focal_length_mm),
            Lens::FieldOfView { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraParams {
    pub name: String,
    pub units: String,
    pub image_width_px: u32,
    pub image_height_px: u32,
    pub lens: Lens,
}

impl CameraParams {
    pub fn new(
        name: String,
        units: String,
        image_width_px: u32,
        image_height_px: u32,
        lens: Lens,
    ) -> Self {
        CameraParams {
            name,
            units,
            image_width_px,
            image_height_px,
            lens,
        }
    }
}
