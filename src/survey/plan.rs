use log::{debug, warn};
use serde::Serialize;

use crate::camera::model::{AxisPair, Camera, UsabilityWarning};
use crate::camera::params::CameraParams;
use crate::errors::Result;
use crate::survey::mode::{CalculationMode, FlightParams};

/// One computed line of output: the echoed inputs plus the derived flight geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    pub project: String,
    pub units: String,
    pub mode: String,
    pub sensor_width: Option<f64>,
    pub sensor_height: Option<f64>,
    pub focal_length: Option<f64>,
    pub image_width_px: u32,
    pub image_height_px: u32,
    pub fov_horizontal_deg: f64,
    pub fov_vertical_deg: f64,
    pub flying_height: f64,
    pub resolution: f64,
    pub footprint_horizontal: f64,
    pub footprint_vertical: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub mode: CalculationMode,
    pub records: Vec<ResultRecord>,
    pub warnings: Vec<UsabilityWarning>,
}

/// Flight geometry for a single height or target resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSolution {
    pub flying_height: f64,
    pub resolution: f64,
    pub footprint: AxisPair,
}

pub fn solve(camera: &Camera, mode: CalculationMode, value: f64) -> Result<FlightSolution> {
    let (flying_height, resolution) = match mode {
        CalculationMode::Forward => (value, camera.resolution_at(value)?.mean()),
        CalculationMode::Backward => (camera.height_for(value)?, value),
    };
    let footprint = camera.footprint_at(flying_height)?;

    Ok(FlightSolution {
        flying_height,
        resolution,
        footprint,
    })
}

pub fn plan(params: &CameraParams, flight: &FlightParams) -> Result<Plan> {
    let camera = Camera::new(params)?;
    let fov = camera.field_of_view()?;
    let warnings = camera.warnings()?;
    for warning in &warnings {
        warn!("{}", warning);
    }

    let mode = flight.mode();
    let mut values = flight.values().to_vec();
    values.sort_by(f64::total_cmp);

    let mut records = Vec::with_capacity(values.len());
    for value in values {
        let FlightSolution {
            flying_height,
            resolution,
            footprint,
        } = solve(&camera, mode, value)?;
        debug!(
            "{} {}: height {} -> resolution {}",
            mode, value, flying_height, resolution
        );

        records.push(ResultRecord {
            project: params.name.clone(),
            units: params.units.clone(),
            mode: mode.label().to_string(),
            sensor_width: params.lens.sensor().map(|sensor| sensor.width),
            sensor_height: params.lens.sensor().map(|sensor| sensor.height),
            focal_length: params.lens.focal_length_mm(),
            image_width_px: params.image_width_px,
            image_height_px: params.image_height_px,
            fov_horizontal_deg: fov.horizontal,
            fov_vertical_deg: fov.vertical,
            flying_height,
            resolution,
            footprint_horizontal: footprint.horizontal,
            footprint_vertical: footprint.vertical,
        });
    }

    Ok(Plan {
        mode,
        records,
        warnings,
    })
}
