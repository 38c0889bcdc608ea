use crate::errors::{ResolutionError, Result};

/// Rejects zero, negative, NaN and infinite values.
pub fn require_positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ResolutionError::InputError(format!(
            "{} must be a positive number, got {}",
            name, value
        )))
    }
}

/// Ground sample distance for a nadir pinhole camera, in the units of `flying_height` per pixel.
pub fn ground_sample_distance(
    flying_height: f64,
    sensor_dim: f64,
    focal_length: f64,
    image_px: f64,
) -> Result<f64> {
    let flying_height = require_positive("flying height", flying_height)?;
    let sensor_dim = require_positive("sensor dimension", sensor_dim)?;
    let focal_length = require_positive("focal length", focal_length)?;
    let image_px = require_positive("image pixel count", image_px)?;

    require_positive(
        "ground sample distance",
        (flying_height * sensor_dim) / (focal_length * image_px),
    )
}

/// Flying height needed to reach `resolution`. Inverse of [`ground_sample_distance`].
pub fn flying_height_for_resolution(
    resolution: f64,
    sensor_dim: f64,
    focal_length: f64,
    image_px: f64,
) -> Result<f64> {
    let resolution = require_positive("resolution", resolution)?;
    let sensor_dim = require_positive("sensor dimension", sensor_dim)?;
    let focal_length = require_positive("focal length", focal_length)?;
    let image_px = require_positive("image pixel count", image_px)?;

    require_positive(
        "flying height",
        (resolution * focal_length * image_px) / sensor_dim,
    )
}

pub fn field_of_view_deg(sensor_dim: f64, focal_length: f64) -> Result<f64> {
    let sensor_dim = require_positive("sensor dimension", sensor_dim)?;
    let focal_length = require_positive("focal length", focal_length)?;

    Ok((2.0 * (sensor_dim / (2.0 * focal_length)).atan()).to_degrees())
}

/// Ratio of ground coverage to flying height for a full field of view angle.
pub fn coverage_ratio_from_fov(fov_deg: f64) -> f64 {
    2.0 * (0.5 * fov_deg).to_radians().tan()
}

pub fn ground_footprint(flying_height: f64, sensor_dim: f64, focal_length: f64) -> Result<f64> {
    let flying_height = require_positive("flying height", flying_height)?;
    let sensor_dim = require_positive("sensor dimension", sensor_dim)?;
    let focal_length = require_positive("focal length", focal_length)?;

    require_positive("ground footprint", flying_height * sensor_dim / focal_length)
}
