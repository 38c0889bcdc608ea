use crate::constants::LIST_SEPARATOR;
use crate::errors::{ResolutionError, Result};
use crate::geometry::resolution::require_positive;

pub fn parse_number(name: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    trimmed.parse::<f64>().map_err(|_| {
        ResolutionError::InputError(format!("{} needs to be a number, got '{}'", name, trimmed))
    })
}

pub fn parse_positive(name: &str, text: &str) -> Result<f64> {
    require_positive(name, parse_number(name, text)?)
}

/// Pixel counts are whole numbers greater than zero.
pub fn parse_pixel_count(name: &str, text: &str) -> Result<u32> {
    let trimmed = text.trim();
    match trimmed.parse::<u32>() {
        Ok(0) => Err(ResolutionError::InputError(format!(
            "{} must be greater than zero",
            name
        ))),
        Ok(count) => Ok(count),
        Err(_) => Err(ResolutionError::InputError(format!(
            "{} needs to be a whole positive number, got '{}'",
            name, trimmed
        ))),
    }
}

/// Parses a comma-separated list of positive values. Every entry must be valid.
pub fn parse_positive_list(name: &str, text: &str) -> Result<Vec<f64>> {
    if text.trim().is_empty() {
        return Err(ResolutionError::InputError(format!(
            "at least one {} is required",
            name
        )));
    }

    text.split(LIST_SEPARATOR)
        .map(|item| parse_positive(name, item))
        .collect()
}
