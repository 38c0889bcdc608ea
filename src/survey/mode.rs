use std::fmt;
use std::str::FromStr;

use crate::constants::{BACKWARD_OUTPUT_FILE, FORWARD_OUTPUT_FILE};
use crate::errors::ResolutionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationMode {
    /// Flying heights in, pixel resolutions out.
    Forward,
    /// Target resolutions in, flying heights out.
    Backward,
}

impl CalculationMode {
    pub fn output_file_name(&self) -> &'static str {
        match self {
            CalculationMode::Forward => FORWARD_OUTPUT_FILE,
            CalculationMode::Backward => BACKWARD_OUTPUT_FILE,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CalculationMode::Forward => "forward",
            CalculationMode::Backward => "backward",
        }
    }
}

impl fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CalculationMode {
    type Err = ResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(CalculationMode::Forward),
            "2" => Ok(CalculationMode::Backward),
            other => Err(ResolutionError::InputError(format!(
                "option must be 1 or 2, got '{}'",
                other
            ))),
        }
    }
}

/// Mode-specific flight values: flying heights or target resolutions.
#[derive(Debug, Clone, PartialEq)]
pub enum FlightParams {
    FlyingHeights(Vec<f64>),
    TargetResolutions(Vec<f64>),
}

impl FlightParams {
    pub fn for_mode(mode: CalculationMode, values: Vec<f64>) -> Self {
        match mode {
            CalculationMode::Forward => FlightParams::FlyingHeights(values),
            CalculationMode::Backward => FlightParams::TargetResolutions(values),
        }
    }

    pub fn mode(&self) -> CalculationMode {
        match self {
            FlightParams::FlyingHeights(_) => CalculationMode::Forward,
            FlightParams::TargetResolutions(_) => CalculationMode::Backward,
        }
    }

    pub fn values(&self) -> &[f64] {
        match self {
            FlightParams::FlyingHeights(values) | FlightParams::TargetResolutions(values) => values,
        }
    }
}
