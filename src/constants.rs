// Program
pub const PROGRAM_NAME: &str = "Pixel Resolution Calculator";
pub const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");

// Camera geometry
pub const MAX_RECOMMENDED_FOV_DEG: f64 = 70.0; // degrees, wider lenses break the nadir model
pub const MAX_FOV_DEG: f64 = 180.0; // degrees, exclusive

// Output files (written to the current working directory, overwritten each run)
pub const FORWARD_OUTPUT_FILE: &str = "PixResolution.csv";
pub const BACKWARD_OUTPUT_FILE: &str = "AGL_Resolution.csv";
pub const CSV_DELIMITER: u8 = b',';

// Console input
pub const LIST_SEPARATOR: char = ',';
pub const DEFAULT_UNITS: &str = "meters";
