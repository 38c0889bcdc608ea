pub mod camera;
pub mod console;
pub mod constants;
pub mod errors;
pub mod geometry;
pub mod report;
pub mod survey;
pub mod utils;

pub use camera::model::{AxisPair, Camera, ImageAxis, UsabilityWarning};
pub use camera::params::{CameraParams, Lens, SensorSize};
pub use console::session::Session;
pub use constants::*;
pub use errors::{ResolutionError, Result};

// Re-export the pure formulas
pub use geometry::resolution::{
    field_of_view_deg, flying_height_for_resolution, ground_footprint, ground_sample_distance,
};

// Re-export commonly used items from survey and report
pub use report::csv_export::{save_plan, write_records};
pub use report::summary::display_plan;
pub use survey::mode::{CalculationMode, FlightParams};
pub use survey::plan::{plan, solve, FlightSolution, Plan, ResultRecord};
