use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::camera::model::Camera;
use crate::camera::params::{CameraParams, Lens, SensorSize};
use crate::console::prompt::Prompter;
use crate::constants::{DEFAULT_UNITS, PROGRAM_NAME, PROGRAM_VERSION};
use crate::errors::{ResolutionError, Result};
use crate::report::csv_export::save_plan;
use crate::report::summary::display_plan;
use crate::survey::mode::{CalculationMode, FlightParams};
use crate::survey::plan::{plan, solve};
use crate::utils::parse::{parse_number, parse_pixel_count, parse_positive, parse_positive_list};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LensForm {
    SensorAndFocal,
    FieldOfView,
}

fn parse_lens_form(text: &str) -> Result<LensForm> {
    match text.trim() {
        "1" => Ok(LensForm::SensorAndFocal),
        "2" => Ok(LensForm::FieldOfView),
        other => Err(ResolutionError::InputError(format!(
            "option must be 1 or 2, got '{}'",
            other
        ))),
    }
}

/// One interactive run: read inputs, compute, write the CSV, done.
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session {
            prompter: Prompter::new(input, output),
        }
    }

    /// Runs the whole session and returns the path of the written CSV file.
    pub fn run(&mut self, output_dir: &Path) -> Result<PathBuf> {
        self.prompter.say(&format!(
            "\n{}, ver.{}\n",
            PROGRAM_NAME, PROGRAM_VERSION
        ))?;

        let name = self
            .prompter
            .ask_line("Enter a name (camera type) for this calculation: ")?;
        let units = self
            .prompter
            .ask_line("Enter the units for your calculations (feet or meters): ")?;
        let units = if units.trim().is_empty() {
            DEFAULT_UNITS.to_string()
        } else {
            units.trim().to_string()
        };

        let mode = self.ask_mode()?;
        let (params, camera) = self.ask_camera(name.trim().to_string(), units)?;
        let flight = self.ask_flight_values(mode, &params.units, &camera)?;

        let plan = plan(&params, &flight)?;
        display_plan(self.prompter.output(), &plan).map_err(ResolutionError::console)?;

        let path = save_plan(output_dir, &plan)?;
        self.prompter
            .say(&format!("\nSaved to {}", path.display()))?;
        info!("Session finished in {} mode", mode);
        Ok(path)
    }

    fn ask_mode(&mut self) -> Result<CalculationMode> {
        self.prompter.say("What would you like to calculate?")?;
        self.prompter
            .say("Enter 1 for resolution(s) for a given flying height(s)")?;
        self.prompter
            .say("Enter 2 for flying height(s) needed to achieve a specific resolution(s)")?;
        let mode = self
            .prompter
            .ask_until(" Option = ", |s| s.parse::<CalculationMode>())?;
        self.prompter.say("")?;
        Ok(mode)
    }

    fn ask_camera(&mut self, name: String, units: String) -> Result<(CameraParams, Camera)> {
        self.prompter
            .say("Enter the number of pixels on the sensor (take from image dimensions)-")?;
        let image_width_px = self
            .prompter
            .ask_until(" X (horz) pixels: ", |s| parse_pixel_count("X pixels", s))?;
        let image_height_px = self
            .prompter
            .ask_until(" Y (vert) pixels: ", |s| parse_pixel_count("Y pixels", s))?;
        self.prompter.say("")?;

        loop {
            let lens = self.ask_lens()?;
            let params = CameraParams::new(
                name.clone(),
                units.clone(),
                image_width_px,
                image_height_px,
                lens,
            );

            match Camera::new(&params) {
                Ok(camera) => return Ok((params, camera)),
                Err(ResolutionError::InputError(message)) => {
                    self.prompter
                        .say(&format!("***{}, please try again\n", message))?;
                }
                Err(other) => return Err(other),
            }
        }
    }

    fn ask_lens(&mut self) -> Result<Lens> {
        self.prompter.say("How would you like to describe the lens?")?;
        self.prompter
            .say("Enter 1 for sensor size and focal length (mm)")?;
        self.prompter.say("Enter 2 for field of view angles (degrees)")?;
        let form = self.prompter.ask_until(" Option = ", parse_lens_form)?;

        let lens = match form {
            LensForm::SensorAndFocal => {
                let width = self
                    .prompter
                    .ask_until(" Sensor width (mm): ", |s| parse_positive("sensor width", s))?;
                let height = self.prompter.ask_optional(
                    " Sensor height (mm, leave blank to enter the diagonal): ",
                    |s| parse_positive("sensor height", s),
                )?;
                let sensor = match height {
                    Some(height) => SensorSize::new(width, height)?,
                    None => {
                        let sensor = self.prompter.ask_until(" Sensor diagonal (mm): ", |s| {
                            SensorSize::from_width_and_diagonal(
                                width,
                                parse_positive("sensor diagonal", s)?,
                            )
                        })?;
                        self.prompter.say(&format!(
                            " Using sensor {:.2} x {:.2} mm",
                            sensor.width, sensor.height
                        ))?;
                        sensor
                    }
                };
                let focal_length_mm = self
                    .prompter
                    .ask_until(" Focal length (mm): ", |s| parse_positive("focal length", s))?;
                Lens::Focal {
                    sensor,
                    focal_length_mm,
                }
            }
            LensForm::FieldOfView => {
                let horizontal_deg = self
                    .prompter
                    .ask_until(" X (horz) angle: ", |s| parse_number("X angle", s))?;
                let vertical_deg = self
                    .prompter
                    .ask_until(" Y (vert) angle: ", |s| parse_number("Y angle", s))?;
                Lens::FieldOfView {
                    horizontal_deg,
                    vertical_deg,
                }
            }
        };
        self.prompter.say("")?;
        Ok(lens)
    }

    fn ask_flight_values(
        &mut self,
        mode: CalculationMode,
        units: &str,
        camera: &Camera,
    ) -> Result<FlightParams> {
        let (intro, prompt, name) = match mode {
            CalculationMode::Forward => (
                "Enter a list of flying height(s) above ground level (AGL) to calculate".to_string(),
                " AGL = ",
                "AGL value",
            ),
            CalculationMode::Backward => (
                format!("Enter the required resolution(s) in {}", units),
                " Resolution(s): ",
                "resolution",
            ),
        };
        self.prompter.say(&intro)?;
        self.prompter
            .say("separate multiple entries with commas(,)")?;

        // Values the camera cannot turn into finite geometry are re-prompted here
        let values = self.prompter.ask_until(prompt, |s| {
            let values = parse_positive_list(name, s)?;
            for value in &values {
                solve(camera, mode, *value)?;
            }
            Ok(values)
        })?;
        Ok(FlightParams::for_mode(mode, values))
    }
}
