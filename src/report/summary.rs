use std::io::{self, Write};

use crate::survey::plan::Plan;

fn format_distance(value: f64, units: &str) -> String {
    if value >= 1000.0 {
        format!("{:.1} {}", value, units)
    } else {
        format!("{:.2} {}", value, units)
    }
}

fn format_resolution(value: f64, units: &str) -> String {
    format!("{:.4} {}/px", value, units)
}

/// Prints the results table and any usability warnings.
pub fn display_plan<W: Write>(out: &mut W, plan: &Plan) -> io::Result<()> {
    let Some(first) = plan.records.first() else {
        return writeln!(out, "No results to display.");
    };
    let units = first.units.as_str();

    writeln!(out, "\n--- Results ({}: {}) ---", plan.mode, first.project)?;
    writeln!(
        out,
        "Field of view: {:.2}° x {:.2}°",
        first.fov_horizontal_deg, first.fov_vertical_deg
    )?;
    for record in &plan.records {
        writeln!(
            out,
            "AGL: {} | Pixel Resolution: {} | Footprint: {} x {}",
            format_distance(record.flying_height, units),
            format_resolution(record.resolution, units),
            format_distance(record.footprint_horizontal, units),
            format_distance(record.footprint_vertical, units),
        )?;
    }

    if !plan.warnings.is_empty() {
        writeln!(out, "\n--- Warnings ---")?;
        for warning in &plan.warnings {
            writeln!(out, "WARNING: {}", warning)?;
        }
    }
    Ok(())
}
