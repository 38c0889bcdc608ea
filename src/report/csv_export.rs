use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::constants::CSV_DELIMITER;
use crate::errors::Result;
use crate::survey::plan::{Plan, ResultRecord};

/// Writes the header and one row per record. Any existing file is truncated.
pub fn write_records<W: Write>(writer: W, records: &[ResultRecord]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(CSV_DELIMITER)
        .has_headers(true)
        .from_writer(writer);

    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Saves the plan into `directory` under the mode's file name and returns the full path.
pub fn save_plan(directory: &Path, plan: &Plan) -> Result<PathBuf> {
    let path = directory.join(plan.mode.output_file_name());
    let file = File::create(&path)?;
    write_records(file, &plan.records)?;

    info!("Saved {} rows to {}", plan.records.len(), path.display());
    Ok(path)
}
