use bordsbok_core::error::BordsbokError;
use std::path::PathBuf;

use super::NO_ROWS_HINT;
use crate::output;

pub fn run(input_file: PathBuf, output_format: &str, limit: usize) -> Result<(), BordsbokError> {
    let bytes = std::fs::read(&input_file)?;
    let rows = bordsbok_core::convert_bytes(&bytes)?;

    match output_format {
        "json" => output::json::print(&rows)?,
        _ => {
            if rows.is_empty() {
                eprintln!("warning: {NO_ROWS_HINT}");
                return Ok(());
            }
            output::table::print(&rows, limit);
        }
    }

    Ok(())
}
