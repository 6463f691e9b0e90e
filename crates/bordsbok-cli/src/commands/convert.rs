use bordsbok_core::error::BordsbokError;
use bordsbok_core::export;
use std::path::PathBuf;

use super::NO_ROWS_HINT;

pub fn run(input_file: PathBuf, output_file: Option<PathBuf>) -> Result<(), BordsbokError> {
    let bytes = std::fs::read(&input_file)?;
    let rows = bordsbok_core::convert_bytes(&bytes)?;

    if rows.is_empty() {
        eprintln!("warning: {NO_ROWS_HINT}");
        return Ok(());
    }

    let path = output_file.unwrap_or_else(|| {
        let today = chrono::Local::now().date_naive();
        PathBuf::from(export::default_output_filename(today.format("%Y-%m-%d")))
    });

    export::save_xlsx(&rows, &path)?;
    eprintln!("Converted {} row(s), written to {}", rows.len(), path.display());

    Ok(())
}
