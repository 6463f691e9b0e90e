use bordsbok_core::error::BordsbokError;
use bordsbok_core::model::OutputRow;

pub fn print(rows: &[OutputRow]) -> Result<(), BordsbokError> {
    let json = serde_json::to_string_pretty(rows)?;
    println!("{json}");
    Ok(())
}
