#[derive(Debug, thiserror::Error)]
pub enum BordsbokError {
    #[error("could not read workbook: {0}")]
    InputFormat(String),

    #[error("failed to write xlsx export: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
