use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Font error: {0}")]
    Font(#[from] ab_glyph::InvalidFont),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
