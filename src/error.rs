use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error performing IO")]
    Io(#[from] std::io::Error),
    #[error("Error reading image props: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Image props contain neither a fixed nor a fluid image stack")]
    NoImages,
}
