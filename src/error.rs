use thiserror::Error;

#[derive(Error, Debug)]
pub enum UiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("GUI error: {0}")]
    Gui(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Thread error: {0}")]
    Thread(String),

    #[error("{0}")]
    Other(String),
}

impl From<eframe::Error> for UiError {
    fn from(err: eframe::Error) -> Self {
        UiError::Gui(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UiError>;
