use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibmanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LibmanError>;
