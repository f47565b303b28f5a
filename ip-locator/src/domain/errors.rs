use ipgeo_rs::errors::LookupError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Lookup error: {0}")]
    LookupError(#[from] LookupError),
    #[error("Console I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
