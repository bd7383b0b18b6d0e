//! Defines custom error types for the application.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("output file name is required")]
    OutputPathRequired,

    #[error("no data read from input {0}")]
    EmptyInput(String),

    #[error("heading depth range {min}..={max} is not a valid heading level range (1-6)")]
    InvalidDepthRange { min: u8, max: u8 },
}
