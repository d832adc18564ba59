use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixelateError {
    #[error("Usage error: {0}")]
    UsageError(String),

    #[error("Input file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read input file: {0}")]
    ReadError(String),

    #[error("Malformed PPM header: {0}")]
    MalformedHeader(String),

    #[error("Malformed PPM pixel data: {0}")]
    MalformedData(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Failed to write output file: {0}")]
    WriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PixelateError>;
