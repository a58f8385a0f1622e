#[derive(thiserror::Error, Debug)]
pub enum TokenizerError {
    #[error("Number {0} is out of range (magnitude must be below 1,000,000,000)")]
    NumberOutOfRange(i64),
    #[error("Input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}
