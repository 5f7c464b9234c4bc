use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("No line item at index {0}")]
    UnknownItem(usize),
    #[error("Invalid value {value:?} in field '{field}' of item '{item}'")]
    InvalidField {
        item: String,
        field: &'static str,
        value: String,
    },
    #[error("Cart error: {0}")]
    CartError(String),
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
