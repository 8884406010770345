use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("quantity overflow for {item}: {current} + {delta}")]
    Overflow { item: String, current: i64, delta: i64 },
}
