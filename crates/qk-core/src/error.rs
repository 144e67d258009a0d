use thiserror::Error;

pub type QkResult<T> = Result<T, QkError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QkError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
