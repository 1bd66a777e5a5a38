use serde_json::Value;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input that the boundary normalization could not repair, carrying the
    /// offending record so callers can surface it.
    #[error("invalid input record: {message}")]
    InvalidInput { message: String, record: Value },
}
