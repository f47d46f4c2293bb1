use thiserror::Error;

/// Order-path failures. Every variant maps to a localized user-facing reply
/// in `replies`; none of them ever escapes to the webhook transport.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("order command has no parseable quantity")]
    Format,
    #[error("no product matches the requested name")]
    ProductNotFound,
    #[error("insufficient stock: {available} available")]
    InsufficientStock { available: i64 },
}
