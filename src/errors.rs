use thiserror::Error;

/// Error type covering the failure categories shared by the campus tools.
///
/// Each variant carries a stable, user-renderable message so the CLI layer
/// can report failures without inspecting internals.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Account not found: {0}")]
    AccountNotFound(String),
    #[error("Task not found: {0}")]
    TaskNotFound(u32),
    #[error("Insufficient funds: requested {requested:.2}, available {available:.2}")]
    InsufficientFunds { requested: f64, available: f64 },
    #[error("Division by zero is not allowed")]
    DivisionByZero,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
