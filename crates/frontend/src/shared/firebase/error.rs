use thiserror::Error;

/// Ошибки обращения к удалённому хранилищу
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("HTTP {status} at {path}")]
    Http { status: u16, path: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode value: {0}")]
    Decode(String),

    #[error("Failed to encode value: {0}")]
    Encode(String),

    /// 401/403: запись или чтение запрещены правилами базы
    #[error("Rejected by database rules at {0}")]
    Rejected(String),

    #[error("Database unavailable: {0}")]
    Unavailable(String),
}
