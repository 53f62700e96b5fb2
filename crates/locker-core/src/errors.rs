/// Core error type for the media locker.
///
/// Adapter crates map their specific errors (sqlx, teloxide) into this type so
/// the dispatcher can turn any failure into a user-facing reply.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("malformed control payload: {0:?}")]
    MalformedControlPayload(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
