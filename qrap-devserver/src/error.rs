use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DevServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

pub type DevServerResult<T> = Result<T, DevServerError>;
