use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid bind address: {source}")]
    InvalidBindAddr {
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Environment variable error: {message}")]
    EnvVar { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
