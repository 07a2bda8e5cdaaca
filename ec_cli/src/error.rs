use thiserror::Error;
pub type Result<T> = std::result::Result<T, ErrorCli>;

#[derive(Error, Debug)]
pub enum ErrorCli {
    #[error(transparent)]
    Core(#[from] ec_core::error::ErrorCore),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Could not connect to server at {0}, is it running?")]
    ConnectionRefused(String),

    #[error("Server answered with status {0}")]
    UnexpectedStatus(u16),

    #[error("I/O error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Please type a scenario first")]
    EmptyScenario,

    #[error("{0}")]
    Generation(String),
}
