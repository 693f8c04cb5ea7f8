use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("failed to load config")]
    LoadConfig,
    #[error("invalid input")]
    InvalidInput,
    #[error("failed to build message")]
    BuildMessage,
    #[error("failed to create transaction")]
    CreateTransaction,
    #[error("failed to render output")]
    Output,
}
