use thiserror::Error;

use crate::registry::MessageKind;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("unknown message kind '{0}'")]
    UnknownMessageKind(String),
    #[error("invalid argument '{field}' for message kind {kind}")]
    InvalidMessageArgs { kind: MessageKind, field: String },
    #[error("failed to serialize {0}")]
    SerializationFailure(String),
    #[error("invalid chain id '{0}'")]
    InvalidChainId(String),
    #[error("extension option '{0}' is already present in the tx body")]
    ExtensionAlreadyPresent(String),
    #[error("a transaction needs at least one message")]
    EmptyMessages,
    #[error("EIP712 transactions cannot mix message kinds {0} and {1}")]
    MixedMessageKinds(MessageKind, MessageKind),
    #[error("invalid secp256k1 public key")]
    InvalidPublicKey,
}

impl Error {
    pub(crate) fn invalid_arg(kind: MessageKind, field: impl Into<String>) -> Self {
        Error::InvalidMessageArgs {
            kind,
            field: field.into(),
        }
    }
}
