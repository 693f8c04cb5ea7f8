//! Builds BitBadges chain transactions that can be signed either natively, over a protobuf
//! `SignDoc`, or by an Ethereum wallet over EIP712 typed data.
//!
//! Messages are constructed once as an [AnyMsg] and rendered into a [NativeEnvelope] or an
//! [Eip712Envelope] by a [MessageBuilder] bound to one [SchemaVersion]. [create_transaction]
//! produces the signing payloads for a list of messages, and [tx::assemble] packs the signed
//! result into raw transaction bytes.

mod coerce;

pub mod args;
pub mod builder;
pub mod config;
pub mod domain;
pub mod eip712;
pub mod envelope;
pub mod error;
pub mod msgs;
pub mod registry;
pub mod transaction;
pub mod tx;
pub mod types;

pub use builder::MessageBuilder;
pub use domain::{make_domain, ChainId, Domain};
pub use eip712::TypedData;
pub use envelope::{Eip712Envelope, Encoding, MessageEnvelope, NativeEnvelope};
pub use error::Error;
pub use msgs::{AnyMsg, NativeMessage};
pub use registry::{MessageKind, Registry, SchemaVersion};
pub use transaction::{create_transaction, SignPayload, Transaction, TxContext};
pub use tx::Web3Extension;
