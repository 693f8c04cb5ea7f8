//! Logical messages, one type per [MessageKind].
//!
//! Every message knows how to read itself from [Args], how to map to and from its protobuf
//! type, and which EIP712 fields it produces. [AnyMsg] and [NativeMessage] erase the concrete
//! type so messages of any kind can travel through the builder and the transaction assembler.

use error_stack::{report, Result, ResultExt};
use prost::Message;

use crate::args::{Arg, Args};
use crate::error::Error;
use crate::registry::MessageKind;

pub mod badges;
pub mod bank;
pub mod gov;
pub mod wasmx;

pub use badges::{
    DeleteCollection, PruneBalances, RegisterAddresses, RequestTransferManager,
    SelfDestructBadge, TransferManager, UpdateBytes, UpdatePermissions,
};
pub use bank::{Coin, MsgSend};
pub use gov::MsgVote;
pub use wasmx::MsgExecuteContractCompat;

pub trait Msg: Sized {
    const KIND: MessageKind;

    type Proto: Message + Default + Clone + PartialEq;

    /// Reads the message from caller supplied arguments.
    fn from_args(args: &mut Args) -> Result<Self, Error>;

    fn to_proto(&self) -> Self::Proto;

    fn from_proto(proto: Self::Proto) -> Result<Self, Error>;

    /// The `value` fields of the EIP712 envelope, named and ordered like the registered schema.
    fn eip712_fields(&self) -> Vec<(&'static str, Arg)>;

    /// Reads the message back from decoded EIP712 fields. Kinds whose EIP712 field names match
    /// their argument names can rely on the default.
    fn from_eip712_fields(fields: &mut Args) -> Result<Self, Error> {
        Self::from_args(fields)
    }
}

macro_rules! messages {
    ($($kind:ident => $msg:ty),+ $(,)?) => {
        /// A logical message of any kind.
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub enum AnyMsg {
            $($kind($msg),)+
        }

        /// The protobuf form of a message of any kind.
        #[derive(Clone, Debug, PartialEq)]
        pub enum NativeMessage {
            $($kind(<$msg as Msg>::Proto),)+
        }

        $(
            impl From<$msg> for AnyMsg {
                fn from(msg: $msg) -> Self {
                    AnyMsg::$kind(msg)
                }
            }
        )+

        impl AnyMsg {
            /// Reads a message of the given kind from a JSON object of arguments. Missing,
            /// mistyped and unexpected fields are all rejected.
            pub fn from_args(kind: MessageKind, args: serde_json::Value) -> Result<Self, Error> {
                let mut args = Args::from_json(kind, args)?;
                let msg = match kind {
                    $(MessageKind::$kind => AnyMsg::$kind(<$msg>::from_args(&mut args)?),)+
                };
                args.finish()?;

                Ok(msg)
            }

            pub(crate) fn from_eip712_fields(mut fields: Args) -> Result<Self, Error> {
                let msg = match fields.kind() {
                    $(MessageKind::$kind => AnyMsg::$kind(<$msg>::from_eip712_fields(&mut fields)?),)+
                };
                fields.finish()?;

                Ok(msg)
            }

            pub fn from_native(native: NativeMessage) -> Result<Self, Error> {
                match native {
                    $(NativeMessage::$kind(proto) => <$msg>::from_proto(proto).map(AnyMsg::$kind),)+
                }
            }

            pub fn kind(&self) -> MessageKind {
                match self {
                    $(AnyMsg::$kind(_) => MessageKind::$kind,)+
                }
            }

            pub fn to_native(&self) -> NativeMessage {
                match self {
                    $(AnyMsg::$kind(msg) => NativeMessage::$kind(msg.to_proto()),)+
                }
            }

            pub(crate) fn eip712_fields(&self) -> Vec<(&'static str, Arg)> {
                match self {
                    $(AnyMsg::$kind(msg) => msg.eip712_fields(),)+
                }
            }
        }

        impl NativeMessage {
            pub fn kind(&self) -> MessageKind {
                match self {
                    $(NativeMessage::$kind(_) => MessageKind::$kind,)+
                }
            }

            pub fn encode_to_vec(&self) -> Vec<u8> {
                match self {
                    $(NativeMessage::$kind(proto) => proto.encode_to_vec(),)+
                }
            }

            pub fn decode(kind: MessageKind, bytes: &[u8]) -> Result<Self, Error> {
                match kind {
                    $(MessageKind::$kind => <<$msg as Msg>::Proto>::decode(bytes)
                        .map(NativeMessage::$kind)
                        .map_err(|err| report!(err))
                        .change_context(Error::SerializationFailure(kind.to_string())),)+
                }
            }
        }
    };
}

messages! {
    DeleteCollection => DeleteCollection,
    PruneBalances => PruneBalances,
    RegisterAddresses => RegisterAddresses,
    RequestTransferManager => RequestTransferManager,
    SelfDestructBadge => SelfDestructBadge,
    TransferManager => TransferManager,
    UpdateBytes => UpdateBytes,
    UpdatePermissions => UpdatePermissions,
    MsgSend => MsgSend,
    MsgVote => MsgVote,
    MsgExecuteContractCompat => MsgExecuteContractCompat,
}
