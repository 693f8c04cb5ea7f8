use bitbadges_proto::bitbadgeschain::wasmx as proto;
use error_stack::Result;

use crate::args::{Arg, Args};
use crate::error::Error;
use crate::msgs::Msg;
use crate::registry::MessageKind;

/// Executes a CosmWasm contract. `msg` is the JSON execute message and `funds` a coin list such
/// as `5ubadge,1uatom`, both passed through as strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgExecuteContractCompat {
    pub sender: String,
    pub contract: String,
    pub msg: String,
    pub funds: String,
}

impl Msg for MsgExecuteContractCompat {
    const KIND: MessageKind = MessageKind::MsgExecuteContractCompat;

    type Proto = proto::MsgExecuteContractCompat;

    fn from_args(args: &mut Args) -> Result<Self, Error> {
        Ok(MsgExecuteContractCompat {
            sender: args.string("sender")?,
            contract: args.string("contract")?,
            msg: args.string("msg")?,
            funds: args.string("funds")?,
        })
    }

    fn to_proto(&self) -> Self::Proto {
        proto::MsgExecuteContractCompat {
            sender: self.sender.clone(),
            contract: self.contract.clone(),
            msg: self.msg.clone(),
            funds: self.funds.clone(),
        }
    }

    fn from_proto(proto: Self::Proto) -> Result<Self, Error> {
        Ok(MsgExecuteContractCompat {
            sender: proto.sender,
            contract: proto.contract,
            msg: proto.msg,
            funds: proto.funds,
        })
    }

    fn eip712_fields(&self) -> Vec<(&'static str, Arg)> {
        vec![
            ("sender", self.sender.clone().into()),
            ("contract", self.contract.clone().into()),
            ("msg", self.msg.clone().into()),
            ("funds", self.funds.clone().into()),
        ]
    }
}
