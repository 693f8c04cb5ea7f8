use bitbadges_sdk::config::Config;
use bitbadges_sdk::types::Sender;
use bitbadges_sdk::{AnyMsg, MessageKind, TxContext};
use clap::{Parser, Subcommand};
use error_stack::{report, Result, ResultExt};
use serde_json::Value;

use crate::error::Error;

pub mod assemble;
pub mod eip712;
pub mod native;

#[derive(Debug, Subcommand)]
pub enum SubCommand {
    /// Print the protobuf `Any` of every message, base64 encoded
    Native(native::Args),
    /// Print the EIP712 typed data of a transaction and the digest a wallet signs
    Eip712(eip712::Args),
    /// Assemble signed raw transaction bytes, base64 encoded
    Assemble(assemble::Args),
}

#[derive(Debug, Clone, Parser)]
pub struct MsgArgs {
    /// Message kind, e.g. MsgSend or DeleteCollection
    #[arg(short, long)]
    pub kind: String,

    /// JSON object of message arguments, or an array of objects for several messages
    #[arg(short, long)]
    pub args: String,
}

impl MsgArgs {
    pub fn parse_msgs(&self) -> Result<Vec<AnyMsg>, Error> {
        let kind: MessageKind = self
            .kind
            .parse()
            .map_err(|_| {
                report!(bitbadges_sdk::Error::UnknownMessageKind(
                    self.kind.clone()
                ))
            })
            .change_context(Error::InvalidInput)?;

        let args: Value = serde_json::from_str(&self.args)
            .map_err(|err| report!(err))
            .change_context(Error::InvalidInput)?;
        let args = match args {
            Value::Array(items) => items,
            object => vec![object],
        };

        args.into_iter()
            .map(|args| AnyMsg::from_args(kind, args).change_context(Error::BuildMessage))
            .collect()
    }
}

#[derive(Debug, Clone, Parser)]
pub struct SenderArgs {
    /// Bech32 address of the signing account
    #[arg(long)]
    pub sender: String,

    #[arg(long)]
    pub account_number: u64,

    #[arg(long)]
    pub sequence: u64,

    /// Hex encoded compressed secp256k1 public key of the sender
    #[arg(long)]
    pub pubkey: Option<String>,
}

impl SenderArgs {
    pub fn tx_context(&self, cfg: &Config) -> Result<TxContext, Error> {
        let pubkey = self
            .pubkey
            .as_deref()
            .map(decode_hex)
            .transpose()
            .attach_printable("invalid public key")?;

        let sender = Sender::builder()
            .account_address(self.sender.as_str())
            .account_number(self.account_number)
            .sequence(self.sequence);
        let sender = match pubkey {
            Some(pubkey) => sender.pubkey(pubkey).build(),
            None => sender.build(),
        };

        Ok(TxContext::builder()
            .chain(cfg.chain.clone())
            .sender(sender)
            .fee(cfg.fee.clone())
            .memo(cfg.memo.as_str())
            .build())
    }
}

pub fn decode_hex(value: &str) -> Result<Vec<u8>, Error> {
    hex::decode(value.strip_prefix("0x").unwrap_or(value))
        .map_err(|err| report!(err))
        .change_context(Error::InvalidInput)
}

pub fn to_json(value: &impl serde::Serialize) -> Result<String, Error> {
    serde_json::to_string_pretty(value)
        .map_err(|err| report!(err))
        .change_context(Error::Output)
}
