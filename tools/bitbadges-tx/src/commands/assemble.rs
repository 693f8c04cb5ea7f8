use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bitbadges_sdk::config::Config;
use bitbadges_sdk::{create_transaction, MessageBuilder};
use clap::{Parser, ValueEnum};
use error_stack::{Result, ResultExt};
use tracing::info;

use crate::commands::{decode_hex, MsgArgs, SenderArgs};
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SignMode {
    /// Signature over the protobuf sign doc
    Direct,
    /// Wallet signature over the EIP712 digest
    Eip712,
}

#[derive(Debug, Clone, Parser)]
pub struct Args {
    #[command(flatten)]
    pub msg: MsgArgs,

    #[command(flatten)]
    pub sender: SenderArgs,

    /// Hex encoded signature
    #[arg(long)]
    pub signature: String,

    #[arg(long, value_enum, default_value_t = SignMode::Eip712)]
    pub mode: SignMode,
}

pub fn run(cfg: Config, args: Args) -> Result<String, Error> {
    let builder = MessageBuilder::new(cfg.schema_version);
    let ctx = args.sender.tx_context(&cfg)?;
    let msgs = args.msg.parse_msgs()?;
    let signature = decode_hex(&args.signature).attach_printable("invalid signature")?;

    let tx = create_transaction(&builder, &ctx, &msgs).change_context(Error::CreateTransaction)?;
    let bytes = match args.mode {
        SignMode::Direct => tx.into_direct_tx(signature),
        SignMode::Eip712 => tx
            .into_eip712_tx(signature)
            .change_context(Error::CreateTransaction)?,
    };

    info!(mode = ?args.mode, len = bytes.len(), "assembled raw tx");

    Ok(STANDARD.encode(bytes))
}
