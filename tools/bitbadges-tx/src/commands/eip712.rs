use bitbadges_sdk::config::Config;
use bitbadges_sdk::{create_transaction, MessageBuilder};
use clap::Parser;
use error_stack::{Result, ResultExt};
use serde_json::json;
use tracing::info;

use crate::commands::{to_json, MsgArgs, SenderArgs};
use crate::error::Error;

#[derive(Debug, Clone, Parser)]
pub struct Args {
    #[command(flatten)]
    pub msg: MsgArgs,

    #[command(flatten)]
    pub sender: SenderArgs,
}

pub fn run(cfg: Config, args: Args) -> Result<String, Error> {
    let builder = MessageBuilder::new(cfg.schema_version);
    let ctx = args.sender.tx_context(&cfg)?;
    let msgs = args.msg.parse_msgs()?;

    let tx = create_transaction(&builder, &ctx, &msgs).change_context(Error::CreateTransaction)?;

    info!(
        chain_id = tx.eip_to_sign.domain.chain_id,
        sender = %ctx.sender.account_address,
        "created EIP712 payload"
    );

    to_json(&json!({
        "typed_data": tx.eip_to_sign,
        "digest": format!("0x{}", hex::encode(&tx.legacy_amino.sign_bytes)),
        "sign_doc": hex::encode(&tx.sign_direct.sign_bytes),
    }))
}
