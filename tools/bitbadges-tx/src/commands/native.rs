use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bitbadges_sdk::config::Config;
use bitbadges_sdk::MessageBuilder;
use clap::Parser;
use error_stack::{Result, ResultExt};
use serde_json::{json, Value};
use tracing::info;

use crate::commands::{to_json, MsgArgs};
use crate::error::Error;

#[derive(Debug, Clone, Parser)]
pub struct Args {
    #[command(flatten)]
    pub msg: MsgArgs,
}

pub fn run(cfg: Config, args: Args) -> Result<String, Error> {
    let builder = MessageBuilder::new(cfg.schema_version);
    let msgs = args.msg.parse_msgs()?;

    let anys = msgs
        .iter()
        .map(|msg| {
            builder
                .native(msg)
                .map(|envelope| envelope.to_any())
                .change_context(Error::BuildMessage)
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        schema_version = %cfg.schema_version,
        count = anys.len(),
        "built native messages"
    );

    let output: Vec<Value> = anys
        .into_iter()
        .map(|any| json!({"type_url": any.type_url, "value": STANDARD.encode(any.value)}))
        .collect();

    to_json(&output)
}
