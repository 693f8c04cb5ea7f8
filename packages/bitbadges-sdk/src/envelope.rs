use cosmrs::Any;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};

use crate::msgs::NativeMessage;
use crate::registry::MessageKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Encoding {
    Native,
    Eip712,
}

/// A protobuf message together with its canonical path, ready to be packed into an `Any`.
#[derive(Clone, Debug, PartialEq)]
pub struct NativeEnvelope {
    pub message: NativeMessage,
    pub path: &'static str,
}

impl NativeEnvelope {
    pub fn kind(&self) -> MessageKind {
        self.message.kind()
    }

    pub fn type_url(&self) -> String {
        format!("/{}", self.path)
    }

    pub fn to_any(&self) -> Any {
        Any {
            type_url: self.type_url(),
            value: self.message.encode_to_vec(),
        }
    }
}

/// The `{type, value}` form of a message inside the EIP712 `msgs` array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eip712Envelope {
    #[serde(rename = "type")]
    pub r#type: String,
    pub value: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MessageEnvelope {
    Native(NativeEnvelope),
    Eip712(Eip712Envelope),
}

impl MessageEnvelope {
    pub fn encoding(&self) -> Encoding {
        match self {
            MessageEnvelope::Native(_) => Encoding::Native,
            MessageEnvelope::Eip712(_) => Encoding::Eip712,
        }
    }
}
