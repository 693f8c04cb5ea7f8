//! Builds message envelopes in either encoding and reads them back.
//!
//! Both encodings of a message are derived from the same [AnyMsg], so a native envelope and an
//! EIP712 envelope built from equal arguments always describe the same state transition.

use std::str::FromStr;

use cosmrs::Any;
use error_stack::{report, Result};
use tracing::debug;

use crate::coerce;
use crate::envelope::{Eip712Envelope, Encoding, MessageEnvelope, NativeEnvelope};
use crate::error::Error;
use crate::msgs::{AnyMsg, NativeMessage};
use crate::registry::{Entry, MessageKind, Registry, SchemaVersion};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageBuilder {
    registry: &'static Registry,
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new(SchemaVersion::default())
    }
}

impl MessageBuilder {
    pub fn new(version: SchemaVersion) -> Self {
        Self {
            registry: Registry::for_version(version),
        }
    }

    pub fn registry(&self) -> &'static Registry {
        self.registry
    }

    pub fn entry(&self, kind: MessageKind) -> Result<&'static Entry, Error> {
        self.registry.lookup(kind)
    }

    /// Builds an envelope of the named kind from a JSON object of arguments.
    pub fn build(
        &self,
        kind: &str,
        args: serde_json::Value,
        encoding: Encoding,
    ) -> Result<MessageEnvelope, Error> {
        let kind = MessageKind::from_str(kind)
            .map_err(|_| report!(Error::UnknownMessageKind(kind.to_string())))?;
        self.entry(kind)?;

        let msg = AnyMsg::from_args(kind, args)?;

        match encoding {
            Encoding::Native => self.native(&msg).map(MessageEnvelope::Native),
            Encoding::Eip712 => self.eip712(&msg).map(MessageEnvelope::Eip712),
        }
    }

    pub fn native(&self, msg: &AnyMsg) -> Result<NativeEnvelope, Error> {
        let entry = self.entry(msg.kind())?;

        debug!(kind = %entry.kind, path = entry.path, "built native message");

        Ok(NativeEnvelope {
            message: msg.to_native(),
            path: entry.path,
        })
    }

    pub fn eip712(&self, msg: &AnyMsg) -> Result<Eip712Envelope, Error> {
        let entry = self.entry(msg.kind())?;
        let value = coerce::encode_value(entry, msg.eip712_fields())?;

        debug!(kind = %entry.kind, amino_type = entry.amino_type, "built EIP712 message");

        Ok(Eip712Envelope {
            r#type: entry.amino_type.to_string(),
            value,
        })
    }

    pub fn decode_native(&self, envelope: &NativeEnvelope) -> Result<AnyMsg, Error> {
        let entry = self.registry.lookup_path(envelope.path)?;
        if entry.kind != envelope.kind() {
            return Err(report!(Error::SerializationFailure(envelope.path.to_string()))
                .attach_printable(format!("{{ message_kind = {} }}", envelope.kind())));
        }

        AnyMsg::from_native(envelope.message.clone())
    }

    pub fn decode_any(&self, any: &Any) -> Result<AnyMsg, Error> {
        let entry = self.registry.lookup_path(&any.type_url)?;
        let message = NativeMessage::decode(entry.kind, &any.value)?;

        AnyMsg::from_native(message)
    }

    pub fn decode_eip712(&self, envelope: &Eip712Envelope) -> Result<AnyMsg, Error> {
        let entry = self.registry.lookup_type(&envelope.r#type)?;
        let fields = coerce::decode_value(entry, &envelope.value)?;

        AnyMsg::from_eip712_fields(fields)
    }
}

#[cfg(test)]
mod tests {
    use assert_ok::assert_ok;
    use serde_json::json;

    use super::MessageBuilder;
    use crate::envelope::{Encoding, MessageEnvelope};
    use crate::error::Error;
    use crate::msgs::test_utils::sample_msgs;
    use crate::msgs::{AnyMsg, MsgExecuteContractCompat, UpdatePermissions};
    use crate::registry::{MessageKind, SchemaVersion};

    fn send_args() -> serde_json::Value {
        json!({"amount": 100, "denom": "ubadge", "from": "cosmos1abc", "to": "cosmos1xyz"})
    }

    #[test]
    fn build_should_produce_the_native_msg_send() {
        let builder = MessageBuilder::new(SchemaVersion::Current);

        let envelope = assert_ok!(builder.build("MsgSend", send_args(), Encoding::Native));

        let MessageEnvelope::Native(native) = envelope else {
            panic!("expected a native envelope");
        };
        assert_eq!(native.path, "cosmos.bank.v1beta1.MsgSend");
        assert_eq!(native.to_any().type_url, "/cosmos.bank.v1beta1.MsgSend");
    }

    #[test]
    fn build_should_produce_the_eip712_msg_send() {
        let builder = MessageBuilder::new(SchemaVersion::Current);

        let envelope = assert_ok!(builder.build("MsgSend", send_args(), Encoding::Eip712));

        let MessageEnvelope::Eip712(eip712) = envelope else {
            panic!("expected an EIP712 envelope");
        };
        assert_eq!(
            serde_json::to_value(&eip712).unwrap(),
            json!({
                "type": "cosmos-sdk/MsgSend",
                "value": {
                    "from_address": "cosmos1abc",
                    "to_address": "cosmos1xyz",
                    "amount": [{"denom": "ubadge", "amount": "100"}],
                }
            })
        );
    }

    #[test]
    fn build_should_fail_for_unknown_kinds() {
        let builder = MessageBuilder::new(SchemaVersion::Current);

        for encoding in [Encoding::Native, Encoding::Eip712] {
            let err = builder
                .build("NotARealMessage", json!({}), encoding)
                .unwrap_err();

            assert_eq!(
                err.current_context(),
                &Error::UnknownMessageKind("NotARealMessage".to_string())
            );
        }
    }

    #[test]
    fn build_should_check_the_registry_before_the_arguments() {
        let builder = MessageBuilder::new(SchemaVersion::Legacy);

        let err = builder
            .build("MsgExecuteContractCompat", json!({}), Encoding::Native)
            .unwrap_err();

        assert_eq!(
            err.current_context(),
            &Error::UnknownMessageKind("MsgExecuteContractCompat".to_string())
        );
    }

    #[test]
    fn build_should_name_the_offending_field() {
        let builder = MessageBuilder::new(SchemaVersion::Current);
        let mut args = send_args();
        args["amount"] = json!(-5);

        let err = builder.build("MsgSend", args, Encoding::Eip712).unwrap_err();

        assert_eq!(
            err.current_context(),
            &Error::InvalidMessageArgs {
                kind: MessageKind::MsgSend,
                field: "amount".to_string()
            }
        );
    }

    #[test]
    fn large_uint64_values_should_round_trip_in_both_encodings() {
        let builder = MessageBuilder::new(SchemaVersion::Current);
        let msg: AnyMsg = UpdatePermissions {
            creator: "cosmos1creator".to_string(),
            badge_id: 1,
            permissions: 9223372036854775807,
        }
        .into();

        let eip712 = assert_ok!(builder.eip712(&msg));
        assert_eq!(eip712.value["permissions"], json!("9223372036854775807"));
        assert_eq!(assert_ok!(builder.decode_eip712(&eip712)), msg);

        let native = assert_ok!(builder.native(&msg));
        assert_eq!(assert_ok!(builder.decode_any(&native.to_any())), msg);
    }

    #[test]
    fn both_encodings_should_describe_the_same_message() {
        let builder = MessageBuilder::new(SchemaVersion::Current);

        for msg in sample_msgs() {
            let native = assert_ok!(builder.native(&msg));
            let eip712 = assert_ok!(builder.eip712(&msg));

            assert_eq!(assert_ok!(builder.decode_native(&native)), msg);
            assert_eq!(assert_ok!(builder.decode_any(&native.to_any())), msg);
            assert_eq!(assert_ok!(builder.decode_eip712(&eip712)), msg);
        }
    }

    #[test]
    fn json_arguments_should_match_typed_messages() {
        let builder = MessageBuilder::new(SchemaVersion::Current);
        let typed: AnyMsg = MsgExecuteContractCompat {
            sender: "cosmos1sender".to_string(),
            contract: "cosmos1contract".to_string(),
            msg: "{}".to_string(),
            funds: "".to_string(),
        }
        .into();

        let envelope = assert_ok!(builder.build(
            "MsgExecuteContractCompat",
            json!({"sender": "cosmos1sender", "contract": "cosmos1contract", "msg": "{}", "funds": ""}),
            Encoding::Native,
        ));

        assert_eq!(envelope, MessageEnvelope::Native(assert_ok!(builder.native(&typed))));
    }

    #[test]
    fn legacy_builder_should_use_the_legacy_namespace() {
        let legacy = MessageBuilder::new(SchemaVersion::Legacy);
        let current = MessageBuilder::new(SchemaVersion::Current);
        let msg = sample_msgs()
            .into_iter()
            .find(|msg| msg.kind() == MessageKind::DeleteCollection)
            .unwrap();

        let legacy_any = assert_ok!(legacy.native(&msg)).to_any();
        let current_any = assert_ok!(current.native(&msg)).to_any();

        assert_eq!(
            legacy_any.type_url,
            "/trevormil.bitbadgeschain.badges.MsgDeleteCollection"
        );
        assert_eq!(legacy_any.value, current_any.value);
        assert!(current.decode_any(&legacy_any).is_err());
        assert_eq!(assert_ok!(legacy.decode_any(&legacy_any)), msg);
    }

    #[test]
    fn decode_eip712_should_reject_tampered_values() {
        let builder = MessageBuilder::new(SchemaVersion::Current);
        let msg = sample_msgs().remove(0);
        let mut eip712 = assert_ok!(builder.eip712(&msg));
        eip712.value.insert("collectionId".to_string(), json!("not a number"));

        let err = builder.decode_eip712(&eip712).unwrap_err();

        assert_eq!(
            err.current_context(),
            &Error::InvalidMessageArgs {
                kind: MessageKind::DeleteCollection,
                field: "collectionId".to_string()
            }
        );
    }
}
