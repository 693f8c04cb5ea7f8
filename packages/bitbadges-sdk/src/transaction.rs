//! Builds everything a sender needs to sign a transaction, in both signing modes.
//!
//! `sign_direct` is signed over the serialized `SignDoc` by Cosmos wallets, `legacy_amino` is
//! signed over the EIP712 digest by Ethereum wallets. The EIP712 path is broadcast with the
//! signature inside the Web3 extension (see [Transaction::into_eip712_tx]).

use bitbadges_proto::ethermint::crypto::v1::ethsecp256k1::PubKey;
use cosmrs::proto::cosmos::base::v1beta1::Coin as ProtoCoin;
use cosmrs::proto::cosmos::tx::signing::v1beta1::SignMode;
use cosmrs::proto::cosmos::tx::v1beta1::mode_info::{Single, Sum};
use cosmrs::proto::cosmos::tx::v1beta1::{
    AuthInfo, Fee as ProtoFee, ModeInfo, SignDoc, SignerInfo, TxBody,
};
use cosmrs::Any;
use error_stack::{report, Result};
use itertools::Itertools;
use k256::ecdsa::VerifyingKey;
use prost::Message;
use serde_json::{json, Value};
use tracing::debug;
use typed_builder::TypedBuilder;

use crate::builder::MessageBuilder;
use crate::domain::make_domain;
use crate::eip712::TypedData;
use crate::envelope::Eip712Envelope;
use crate::error::Error;
use crate::msgs::AnyMsg;
use crate::tx::{assemble_eip712, create_tx_raw, Web3Extension};
use crate::types::{Chain, Fee, Sender};

pub const PUBKEY_TYPE_URL: &str = "/ethermint.crypto.v1.ethsecp256k1.PubKey";

const COMPRESSED_PUBKEY_LEN: usize = 33;

#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct TxContext {
    pub chain: Chain,
    pub sender: Sender,
    pub fee: Fee,
    #[builder(default, setter(into))]
    pub memo: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SignPayload {
    pub body: TxBody,
    pub auth_info: AuthInfo,
    pub sign_bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    pub sign_direct: SignPayload,
    pub legacy_amino: SignPayload,
    pub eip_to_sign: TypedData,
    pub fee_payer: String,
}

impl Transaction {
    /// Raw tx bytes for a signature over `sign_direct.sign_bytes`.
    pub fn into_direct_tx(self, signature: Vec<u8>) -> Vec<u8> {
        let SignPayload {
            body, auth_info, ..
        } = self.sign_direct;

        create_tx_raw(
            body.encode_to_vec(),
            auth_info.encode_to_vec(),
            vec![signature],
        )
        .encode_to_vec()
    }

    /// Raw tx bytes for a wallet signature over the EIP712 digest.
    pub fn into_eip712_tx(self, signature: Vec<u8>) -> Result<Vec<u8>, Error> {
        let extension = Web3Extension {
            typed_data_chain_id: self.eip_to_sign.domain.chain_id,
            fee_payer: self.fee_payer,
            fee_payer_sig: signature,
        };

        assemble_eip712(
            self.legacy_amino.body,
            &self.legacy_amino.auth_info,
            &extension,
        )
    }
}

pub fn create_transaction(
    builder: &MessageBuilder,
    ctx: &TxContext,
    msgs: &[AnyMsg],
) -> Result<Transaction, Error> {
    let kind = match msgs.iter().map(AnyMsg::kind).all_equal_value() {
        Ok(kind) => kind,
        Err(None) => return Err(report!(Error::EmptyMessages)),
        Err(Some((first, other))) => return Err(report!(Error::MixedMessageKinds(first, other))),
    };

    let messages = msgs
        .iter()
        .map(|msg| builder.native(msg).map(|envelope| envelope.to_any()))
        .collect::<Result<Vec<_>, _>>()?;
    let body = TxBody {
        messages,
        memo: ctx.memo.clone(),
        ..Default::default()
    };
    let public_key = ctx.sender.pubkey.as_deref().map(pubkey_any).transpose()?;

    let direct_auth_info = auth_info(ctx, public_key.clone(), SignMode::Direct);
    let sign_doc = SignDoc {
        body_bytes: body.encode_to_vec(),
        auth_info_bytes: direct_auth_info.encode_to_vec(),
        chain_id: ctx.chain.cosmos_chain_id.clone(),
        account_number: ctx.sender.account_number,
    };

    let envelopes = msgs
        .iter()
        .map(|msg| builder.eip712(msg))
        .collect::<Result<Vec<_>, _>>()?;
    let eip_to_sign = TypedData::new(
        make_domain(ctx.chain.evm_chain_id()),
        builder.entry(kind)?,
        tx_message(ctx, envelopes),
    );
    let digest = eip_to_sign.digest()?;

    debug!(
        kind = %kind,
        msgs = msgs.len(),
        sequence = ctx.sender.sequence,
        "created transaction"
    );

    Ok(Transaction {
        sign_direct: SignPayload {
            body: body.clone(),
            auth_info: direct_auth_info,
            sign_bytes: sign_doc.encode_to_vec(),
        },
        legacy_amino: SignPayload {
            body,
            auth_info: auth_info(ctx, public_key, SignMode::LegacyAminoJson),
            sign_bytes: digest.to_vec(),
        },
        eip_to_sign,
        fee_payer: ctx.sender.account_address.clone(),
    })
}

fn tx_message(ctx: &TxContext, msgs: Vec<Eip712Envelope>) -> Value {
    json!({
        "account_number": ctx.sender.account_number.to_string(),
        "chain_id": ctx.chain.cosmos_chain_id,
        "fee": {
            "feePayer": ctx.sender.account_address,
            "amount": [{"denom": ctx.fee.denom, "amount": ctx.fee.amount.to_string()}],
            "gas": ctx.fee.gas.to_string(),
        },
        "memo": ctx.memo,
        "msgs": msgs,
        "sequence": ctx.sender.sequence.to_string(),
    })
}

fn auth_info(ctx: &TxContext, public_key: Option<Any>, mode: SignMode) -> AuthInfo {
    AuthInfo {
        signer_infos: vec![SignerInfo {
            public_key,
            mode_info: Some(ModeInfo {
                sum: Some(Sum::Single(Single { mode: mode as i32 })),
            }),
            sequence: ctx.sender.sequence,
        }],
        fee: Some(ProtoFee {
            amount: vec![ProtoCoin {
                denom: ctx.fee.denom.clone(),
                amount: ctx.fee.amount.to_string(),
            }],
            gas_limit: ctx.fee.gas,
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn pubkey_any(key: &[u8]) -> Result<Any, Error> {
    if key.len() != COMPRESSED_PUBKEY_LEN || VerifyingKey::from_sec1_bytes(key).is_err() {
        return Err(report!(Error::InvalidPublicKey)
            .attach_printable(format!("{{ pubkey = {} }}", hex::encode(key))));
    }

    Ok(Any {
        type_url: PUBKEY_TYPE_URL.to_string(),
        value: PubKey { key: key.to_vec() }.encode_to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use assert_ok::assert_ok;
    use bitbadges_proto::ethermint::crypto::v1::ethsecp256k1::PubKey;
    use bitbadges_proto::ethermint::types::v1::ExtensionOptionsWeb3Tx;
    use cosmrs::proto::cosmos::tx::signing::v1beta1::SignMode;
    use cosmrs::proto::cosmos::tx::v1beta1::mode_info::Sum;
    use cosmrs::proto::cosmos::tx::v1beta1::{AuthInfo, SignDoc, TxBody, TxRaw};
    use k256::ecdsa::{SigningKey, VerifyingKey};
    use prost::Message;

    use super::{create_transaction, TxContext, PUBKEY_TYPE_URL};
    use crate::builder::MessageBuilder;
    use crate::error::Error;
    use crate::msgs::test_utils::sample_msgs;
    use crate::msgs::{AnyMsg, MsgSend};
    use crate::registry::SchemaVersion;
    use crate::tx::WEB3_EXTENSION_TYPE_URL;
    use crate::types::{Chain, Fee, Sender};

    fn signing_key() -> SigningKey {
        SigningKey::from_slice(&[1u8; 32]).unwrap()
    }

    fn compressed_pubkey(key: &SigningKey) -> Vec<u8> {
        key.verifying_key().to_encoded_point(true).as_bytes().to_vec()
    }

    fn ctx(pubkey: Option<Vec<u8>>) -> TxContext {
        let sender = Sender::builder()
            .account_address("cosmos1abc")
            .sequence(3)
            .account_number(7);
        let sender = match pubkey {
            Some(pubkey) => sender.pubkey(pubkey).build(),
            None => sender.build(),
        };

        TxContext::builder()
            .chain(Chain {
                chain_id: 1,
                cosmos_chain_id: "bitbadges_1-1".to_string(),
            })
            .sender(sender)
            .fee(Fee {
                amount: 10,
                denom: "ubadge".to_string(),
                gas: 200000,
            })
            .memo("hello")
            .build()
    }

    fn send(amount: u128) -> AnyMsg {
        MsgSend::new("cosmos1abc", "cosmos1xyz", amount, "ubadge").into()
    }

    fn sign_mode(auth_info: &AuthInfo) -> i32 {
        match auth_info.signer_infos[0]
            .mode_info
            .as_ref()
            .and_then(|info| info.sum.as_ref())
        {
            Some(Sum::Single(single)) => single.mode,
            other => panic!("unexpected mode info {:?}", other),
        }
    }

    #[test]
    fn create_transaction_should_fill_both_sign_modes() {
        let key = signing_key();
        let builder = MessageBuilder::new(SchemaVersion::Current);

        let tx = assert_ok!(create_transaction(
            &builder,
            &ctx(Some(compressed_pubkey(&key))),
            &[send(100), send(200)]
        ));

        assert_eq!(tx.sign_direct.body, tx.legacy_amino.body);
        assert_eq!(tx.sign_direct.body.messages.len(), 2);
        assert_eq!(tx.sign_direct.body.memo, "hello");
        assert_eq!(sign_mode(&tx.sign_direct.auth_info), SignMode::Direct as i32);
        assert_eq!(
            sign_mode(&tx.legacy_amino.auth_info),
            SignMode::LegacyAminoJson as i32
        );
        assert_eq!(
            tx.legacy_amino.sign_bytes,
            tx.eip_to_sign.digest().unwrap().to_vec()
        );

        let signer = &tx.sign_direct.auth_info.signer_infos[0];
        let public_key = signer.public_key.as_ref().unwrap();
        assert_eq!(signer.sequence, 3);
        assert_eq!(public_key.type_url, PUBKEY_TYPE_URL);
        assert_eq!(
            PubKey::decode(public_key.value.as_slice()).unwrap().key,
            compressed_pubkey(&key)
        );
    }

    #[test]
    fn direct_sign_bytes_should_be_the_sign_doc() {
        let builder = MessageBuilder::new(SchemaVersion::Current);

        let tx = assert_ok!(create_transaction(&builder, &ctx(None), &[send(100)]));

        let sign_doc = SignDoc::decode(tx.sign_direct.sign_bytes.as_slice()).unwrap();
        assert_eq!(sign_doc.chain_id, "bitbadges_1-1");
        assert_eq!(sign_doc.account_number, 7);
        assert_eq!(
            TxBody::decode(sign_doc.body_bytes.as_slice()).unwrap(),
            tx.sign_direct.body
        );
        assert!(tx.sign_direct.auth_info.signer_infos[0].public_key.is_none());
    }

    #[test]
    fn eip712_message_should_carry_the_tx_fields_as_strings() {
        let builder = MessageBuilder::new(SchemaVersion::Current);

        let tx = assert_ok!(create_transaction(&builder, &ctx(None), &[send(100)]));

        let message = &tx.eip_to_sign.message;
        assert_eq!(message["account_number"], "7");
        assert_eq!(message["sequence"], "3");
        assert_eq!(message["chain_id"], "bitbadges_1-1");
        assert_eq!(message["fee"]["feePayer"], "cosmos1abc");
        assert_eq!(message["fee"]["gas"], "200000");
        assert_eq!(message["msgs"][0]["value"]["amount"][0]["amount"], "100");
        assert_eq!(tx.eip_to_sign.domain.chain_id, 1);
    }

    #[test]
    fn digest_signature_should_recover_the_sender_key() {
        let key = signing_key();
        let builder = MessageBuilder::new(SchemaVersion::Current);
        let tx = assert_ok!(create_transaction(
            &builder,
            &ctx(Some(compressed_pubkey(&key))),
            &[send(100)]
        ));

        let digest = tx.eip_to_sign.digest().unwrap();
        let (signature, recovery_id) = key.sign_prehash_recoverable(&digest).unwrap();
        let recovered =
            VerifyingKey::recover_from_prehash(&digest, &signature, recovery_id).unwrap();

        assert_eq!(&recovered, key.verifying_key());
    }

    #[test]
    fn every_kind_should_produce_a_signable_transaction() {
        let builder = MessageBuilder::new(SchemaVersion::Current);

        for msg in sample_msgs() {
            let tx = assert_ok!(create_transaction(&builder, &ctx(None), &[msg]));

            assert_ok!(tx.eip_to_sign.digest());
        }
    }

    #[test]
    fn into_eip712_tx_should_carry_the_signature_in_the_extension() {
        let builder = MessageBuilder::new(SchemaVersion::Current);
        let tx = assert_ok!(create_transaction(&builder, &ctx(None), &[send(100)]));

        let bytes = assert_ok!(tx.into_eip712_tx(vec![5; 65]));

        let tx_raw = TxRaw::decode(bytes.as_slice()).unwrap();
        let body = TxBody::decode(tx_raw.body_bytes.as_slice()).unwrap();
        let extension = &body.extension_options[0];
        let web3 = ExtensionOptionsWeb3Tx::decode(extension.value.as_slice()).unwrap();

        assert_eq!(extension.type_url, WEB3_EXTENSION_TYPE_URL);
        assert_eq!(web3.fee_payer, "cosmos1abc");
        assert_eq!(web3.fee_payer_sig, vec![5; 65]);
        assert_eq!(web3.typed_data_chain_id, 1);
        assert_eq!(
            sign_mode(&AuthInfo::decode(tx_raw.auth_info_bytes.as_slice()).unwrap()),
            SignMode::LegacyAminoJson as i32
        );
    }

    #[test]
    fn into_direct_tx_should_carry_the_signature() {
        let builder = MessageBuilder::new(SchemaVersion::Current);
        let tx = assert_ok!(create_transaction(&builder, &ctx(None), &[send(100)]));

        let tx_raw = TxRaw::decode(tx.into_direct_tx(vec![6; 64]).as_slice()).unwrap();

        assert_eq!(tx_raw.signatures, vec![vec![6; 64]]);
        assert!(TxBody::decode(tx_raw.body_bytes.as_slice())
            .unwrap()
            .extension_options
            .is_empty());
    }

    #[test]
    fn create_transaction_should_reject_empty_message_lists() {
        let builder = MessageBuilder::new(SchemaVersion::Current);

        let err = create_transaction(&builder, &ctx(None), &[]).unwrap_err();

        assert_eq!(err.current_context(), &Error::EmptyMessages);
    }

    #[test]
    fn create_transaction_should_reject_mixed_kinds() {
        let builder = MessageBuilder::new(SchemaVersion::Current);
        let msgs = sample_msgs();

        let err = create_transaction(&builder, &ctx(None), &msgs[..2]).unwrap_err();

        assert_eq!(
            err.current_context(),
            &Error::MixedMessageKinds(msgs[0].kind(), msgs[1].kind())
        );
    }

    #[test]
    fn create_transaction_should_reject_malformed_public_keys() {
        let builder = MessageBuilder::new(SchemaVersion::Current);
        let uncompressed = signing_key()
            .verifying_key()
            .to_encoded_point(false)
            .as_bytes()
            .to_vec();

        for pubkey in [vec![2; 32], vec![4; 33], uncompressed] {
            let err =
                create_transaction(&builder, &ctx(Some(pubkey)), &[send(100)]).unwrap_err();

            assert_eq!(err.current_context(), &Error::InvalidPublicKey);
        }
    }
}
