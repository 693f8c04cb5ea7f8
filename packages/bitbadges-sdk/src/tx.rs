//! Assembles raw transaction frames.
//!
//! The tx body is taken by value and the extension is appended before anything is serialized,
//! so the bytes handed back always contain the extension.

use bitbadges_proto::ethermint::types::v1::ExtensionOptionsWeb3Tx;
use cosmrs::proto::cosmos::tx::v1beta1::{AuthInfo, TxBody, TxRaw};
use cosmrs::Any;
use error_stack::{report, Result};
use prost::Message;
use tracing::debug;

use crate::error::Error;

pub const WEB3_EXTENSION_TYPE_URL: &str = "/ethermint.types.v1.ExtensionOptionsWeb3Tx";

/// Carries the wallet signature of an EIP712 transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Web3Extension {
    pub typed_data_chain_id: u64,
    pub fee_payer: String,
    pub fee_payer_sig: Vec<u8>,
}

impl Web3Extension {
    pub fn to_any(&self) -> Any {
        Any {
            type_url: WEB3_EXTENSION_TYPE_URL.to_string(),
            value: ExtensionOptionsWeb3Tx {
                typed_data_chain_id: self.typed_data_chain_id,
                fee_payer: self.fee_payer.clone(),
                fee_payer_sig: self.fee_payer_sig.clone(),
            }
            .encode_to_vec(),
        }
    }
}

/// Appends `extension` to the body's extension options and encodes the resulting `TxRaw`.
/// Signatures are passed through untouched.
pub fn assemble(
    mut body: TxBody,
    auth_info: &AuthInfo,
    extension: Any,
    signatures: Vec<Vec<u8>>,
) -> Result<Vec<u8>, Error> {
    if body
        .extension_options
        .iter()
        .any(|existing| existing.type_url == extension.type_url)
    {
        return Err(report!(Error::ExtensionAlreadyPresent(extension.type_url)));
    }

    body.extension_options.push(extension);

    let tx_raw = create_tx_raw(body.encode_to_vec(), auth_info.encode_to_vec(), signatures);
    let bytes = tx_raw.encode_to_vec();

    debug!(
        body_len = tx_raw.body_bytes.len(),
        auth_info_len = tx_raw.auth_info_bytes.len(),
        signatures = tx_raw.signatures.len(),
        "assembled raw tx"
    );

    Ok(bytes)
}

/// EIP712 transactions are authenticated by the extension, so the frame carries a single empty
/// signature.
pub fn assemble_eip712(
    body: TxBody,
    auth_info: &AuthInfo,
    extension: &Web3Extension,
) -> Result<Vec<u8>, Error> {
    assemble(body, auth_info, extension.to_any(), vec![vec![]])
}

pub fn create_tx_raw(
    body_bytes: Vec<u8>,
    auth_info_bytes: Vec<u8>,
    signatures: Vec<Vec<u8>>,
) -> TxRaw {
    TxRaw {
        body_bytes,
        auth_info_bytes,
        signatures,
    }
}
