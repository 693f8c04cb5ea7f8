use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::domain::ChainId;

/// The two identities of a BitBadges network: the EVM chain id hashed into the EIP712 domain and
/// the Cosmos chain id signed over in direct mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chain {
    pub chain_id: u64,
    pub cosmos_chain_id: String,
}

impl Chain {
    pub fn evm_chain_id(&self) -> ChainId {
        self.chain_id.into()
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self {
            chain_id: 1,
            cosmos_chain_id: "bitbadges_1-1".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fee {
    pub amount: u64,
    pub denom: String,
    pub gas: u64,
}

impl Default for Fee {
    fn default() -> Self {
        Self {
            amount: 0,
            denom: "ubadge".to_string(),
            gas: 200000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct Sender {
    #[builder(setter(into))]
    pub account_address: String,
    pub sequence: u64,
    pub account_number: u64,
    /// Compressed secp256k1 public key. Accounts that never signed before have none on chain.
    #[builder(default, setter(strip_option))]
    pub pubkey: Option<Vec<u8>>,
}
