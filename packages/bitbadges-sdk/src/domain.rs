//! The EIP712 signing domain shared by every BitBadges transaction.
//!
//! Wallets hash these values into the domain separator, so they must stay byte-exact. Only the
//! chain id varies between domains.

use std::fmt;
use std::str::FromStr;

use error_stack::{report, Report};
use serde::{Deserialize, Serialize};

use crate::args::parse_decimal;
use crate::error::Error;
use crate::registry::{Field, FieldSchema};

pub const EIP712_DOMAIN_NAME: &str = "Cosmos Web3";
pub const EIP712_DOMAIN_VERSION: &str = "1.0.0";
pub const VERIFYING_CONTRACT: &str = "cosmos";
pub const SALT: &str = "0";

pub(crate) const DOMAIN_SCHEMA: FieldSchema = &[
    Field {
        name: "name",
        r#type: "string",
    },
    Field {
        name: "version",
        r#type: "string",
    },
    Field {
        name: "chainId",
        r#type: "uint256",
    },
    Field {
        name: "verifyingContract",
        r#type: "string",
    },
    Field {
        name: "salt",
        r#type: "string",
    },
];

/// Numeric EVM chain id, e.g. `1` for the BitBadges mainnet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainId(u64);

impl ChainId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        ChainId(id)
    }
}

impl FromStr for ChainId {
    type Err = Report<Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s)
            .and_then(|id| u64::try_from(id).ok())
            .map(ChainId)
            .ok_or_else(|| report!(Error::InvalidChainId(s.to_string())))
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub name: String,
    pub version: String,
    pub chain_id: u64,
    pub verifying_contract: String,
    pub salt: String,
}

pub fn make_domain(chain_id: impl Into<ChainId>) -> Domain {
    Domain {
        name: EIP712_DOMAIN_NAME.to_string(),
        version: EIP712_DOMAIN_VERSION.to_string(),
        chain_id: chain_id.into().as_u64(),
        verifying_contract: VERIFYING_CONTRACT.to_string(),
        salt: SALT.to_string(),
    }
}
