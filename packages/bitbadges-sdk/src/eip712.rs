//! The EIP712 typed-data bundle handed to Ethereum wallets, and its signing digest.
//!
//! A bundle carries a single `MsgValue` type, so every message of one EIP712 transaction must be
//! of the same kind.

use std::collections::BTreeMap;

use error_stack::{report, Result};
use ethers_core::types::transaction::eip712::{hash_struct, Eip712DomainType};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha3::{Digest, Keccak256};

use crate::domain::{Domain, DOMAIN_SCHEMA};
use crate::error::Error;
use crate::registry::{Entry, Field, FieldSchema};

pub const DOMAIN_TYPE: &str = "EIP712Domain";
pub const PRIMARY_TYPE: &str = "Tx";
pub const MSG_VALUE_TYPE: &str = "MsgValue";

const TX: FieldSchema = &[
    Field {
        name: "account_number",
        r#type: "string",
    },
    Field {
        name: "chain_id",
        r#type: "string",
    },
    Field {
        name: "fee",
        r#type: "Fee",
    },
    Field {
        name: "memo",
        r#type: "string",
    },
    Field {
        name: "msgs",
        r#type: "Msg[]",
    },
    Field {
        name: "sequence",
        r#type: "string",
    },
];

const FEE: FieldSchema = &[
    Field {
        name: "feePayer",
        r#type: "string",
    },
    Field {
        name: "amount",
        r#type: "Coin[]",
    },
    Field {
        name: "gas",
        r#type: "string",
    },
];

const COIN: FieldSchema = &[
    Field {
        name: "denom",
        r#type: "string",
    },
    Field {
        name: "amount",
        r#type: "string",
    },
];

const MSG: FieldSchema = &[
    Field {
        name: "type",
        r#type: "string",
    },
    Field {
        name: "value",
        r#type: MSG_VALUE_TYPE,
    },
];

pub type Types = BTreeMap<String, Vec<Eip712DomainType>>;

/// The full type table for transactions carrying messages of the entry's kind.
pub fn eip712_types(entry: &Entry) -> Types {
    let shared = [
        (DOMAIN_TYPE, DOMAIN_SCHEMA),
        (PRIMARY_TYPE, TX),
        ("Fee", FEE),
        ("Coin", COIN),
        ("Msg", MSG),
        (MSG_VALUE_TYPE, entry.schema),
    ];

    shared
        .into_iter()
        .chain(entry.nested.iter().copied())
        .map(|(name, schema)| (name.to_string(), domain_types(schema)))
        .collect()
}

fn domain_types(schema: FieldSchema) -> Vec<Eip712DomainType> {
    schema
        .iter()
        .map(|field| Eip712DomainType {
            name: field.name.to_string(),
            r#type: field.r#type.to_string(),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedData {
    pub types: Types,
    pub primary_type: String,
    pub domain: Domain,
    pub message: Value,
}

impl TypedData {
    pub fn new(domain: Domain, entry: &Entry, message: Value) -> Self {
        Self {
            types: eip712_types(entry),
            primary_type: PRIMARY_TYPE.to_string(),
            domain,
            message,
        }
    }

    pub fn domain_separator(&self) -> Result<[u8; 32], Error> {
        let domain = serde_json::to_value(&self.domain).map_err(|err| {
            report!(Error::SerializationFailure(DOMAIN_TYPE.to_string()))
                .attach_printable(err.to_string())
        })?;

        self.hash(DOMAIN_TYPE, &domain)
    }

    pub fn struct_hash(&self) -> Result<[u8; 32], Error> {
        self.hash(&self.primary_type, &self.message)
    }

    /// `keccak256(0x19 0x01 ‖ domainSeparator ‖ hashStruct(message))`, the value wallets sign.
    pub fn digest(&self) -> Result<[u8; 32], Error> {
        let mut hasher = Keccak256::new();
        hasher.update([0x19u8, 0x01]);
        hasher.update(self.domain_separator()?);
        hasher.update(self.struct_hash()?);

        Ok(hasher.finalize().into())
    }

    fn hash(&self, type_name: &str, data: &Value) -> Result<[u8; 32], Error> {
        hash_struct(type_name, data, &self.types).map_err(|err| {
            report!(Error::SerializationFailure(type_name.to_string()))
                .attach_printable(err.to_string())
        })
    }
}
