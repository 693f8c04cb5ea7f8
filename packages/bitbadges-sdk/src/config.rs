use serde::{Deserialize, Serialize};

use crate::registry::SchemaVersion;
use crate::types::{Chain, Fee};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub schema_version: SchemaVersion,
    pub memo: String,
    pub chain: Chain,
    pub fee: Fee,
}
