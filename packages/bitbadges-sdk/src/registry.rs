//! Static tables mapping every message kind to its EIP712 field schema and protobuf type path.
//!
//! The badges module was published under two protobuf namespaces. Each namespace gets its own
//! [Registry] and callers pick one through [SchemaVersion]; the registry never guesses.

use error_stack::{report, Result};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::Error;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum MessageKind {
    DeleteCollection,
    PruneBalances,
    RegisterAddresses,
    RequestTransferManager,
    SelfDestructBadge,
    TransferManager,
    UpdateBytes,
    UpdatePermissions,
    MsgSend,
    MsgVote,
    MsgExecuteContractCompat,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SchemaVersion {
    /// `trevormil.bitbadgeschain.*`
    Legacy,
    /// `bitbadges.bitbadgeschain.*`
    #[default]
    Current,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub r#type: &'static str,
}

const fn field(name: &'static str, r#type: &'static str) -> Field {
    Field { name, r#type }
}

/// Ordered EIP712 fields of a struct type. The order is part of the type hash.
pub type FieldSchema = &'static [Field];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub kind: MessageKind,
    /// Fully qualified protobuf message name, without the leading `/` of a type URL.
    pub path: &'static str,
    /// The `type` tag of the EIP712 `{type, value}` envelope.
    pub amino_type: &'static str,
    /// Fields of the `MsgValue` EIP712 type.
    pub schema: FieldSchema,
    /// Struct types referenced from `schema`.
    pub nested: &'static [(&'static str, FieldSchema)],
}

impl Entry {
    pub fn type_url(&self) -> String {
        format!("/{}", self.path)
    }

    pub fn nested_schema(&self, type_name: &str) -> Option<FieldSchema> {
        self.nested
            .iter()
            .find(|(name, _)| *name == type_name)
            .map(|(_, schema)| *schema)
    }
}

const DELETE_COLLECTION: FieldSchema = &[
    field("creator", "string"),
    field("collectionId", "uint64"),
];

const PRUNE_BALANCES: FieldSchema = &[
    field("creator", "string"),
    field("badgeIds", "uint64[]"),
    field("addresses", "uint64[]"),
];

const REGISTER_ADDRESSES: FieldSchema = &[
    field("creator", "string"),
    field("addressesToRegister", "string[]"),
];

const REQUEST_TRANSFER_MANAGER: FieldSchema = &[
    field("creator", "string"),
    field("badgeId", "uint64"),
    field("add", "bool"),
];

const SELF_DESTRUCT_BADGE: FieldSchema = &[field("creator", "string"), field("badgeId", "uint64")];

const TRANSFER_MANAGER: FieldSchema = &[
    field("creator", "string"),
    field("badgeId", "uint64"),
    field("address", "uint64"),
];

const UPDATE_BYTES: FieldSchema = &[
    field("creator", "string"),
    field("badgeId", "uint64"),
    field("newBytes", "bytes"),
];

const UPDATE_PERMISSIONS: FieldSchema = &[
    field("creator", "string"),
    field("badgeId", "uint64"),
    field("permissions", "uint64"),
];

const MSG_SEND: FieldSchema = &[
    field("from_address", "string"),
    field("to_address", "string"),
    field("amount", "TypeAmount[]"),
];

const TYPE_AMOUNT: FieldSchema = &[field("denom", "string"), field("amount", "string")];

const MSG_VOTE: FieldSchema = &[
    field("proposal_id", "uint64"),
    field("voter", "string"),
    field("option", "int32"),
];

const MSG_EXECUTE_CONTRACT_COMPAT: FieldSchema = &[
    field("sender", "string"),
    field("contract", "string"),
    field("msg", "string"),
    field("funds", "string"),
];

const MSG_SEND_ENTRY: Entry = Entry {
    kind: MessageKind::MsgSend,
    path: "cosmos.bank.v1beta1.MsgSend",
    amino_type: "cosmos-sdk/MsgSend",
    schema: MSG_SEND,
    nested: &[("TypeAmount", TYPE_AMOUNT)],
};

const MSG_VOTE_ENTRY: Entry = Entry {
    kind: MessageKind::MsgVote,
    path: "cosmos.gov.v1beta1.MsgVote",
    amino_type: "cosmos-sdk/MsgVote",
    schema: MSG_VOTE,
    nested: &[],
};

const MSG_EXECUTE_CONTRACT_COMPAT_ENTRY: Entry = Entry {
    kind: MessageKind::MsgExecuteContractCompat,
    path: "bitbadges.bitbadgeschain.wasmx.MsgExecuteContractCompat",
    amino_type: "wasmx/ExecuteContractCompat",
    schema: MSG_EXECUTE_CONTRACT_COMPAT,
    nested: &[],
};

macro_rules! badges_entry {
    ($namespace:literal, $kind:ident, $schema:ident) => {
        Entry {
            kind: MessageKind::$kind,
            path: concat!($namespace, ".bitbadgeschain.badges.Msg", stringify!($kind)),
            amino_type: concat!("badges/", stringify!($kind)),
            schema: $schema,
            nested: &[],
        }
    };
}

macro_rules! registry_entries {
    ($namespace:literal $(, $extra:expr)* $(,)?) => {
        &[
            badges_entry!($namespace, DeleteCollection, DELETE_COLLECTION),
            badges_entry!($namespace, PruneBalances, PRUNE_BALANCES),
            badges_entry!($namespace, RegisterAddresses, REGISTER_ADDRESSES),
            badges_entry!($namespace, RequestTransferManager, REQUEST_TRANSFER_MANAGER),
            badges_entry!($namespace, SelfDestructBadge, SELF_DESTRUCT_BADGE),
            badges_entry!($namespace, TransferManager, TRANSFER_MANAGER),
            badges_entry!($namespace, UpdateBytes, UPDATE_BYTES),
            badges_entry!($namespace, UpdatePermissions, UPDATE_PERMISSIONS),
            MSG_SEND_ENTRY,
            MSG_VOTE_ENTRY,
            $($extra,)*
        ]
    };
}

static LEGACY: Registry = Registry {
    version: SchemaVersion::Legacy,
    entries: registry_entries!("trevormil"),
};

static CURRENT: Registry = Registry {
    version: SchemaVersion::Current,
    entries: registry_entries!("bitbadges", MSG_EXECUTE_CONTRACT_COMPAT_ENTRY),
};

#[derive(Debug, PartialEq, Eq)]
pub struct Registry {
    version: SchemaVersion,
    entries: &'static [Entry],
}

impl Registry {
    pub fn for_version(version: SchemaVersion) -> &'static Registry {
        match version {
            SchemaVersion::Legacy => &LEGACY,
            SchemaVersion::Current => &CURRENT,
        }
    }

    pub fn version(&self) -> SchemaVersion {
        self.version
    }

    pub fn entries(&self) -> impl Iterator<Item = &'static Entry> {
        self.entries.iter()
    }

    pub fn lookup(&self, kind: MessageKind) -> Result<&'static Entry, Error> {
        self.find(|entry| entry.kind == kind, kind.to_string())
    }

    pub fn lookup_path(&self, path: &str) -> Result<&'static Entry, Error> {
        let path = path.strip_prefix('/').unwrap_or(path);
        self.find(|entry| entry.path == path, path.to_string())
    }

    pub fn lookup_type(&self, amino_type: &str) -> Result<&'static Entry, Error> {
        self.find(|entry| entry.amino_type == amino_type, amino_type.to_string())
    }

    fn find(
        &self,
        predicate: impl Fn(&Entry) -> bool,
        name: String,
    ) -> Result<&'static Entry, Error> {
        let entries: &'static [Entry] = self.entries;

        entries.iter().find(|entry| predicate(entry)).ok_or_else(|| {
            report!(Error::UnknownMessageKind(name))
                .attach_printable(format!("{{ schema_version = {} }}", self.version))
        })
    }
}
