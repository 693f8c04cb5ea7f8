//! Messages of the BitBadges `badges` module.
//!
//! EIP712 field names of this module are camelCase and equal the argument names, so every
//! message here reads its decoded EIP712 fields with [Msg::from_args].

use bitbadges_proto::bitbadgeschain::badges as proto;
use error_stack::Result;

use crate::args::{Arg, Args};
use crate::error::Error;
use crate::msgs::Msg;
use crate::registry::MessageKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteCollection {
    pub creator: String,
    pub collection_id: u64,
}

impl Msg for DeleteCollection {
    const KIND: MessageKind = MessageKind::DeleteCollection;

    type Proto = proto::MsgDeleteCollection;

    fn from_args(args: &mut Args) -> Result<Self, Error> {
        Ok(DeleteCollection {
            creator: args.string("creator")?,
            collection_id: args.uint64("collectionId")?,
        })
    }

    fn to_proto(&self) -> Self::Proto {
        proto::MsgDeleteCollection {
            creator: self.creator.clone(),
            collection_id: self.collection_id,
        }
    }

    fn from_proto(proto: Self::Proto) -> Result<Self, Error> {
        Ok(DeleteCollection {
            creator: proto.creator,
            collection_id: proto.collection_id,
        })
    }

    fn eip712_fields(&self) -> Vec<(&'static str, Arg)> {
        vec![
            ("creator", self.creator.clone().into()),
            ("collectionId", self.collection_id.into()),
        ]
    }
}

/// Removes empty balances of `badge_ids` held by the accounts numbered in `addresses`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PruneBalances {
    pub creator: String,
    pub badge_ids: Vec<u64>,
    pub addresses: Vec<u64>,
}

impl Msg for PruneBalances {
    const KIND: MessageKind = MessageKind::PruneBalances;

    type Proto = proto::MsgPruneBalances;

    fn from_args(args: &mut Args) -> Result<Self, Error> {
        Ok(PruneBalances {
            creator: args.string("creator")?,
            badge_ids: args.uint64_list("badgeIds")?,
            addresses: args.uint64_list("addresses")?,
        })
    }

    fn to_proto(&self) -> Self::Proto {
        proto::MsgPruneBalances {
            creator: self.creator.clone(),
            badge_ids: self.badge_ids.clone(),
            addresses: self.addresses.clone(),
        }
    }

    fn from_proto(proto: Self::Proto) -> Result<Self, Error> {
        Ok(PruneBalances {
            creator: proto.creator,
            badge_ids: proto.badge_ids,
            addresses: proto.addresses,
        })
    }

    fn eip712_fields(&self) -> Vec<(&'static str, Arg)> {
        vec![
            ("creator", self.creator.clone().into()),
            ("badgeIds", self.badge_ids.clone().into()),
            ("addresses", self.addresses.clone().into()),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterAddresses {
    pub creator: String,
    pub addresses_to_register: Vec<String>,
}

impl Msg for RegisterAddresses {
    const KIND: MessageKind = MessageKind::RegisterAddresses;

    type Proto = proto::MsgRegisterAddresses;

    fn from_args(args: &mut Args) -> Result<Self, Error> {
        Ok(RegisterAddresses {
            creator: args.string("creator")?,
            addresses_to_register: args.string_list("addressesToRegister")?,
        })
    }

    fn to_proto(&self) -> Self::Proto {
        proto::MsgRegisterAddresses {
            creator: self.creator.clone(),
            addresses_to_register: self.addresses_to_register.clone(),
        }
    }

    fn from_proto(proto: Self::Proto) -> Result<Self, Error> {
        Ok(RegisterAddresses {
            creator: proto.creator,
            addresses_to_register: proto.addresses_to_register,
        })
    }

    fn eip712_fields(&self) -> Vec<(&'static str, Arg)> {
        vec![
            ("creator", self.creator.clone().into()),
            (
                "addressesToRegister",
                self.addresses_to_register.clone().into(),
            ),
        ]
    }
}

/// Asks to become (`add = true`) or stop being the manager of a badge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTransferManager {
    pub creator: String,
    pub badge_id: u64,
    pub add: bool,
}

impl Msg for RequestTransferManager {
    const KIND: MessageKind = MessageKind::RequestTransferManager;

    type Proto = proto::MsgRequestTransferManager;

    fn from_args(args: &mut Args) -> Result<Self, Error> {
        Ok(RequestTransferManager {
            creator: args.string("creator")?,
            badge_id: args.uint64("badgeId")?,
            add: args.boolean("add")?,
        })
    }

    fn to_proto(&self) -> Self::Proto {
        proto::MsgRequestTransferManager {
            creator: self.creator.clone(),
            badge_id: self.badge_id,
            add: self.add,
        }
    }

    fn from_proto(proto: Self::Proto) -> Result<Self, Error> {
        Ok(RequestTransferManager {
            creator: proto.creator,
            badge_id: proto.badge_id,
            add: proto.add,
        })
    }

    fn eip712_fields(&self) -> Vec<(&'static str, Arg)> {
        vec![
            ("creator", self.creator.clone().into()),
            ("badgeId", self.badge_id.into()),
            ("add", self.add.into()),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelfDestructBadge {
    pub creator: String,
    pub badge_id: u64,
}

impl Msg for SelfDestructBadge {
    const KIND: MessageKind = MessageKind::SelfDestructBadge;

    type Proto = proto::MsgSelfDestructBadge;

    fn from_args(args: &mut Args) -> Result<Self, Error> {
        Ok(SelfDestructBadge {
            creator: args.string("creator")?,
            badge_id: args.uint64("badgeId")?,
        })
    }

    fn to_proto(&self) -> Self::Proto {
        proto::MsgSelfDestructBadge {
            creator: self.creator.clone(),
            badge_id: self.badge_id,
        }
    }

    fn from_proto(proto: Self::Proto) -> Result<Self, Error> {
        Ok(SelfDestructBadge {
            creator: proto.creator,
            badge_id: proto.badge_id,
        })
    }

    fn eip712_fields(&self) -> Vec<(&'static str, Arg)> {
        vec![
            ("creator", self.creator.clone().into()),
            ("badgeId", self.badge_id.into()),
        ]
    }
}

/// Hands the manager role of a badge to the account numbered `address`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferManager {
    pub creator: String,
    pub badge_id: u64,
    pub address: u64,
}

impl Msg for TransferManager {
    const KIND: MessageKind = MessageKind::TransferManager;

    type Proto = proto::MsgTransferManager;

    fn from_args(args: &mut Args) -> Result<Self, Error> {
        Ok(TransferManager {
            creator: args.string("creator")?,
            badge_id: args.uint64("badgeId")?,
            address: args.uint64("address")?,
        })
    }

    fn to_proto(&self) -> Self::Proto {
        proto::MsgTransferManager {
            creator: self.creator.clone(),
            badge_id: self.badge_id,
            address: self.address,
        }
    }

    fn from_proto(proto: Self::Proto) -> Result<Self, Error> {
        Ok(TransferManager {
            creator: proto.creator,
            badge_id: proto.badge_id,
            address: proto.address,
        })
    }

    fn eip712_fields(&self) -> Vec<(&'static str, Arg)> {
        vec![
            ("creator", self.creator.clone().into()),
            ("badgeId", self.badge_id.into()),
            ("address", self.address.into()),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateBytes {
    pub creator: String,
    pub badge_id: u64,
    pub new_bytes: Vec<u8>,
}

impl Msg for UpdateBytes {
    const KIND: MessageKind = MessageKind::UpdateBytes;

    type Proto = proto::MsgUpdateBytes;

    fn from_args(args: &mut Args) -> Result<Self, Error> {
        Ok(UpdateBytes {
            creator: args.string("creator")?,
            badge_id: args.uint64("badgeId")?,
            new_bytes: args.bytes("newBytes")?,
        })
    }

    fn to_proto(&self) -> Self::Proto {
        proto::MsgUpdateBytes {
            creator: self.creator.clone(),
            badge_id: self.badge_id,
            new_bytes: self.new_bytes.clone(),
        }
    }

    fn from_proto(proto: Self::Proto) -> Result<Self, Error> {
        Ok(UpdateBytes {
            creator: proto.creator,
            badge_id: proto.badge_id,
            new_bytes: proto.new_bytes,
        })
    }

    fn eip712_fields(&self) -> Vec<(&'static str, Arg)> {
        vec![
            ("creator", self.creator.clone().into()),
            ("badgeId", self.badge_id.into()),
            ("newBytes", Arg::Bytes(self.new_bytes.clone())),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdatePermissions {
    pub creator: String,
    pub badge_id: u64,
    pub permissions: u64,
}

impl Msg for UpdatePermissions {
    const KIND: MessageKind = MessageKind::UpdatePermissions;

    type Proto = proto::MsgUpdatePermissions;

    fn from_args(args: &mut Args) -> Result<Self, Error> {
        Ok(UpdatePermissions {
            creator: args.string("creator")?,
            badge_id: args.uint64("badgeId")?,
            permissions: args.uint64("permissions")?,
        })
    }

    fn to_proto(&self) -> Self::Proto {
        proto::MsgUpdatePermissions {
            creator: self.creator.clone(),
            badge_id: self.badge_id,
            permissions: self.permissions,
        }
    }

    fn from_proto(proto: Self::Proto) -> Result<Self, Error> {
        Ok(UpdatePermissions {
            creator: proto.creator,
            badge_id: proto.badge_id,
            permissions: proto.permissions,
        })
    }

    fn eip712_fields(&self) -> Vec<(&'static str, Arg)> {
        vec![
            ("creator", self.creator.clone().into()),
            ("badgeId", self.badge_id.into()),
            ("permissions", self.permissions.into()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{PruneBalances, UpdateBytes};
    use crate::args::Args;
    use crate::msgs::Msg;
    use crate::registry::MessageKind;

    #[test]
    fn prune_balances_should_accept_mixed_number_forms() {
        let mut args = Args::from_json(
            MessageKind::PruneBalances,
            json!({"creator": "c", "badgeIds": [1, "2"], "addresses": []}),
        )
        .unwrap();

        let msg = PruneBalances::from_args(&mut args).unwrap();

        assert_eq!(msg.badge_ids, vec![1, 2]);
        assert!(msg.addresses.is_empty());
    }

    #[test]
    fn update_bytes_should_keep_raw_bytes_in_proto() {
        let msg = UpdateBytes {
            creator: "c".to_string(),
            badge_id: 1,
            new_bytes: vec![1, 2, 3],
        };

        assert_eq!(msg.to_proto().new_bytes, vec![1, 2, 3]);
    }
}
