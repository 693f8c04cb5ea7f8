//! Protobuf types of the BitBadges chain.
//!
//! The badges module was published under two protobuf packages over the life of the chain,
//! `trevormil.bitbadgeschain.badges` and `bitbadges.bitbadgeschain.badges`. Both carry the same
//! message layouts, so a single set of types is generated here and the type URL is chosen when
//! the message is wrapped into an `Any`.

pub mod bitbadgeschain {
    pub mod badges {
        include!("prost/bitbadges.bitbadgeschain.badges.rs");
    }

    pub mod wasmx {
        include!("prost/bitbadges.bitbadgeschain.wasmx.rs");
    }
}

pub mod ethermint {
    pub mod crypto {
        pub mod v1 {
            pub mod ethsecp256k1 {
                include!("prost/ethermint.crypto.v1.ethsecp256k1.rs");
            }
        }
    }

    pub mod types {
        pub mod v1 {
            include!("prost/ethermint.types.v1.rs");
        }
    }
}
