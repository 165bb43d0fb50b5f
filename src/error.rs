//! Error types for swap ID calculation
//!
//! Every error here is terminal for a single invocation: all of them stem from
//! invalid input rather than transient conditions, so nothing is retried.

use thiserror::Error;

use crate::address_codec::Chain;

/// Failure to decode or validate a single chain's bech32 address.
#[derive(Error, Debug)]
pub enum AddressError {
    #[error("invalid bech32: {0}")]
    Bech32(#[from] bech32::Error),

    #[error("wrong address prefix: expected {expected:?}, got {found:?}")]
    WrongPrefix { expected: &'static str, found: String },

    #[error("wrong bech32 variant: account addresses use classic bech32")]
    WrongVariant,

    #[error("invalid address length: expected 20 bytes, got {len}")]
    InvalidLength { len: usize },
}

/// Top-level error taxonomy for the swap ID pipeline.
#[derive(Error, Debug)]
pub enum SwapToolError {
    #[error("malformed random number hash {input:?}: {source}")]
    MalformedHashInput {
        input: String,
        source: hex::FromHexError,
    },

    #[error(
        "cannot decode original sender address {address:?} as either mage or bnb: \
         ({mage_err}) ({bnb_err})"
    )]
    AmbiguousOrInvalidAddress {
        address: String,
        mage_err: AddressError,
        bnb_err: AddressError,
    },

    /// A string that decodes under both chains' rules. The bridge protocol
    /// never defines this case (the two prefixes are disjoint), so the tool
    /// refuses to guess rather than pick a chain.
    #[error("address {address:?} decodes as both a mage and a bnb address; refusing to guess")]
    AmbiguousAddress { address: String },

    #[error("cannot resolve deputy {token:?} as a known denom or a {chain} address: {source}")]
    UnknownOrInvalidDeputy {
        token: String,
        chain: Chain,
        source: AddressError,
    },

    #[error("original sender address cannot be a deputy address: {deputy} ({denom} deputy)")]
    SenderIsDeputy { denom: String, deputy: String },
}
