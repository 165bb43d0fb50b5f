//! Bech32 account address codecs for the two bridge chains
//!
//! Mage and Binance Chain both use 20-byte account addresses encoded as
//! classic bech32 with disjoint human-readable prefixes (`mage` / `bnb`).
//! The codec here only consumes the bech32 crate; checksum and base32 logic
//! stay in that crate.

use std::fmt;

use bech32::{FromBase32, ToBase32, Variant};

use crate::error::{AddressError, SwapToolError};

/// Bech32 prefix for Mage account addresses
pub const MAGE_HRP: &str = "mage";

/// Bech32 prefix for Binance Chain account addresses
pub const BNB_HRP: &str = "bnb";

/// Which of the two bridge chains an address or deputy lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chain {
    Mage,
    Bnb,
}

impl Chain {
    /// The counter chain of a swap.
    pub fn other(self) -> Chain {
        match self {
            Chain::Mage => Chain::Bnb,
            Chain::Bnb => Chain::Mage,
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chain::Mage => write!(f, "mage"),
            Chain::Bnb => write!(f, "bnb"),
        }
    }
}

/// A 20-byte Mage account address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MageAddress([u8; 20]);

/// A 20-byte Binance Chain account address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BnbAddress([u8; 20]);

impl MageAddress {
    /// Decode from a `mage1...` bech32 string.
    pub fn from_bech32(addr: &str) -> Result<Self, AddressError> {
        Ok(MageAddress(decode_account_address(addr, MAGE_HRP)?))
    }

    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        MageAddress(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl BnbAddress {
    /// Decode from a `bnb1...` bech32 string.
    pub fn from_bech32(addr: &str) -> Result<Self, AddressError> {
        Ok(BnbAddress(decode_account_address(addr, BNB_HRP)?))
    }

    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        BnbAddress(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for MageAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", encode_account_address(&self.0, MAGE_HRP))
    }
}

impl fmt::Display for BnbAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", encode_account_address(&self.0, BNB_HRP))
    }
}

/// An account address tagged with the chain it decoded under.
///
/// Produced by [`classify_address`]; the variants are disjoint because the two
/// chains' prefixes are disjoint, but classification never assumes that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainAddress {
    Mage(MageAddress),
    Bnb(BnbAddress),
}

impl ChainAddress {
    pub fn chain(&self) -> Chain {
        match self {
            ChainAddress::Mage(_) => Chain::Mage,
            ChainAddress::Bnb(_) => Chain::Bnb,
        }
    }
}

impl fmt::Display for ChainAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainAddress::Mage(a) => a.fmt(f),
            ChainAddress::Bnb(a) => a.fmt(f),
        }
    }
}

/// Classify an address string as belonging to exactly one chain.
///
/// Both chains' decoders are tried independently. Exactly one success wins;
/// both failing is reported with both underlying errors, and both succeeding
/// is refused rather than tie-broken (the protocol never defines that case).
pub fn classify_address(addr: &str) -> Result<ChainAddress, SwapToolError> {
    let mage = MageAddress::from_bech32(addr);
    let bnb = BnbAddress::from_bech32(addr);

    match (mage, bnb) {
        (Ok(a), Err(_)) => {
            tracing::debug!(address = %a, "classified as mage address");
            Ok(ChainAddress::Mage(a))
        }
        (Err(_), Ok(a)) => {
            tracing::debug!(address = %a, "classified as bnb address");
            Ok(ChainAddress::Bnb(a))
        }
        (Err(mage_err), Err(bnb_err)) => Err(SwapToolError::AmbiguousOrInvalidAddress {
            address: addr.to_string(),
            mage_err,
            bnb_err,
        }),
        (Ok(_), Ok(_)) => Err(SwapToolError::AmbiguousAddress {
            address: addr.to_string(),
        }),
    }
}

fn decode_account_address(addr: &str, expected_hrp: &'static str) -> Result<[u8; 20], AddressError> {
    let (hrp, data, variant) = bech32::decode(addr)?;

    if hrp != expected_hrp {
        return Err(AddressError::WrongPrefix {
            expected: expected_hrp,
            found: hrp,
        });
    }
    if variant != Variant::Bech32 {
        return Err(AddressError::WrongVariant);
    }

    let bytes = Vec::<u8>::from_base32(&data)?;
    if bytes.len() != 20 {
        return Err(AddressError::InvalidLength { len: bytes.len() });
    }

    let mut result = [0u8; 20];
    result.copy_from_slice(&bytes);
    Ok(result)
}

fn encode_account_address(bytes: &[u8; 20], hrp: &str) -> String {
    // Infallible for a valid static hrp; an empty string would only arise from
    // a bech32 crate defect.
    bech32::encode(hrp, bytes.to_base32(), Variant::Bech32).unwrap_or_default()
}
