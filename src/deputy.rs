//! Deputy registry and resolution
//!
//! Each chain has a fixed set of mainnet deputy addresses, one per bridged
//! denom. The registry is built once at startup and never mutated; tests can
//! construct alternate registries through [`DeputyRegistry::new`].

use std::collections::BTreeMap;

use crate::address_codec::{BnbAddress, Chain, ChainAddress, MageAddress};
use crate::error::{AddressError, SwapToolError};

/// Mainnet Mage deputy addresses by denom.
const MAGE_DEPUTIES: [(&str, &str); 4] = [
    ("bnb", "mage1r4v2zdhdalfj2ydazallqvrus9fkphmgsa334z"),
    ("btcb", "mage14qsmvzprqvhwmgql9fr0u3zv9n2qla8zceelgq"),
    ("busd", "mage1hh4x3a4suu5zyaeauvmv7ypf7w9llwlfnrss4y"),
    ("xrpb", "mage1c0ju5vnwgpgxnrktfnkccuth9xqc68dcztq25g"),
];

/// Mainnet Binance Chain deputy addresses by denom.
const BNB_DEPUTIES: [(&str, &str); 4] = [
    ("bnb", "bnb1jh7uv2rm6339yue8k4mj9406k3509kr4wt5nxn"),
    ("btcb", "bnb1xz3xqf4p2ygrw9lhp5g5df4ep4nd20vsywnmpr"),
    ("busd", "bnb10zq89008gmedc6rrwzdfukjk94swynd7dl97w8"),
    ("xrpb", "bnb15jzuvvg2kf0fka3fl2c8rx0kc3g6wkmvsqhgnh"),
];

/// Immutable denom -> deputy address tables, one per chain.
#[derive(Debug, Clone)]
pub struct DeputyRegistry {
    mage: BTreeMap<String, MageAddress>,
    bnb: BTreeMap<String, BnbAddress>,
}

impl DeputyRegistry {
    /// Build a registry from explicit tables.
    pub fn new(
        mage: BTreeMap<String, MageAddress>,
        bnb: BTreeMap<String, BnbAddress>,
    ) -> Self {
        DeputyRegistry { mage, bnb }
    }

    /// Build the fixed mainnet registry.
    pub fn mainnet() -> Result<Self, AddressError> {
        let mut mage = BTreeMap::new();
        for (denom, addr) in MAGE_DEPUTIES {
            mage.insert(denom.to_string(), MageAddress::from_bech32(addr)?);
        }
        let mut bnb = BTreeMap::new();
        for (denom, addr) in BNB_DEPUTIES {
            bnb.insert(denom.to_string(), BnbAddress::from_bech32(addr)?);
        }
        Ok(DeputyRegistry { mage, bnb })
    }

    /// Known denoms, for help/diagnostic output.
    pub fn denoms(&self) -> Vec<&str> {
        self.mage.keys().map(String::as_str).collect()
    }

    /// Resolve a deputy on the Mage chain from a denom or a literal address.
    ///
    /// Registry lookup is exact and case-sensitive and takes precedence over
    /// parsing the token as a literal `mage1...` address.
    pub fn resolve_mage(&self, token: &str) -> Result<MageAddress, SwapToolError> {
        if let Some(deputy) = self.mage.get(token) {
            tracing::debug!(denom = token, deputy = %deputy, "resolved mage deputy from registry");
            return Ok(*deputy);
        }
        MageAddress::from_bech32(token).map_err(|source| SwapToolError::UnknownOrInvalidDeputy {
            token: token.to_string(),
            chain: Chain::Mage,
            source,
        })
    }

    /// Resolve a deputy on Binance Chain from a denom or a literal address.
    pub fn resolve_bnb(&self, token: &str) -> Result<BnbAddress, SwapToolError> {
        if let Some(deputy) = self.bnb.get(token) {
            tracing::debug!(denom = token, deputy = %deputy, "resolved bnb deputy from registry");
            return Ok(*deputy);
        }
        BnbAddress::from_bech32(token).map_err(|source| SwapToolError::UnknownOrInvalidDeputy {
            token: token.to_string(),
            chain: Chain::Bnb,
            source,
        })
    }

    /// Find the registry entry matching a Mage address by byte equality.
    pub fn find_mage_deputy(&self, addr: &MageAddress) -> Option<(&str, &MageAddress)> {
        self.mage
            .iter()
            .find(|(_, dep)| dep.as_bytes() == addr.as_bytes())
            .map(|(denom, dep)| (denom.as_str(), dep))
    }

    /// Find the registry entry matching a Binance Chain address by byte equality.
    pub fn find_bnb_deputy(&self, addr: &BnbAddress) -> Option<(&str, &BnbAddress)> {
        self.bnb
            .iter()
            .find(|(_, dep)| dep.as_bytes() == addr.as_bytes())
            .map(|(denom, dep)| (denom.as_str(), dep))
    }

    /// Find the registry entry matching a classified address on its own chain.
    pub fn find_deputy_for(&self, addr: &ChainAddress) -> Option<(&str, String)> {
        match addr {
            ChainAddress::Mage(a) => self
                .find_mage_deputy(a)
                .map(|(denom, dep)| (denom, dep.to_string())),
            ChainAddress::Bnb(a) => self
                .find_bnb_deputy(a)
                .map(|(denom, dep)| (denom, dep.to_string())),
        }
    }
}
