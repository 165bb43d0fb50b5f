//! Per-chain swap ID digests
//!
//! Each chain derives a swap's ID as
//! `SHA-256(randomNumberHash || senderAddressBytes || lowercase(senderOtherChain))`
//! where `senderOtherChain` is the counter-party's address string on the other
//! chain. The byte layout is fixed by each chain's protocol and must match it
//! exactly; the counter-party chain computes the same digest independently.

use sha2::{Digest, Sha256};

use crate::address_codec::{BnbAddress, MageAddress};

/// Swap ID as the Mage chain computes it.
pub fn mage_swap_id(
    random_number_hash: &[u8],
    sender: &MageAddress,
    sender_other_chain: &str,
) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(random_number_hash);
    hasher.update(sender.as_bytes());
    hasher.update(sender_other_chain.to_lowercase().as_bytes());
    hasher.finalize().into()
}

/// Swap ID as Binance Chain computes it.
pub fn bnb_swap_id(
    random_number_hash: &[u8],
    sender: &BnbAddress,
    sender_other_chain: &str,
) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(random_number_hash);
    hasher.update(sender.as_bytes());
    hasher.update(sender_other_chain.to_lowercase().as_bytes());
    hasher.finalize().into()
}
