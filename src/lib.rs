//! Swap ID calculator for the Mage <-> Binance Chain BEP3 bridge.
//!
//! A BEP3 swap exists as two records, one per chain, correlated by a swap ID:
//! `hash(swap.RandomNumberHash, swap.Sender, swap.SenderOtherChain)`. One of
//! the senders is always a bridge deputy, the other is the user who initiated
//! the first swap (the original sender). Corresponding swaps on each chain
//! share the random number hash but swap the address roles.
//!
//! This crate provides:
//!
//! - **Address codec** - bech32 decoding for both chains and classification of
//!   an address string into exactly one chain
//! - **Deputy registry** - the fixed mainnet deputy tables and denom/address
//!   resolution against them
//! - **Swap hashes** - each chain's byte-exact swap ID digest
//! - **Correlator** - the full pipeline producing both chains' swap IDs for
//!   one logical swap

pub mod address_codec;
pub mod deputy;
pub mod error;
pub mod hash;
pub mod swap;

pub use address_codec::{classify_address, BnbAddress, Chain, ChainAddress, MageAddress};
pub use deputy::DeputyRegistry;
pub use error::{AddressError, SwapToolError};
pub use hash::{bnb_swap_id, mage_swap_id};
pub use swap::{compute_swap_ids, swap_ids_from_args, SwapIdPair};
