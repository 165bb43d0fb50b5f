//! Swap ID correlation
//!
//! Produces both chains' swap IDs for one logical swap. Each chain's record
//! names its own local sender and the counter-party's address on the other
//! chain, so the two digests take the same inputs with the roles swapped:
//! on the original sender's chain the sender is the user and the other-chain
//! field is the deputy's string form; on the deputy's chain the roles reverse.

use crate::address_codec::{classify_address, ChainAddress};
use crate::deputy::DeputyRegistry;
use crate::error::SwapToolError;
use crate::hash::{bnb_swap_id, mage_swap_id};

/// Both chains' swap IDs for one logical swap.
///
/// The two digests describe the same swap from each chain's perspective and
/// are not expected to be equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapIdPair {
    pub mage: [u8; 32],
    pub bnb: [u8; 32],
}

/// Compute both chains' swap IDs for a classified original sender.
///
/// The original sender must not itself be a deputy on its own chain; a genuine
/// swap always pairs a user with a deputy, so a deputy sender means the inputs
/// describe no real swap.
pub fn compute_swap_ids(
    registry: &DeputyRegistry,
    random_number_hash: &[u8],
    sender: &ChainAddress,
    deputy_arg: &str,
) -> Result<SwapIdPair, SwapToolError> {
    if let Some((denom, deputy)) = registry.find_deputy_for(sender) {
        return Err(SwapToolError::SenderIsDeputy {
            denom: denom.to_string(),
            deputy,
        });
    }

    tracing::debug!(
        sender_chain = %sender.chain(),
        deputy_chain = %sender.chain().other(),
        "resolving deputy on counter chain"
    );

    let pair = match sender {
        ChainAddress::Mage(sender) => {
            let deputy = registry.resolve_bnb(deputy_arg)?;
            SwapIdPair {
                mage: mage_swap_id(random_number_hash, sender, &deputy.to_string()),
                bnb: bnb_swap_id(random_number_hash, &deputy, &sender.to_string()),
            }
        }
        ChainAddress::Bnb(sender) => {
            let deputy = registry.resolve_mage(deputy_arg)?;
            SwapIdPair {
                bnb: bnb_swap_id(random_number_hash, sender, &deputy.to_string()),
                mage: mage_swap_id(random_number_hash, &deputy, &sender.to_string()),
            }
        }
    };

    Ok(pair)
}

/// Full string-level pipeline: hex-decode the random number hash, classify the
/// sender, then correlate.
///
/// The hash is validated before any address work so malformed hex fails fast.
pub fn swap_ids_from_args(
    registry: &DeputyRegistry,
    random_number_hash_hex: &str,
    sender: &str,
    deputy_arg: &str,
) -> Result<SwapIdPair, SwapToolError> {
    let random_number_hash =
        hex::decode(random_number_hash_hex).map_err(|source| SwapToolError::MalformedHashInput {
            input: random_number_hash_hex.to_string(),
            source,
        })?;

    let sender = classify_address(sender)?;
    tracing::debug!(sender = %sender, chain = %sender.chain(), "original sender classified");

    compute_swap_ids(registry, &random_number_hash, &sender, deputy_arg)
}
