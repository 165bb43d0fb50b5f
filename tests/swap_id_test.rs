//! End-to-end swap ID scenarios
//!
//! Exercises the full pipeline (hash decode -> classify -> deputy resolution ->
//! anti-deputy check -> both digests) against the mainnet deputy registry.

use swaptool::{classify_address, swap_ids_from_args, Chain, DeputyRegistry, SwapToolError};

const RNH: &str = "464105c245199d02a4289475b8b231f3f73918b6f0fdad898825186950d46f36";

fn mainnet() -> DeputyRegistry {
    DeputyRegistry::mainnet().expect("mainnet deputy table is valid")
}

// ============================================================================
// Success Scenarios
// ============================================================================

#[test]
fn test_bnb_sender_with_busd_deputy() {
    let registry = mainnet();
    let sender = "bnb10rr5f8m73rxgnz9afvnfn7fn9pwhfskem5kn0x";

    assert_eq!(classify_address(sender).unwrap().chain(), Chain::Bnb);

    let pair = swap_ids_from_args(&registry, RNH, sender, "busd").unwrap();

    // bnb side: sender is the user, other-chain field is the mage busd deputy
    assert_eq!(
        hex::encode(pair.bnb),
        "f7cf6d5771400ff786ed620c51d07b21edd0689b9096247a18111fa81f52f3fa"
    );
    // mage side: sender is the deputy, other-chain field is the user
    assert_eq!(
        hex::encode(pair.mage),
        "0eb2ee6f942f1da45b5876e66bfedd605a4d093e50c039429469908c7672669b"
    );
    assert_ne!(pair.mage, pair.bnb);
}

#[test]
fn test_same_inputs_are_deterministic() {
    let registry = mainnet();
    let sender = "bnb10rr5f8m73rxgnz9afvnfn7fn9pwhfskem5kn0x";

    let a = swap_ids_from_args(&registry, RNH, sender, "busd").unwrap();
    let b = swap_ids_from_args(&registry, RNH, sender, "busd").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_mage_sender_mirror_scenario() {
    let registry = mainnet();
    let pair = swap_ids_from_args(
        &registry,
        RNH,
        "mage10a5gh6dc86kwnn5y332lgmqn8zr32qmprzd82x",
        "bnb",
    )
    .unwrap();

    assert_eq!(
        hex::encode(pair.mage),
        "d8c1759ff10b037afe310292bfcba4e837d4f76a6bc9a3527ed584e6e2039448"
    );
    assert_eq!(
        hex::encode(pair.bnb),
        "1a8f733f5058bea7064113c3cf364a85b4e887e8f65a2b3c5509b1a5cb7392c3"
    );
}

// ============================================================================
// Failure Scenarios
// ============================================================================

#[test]
fn test_sender_equal_to_bnb_denom_deputy_fails() {
    let registry = mainnet();

    // The mainnet mage-side "bnb" deputy as the original sender
    let err = swap_ids_from_args(
        &registry,
        RNH,
        "mage1r4v2zdhdalfj2ydazallqvrus9fkphmgsa334z",
        "busd",
    )
    .unwrap_err();

    match err {
        SwapToolError::SenderIsDeputy { denom, deputy } => {
            assert_eq!(denom, "bnb");
            assert_eq!(deputy, "mage1r4v2zdhdalfj2ydazallqvrus9fkphmgsa334z");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_bnb_side_deputy_as_sender_fails() {
    let registry = mainnet();
    let err = swap_ids_from_args(
        &registry,
        RNH,
        "bnb1xz3xqf4p2ygrw9lhp5g5df4ep4nd20vsywnmpr",
        "btcb",
    )
    .unwrap_err();
    assert!(matches!(err, SwapToolError::SenderIsDeputy { .. }));
}

#[test]
fn test_non_hex_hash_fails_first() {
    let registry = mainnet();
    let err = swap_ids_from_args(
        &registry,
        "464105xx45199d02",
        "bnb10rr5f8m73rxgnz9afvnfn7fn9pwhfskem5kn0x",
        "busd",
    )
    .unwrap_err();
    match err {
        SwapToolError::MalformedHashInput { input, .. } => {
            assert_eq!(input, "464105xx45199d02");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_undecodable_sender_fails() {
    let registry = mainnet();
    let err = swap_ids_from_args(&registry, RNH, "cosmos1qqqsyqcyq5rqwzqfys8f67", "busd")
        .unwrap_err();
    assert!(matches!(
        err,
        SwapToolError::AmbiguousOrInvalidAddress { .. }
    ));
}

#[test]
fn test_deputy_from_same_chain_as_sender_fails() {
    // A mage sender needs a bnb deputy; a mage literal cannot resolve
    let registry = mainnet();
    let err = swap_ids_from_args(
        &registry,
        RNH,
        "mage10a5gh6dc86kwnn5y332lgmqn8zr32qmprzd82x",
        "mage14wswjunkaj05gk60rmq8fjud9v6au2eeugsyjw",
    )
    .unwrap_err();
    match err {
        SwapToolError::UnknownOrInvalidDeputy { chain, .. } => assert_eq!(chain, Chain::Bnb),
        other => panic!("unexpected error: {other}"),
    }
}
