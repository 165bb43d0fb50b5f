//! Swap ID calculator CLI
//!
//! A swap's ID is `hash(swap.RandomNumberHash, swap.Sender, swap.SenderOtherChain)`.
//! One of the senders is always the deputy's address, the other is the user
//! who initiated the first swap (the original sender). Corresponding swaps on
//! each chain have the same random number hash, but switched address order.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use swaptool::{swap_ids_from_args, DeputyRegistry};

#[derive(Parser)]
#[command(name = "mage-swaptool")]
#[command(about = "Calculate bnb and mage swap IDs given swap details")]
#[command(long_about = "Calculate bnb and mage swap IDs given swap details.

The deputy can be one of bnb, btcb, busd, xrpb to use the mainnet deputy
addresses, or an arbitrary counter-chain address. The original sender and
deputy address cannot be from the same chain.

Example:
  mage-swaptool 464105c245199d02a4289475b8b231f3f73918b6f0fdad898825186950d46f36 \\
      bnb10rr5f8m73rxgnz9afvnfn7fn9pwhfskem5kn0x busd")]
struct Cli {
    /// Hex-encoded random number hash committed by the swap initiator
    random_number_hash: String,

    /// Bech32 address of the user who initiated the swap (mage or bnb chain)
    original_sender_address: String,

    /// Deputy denom or an explicit deputy address on the counter chain
    deputy_address_or_denom: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let registry = DeputyRegistry::mainnet()?;

    let pair = swap_ids_from_args(
        &registry,
        &cli.random_number_hash,
        &cli.original_sender_address,
        &cli.deputy_address_or_denom,
    )?;

    println!("mage_swap_id: {}", hex::encode(pair.mage));
    println!("bnb_swap_id: {}", hex::encode(pair.bnb));

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
