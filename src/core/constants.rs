use solana_sdk::pubkey;
use solana_sdk::pubkey::Pubkey;

/// The deployed GPL Session program.
pub const PROGRAM_ID: Pubkey = pubkey!("KeyspM2ssCJbqUhQ4k7sveSiY4WjnYsrXkC8oDbwde5");
