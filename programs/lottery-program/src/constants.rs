/// Seed prefix for lottery PDAs: ["lottery", id (u64 LE)]
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Seed prefix for ticket PDAs: ["ticket", lottery, buyer]
pub const TICKET_SEED: &[u8] = b"ticket";

/// Fee per ticket in lamports
pub const TICKET_PRICE: u64 = 1_000_000;

/// Maximum number of tickets a single lottery can sell.
/// Also bounds the `holders` vector stored in the lottery account.
pub const MAX_TICKETS: u32 = 100;

pub const NUMBERS_PER_TICKET: usize = 6;
pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 10;

/// Numbers produced by `draw` when built with the `testing` feature
#[cfg(feature = "testing")]
pub const TEST_WINNING_NUMBERS: [u8; NUMBERS_PER_TICKET] = [1, 2, 3, 4, 5, 6];
