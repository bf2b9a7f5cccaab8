//! Entropy for the draw.
//!
//! The on-chain source mixes the newest SlotHashes entry with the clock.
//! It is not unpredictable to the validator producing the block, so a real
//! deployment should plug a verifiable source in behind [`EntropySource`].

use anchor_lang::prelude::*;
use arrayref::array_ref;

use crate::{
    constants::{MAX_NUMBER, MIN_NUMBER, NUMBERS_PER_TICKET},
    error::LotteryError,
};

// 8 (entry count) + 8 (slot) + 32 (hash)
const SLOT_HASHES_MIN_LEN: usize = 8 + 8 + 32;
const NEWEST_HASH_OFFSET: usize = 16;

const POOL_SIZE: usize = (MAX_NUMBER - MIN_NUMBER + 1) as usize;

pub trait EntropySource {
    fn next_u64(&mut self) -> u64;
}

/// Entropy drawn from the newest block hash and the current timestamp.
pub struct SlotHashEntropy {
    state: u64,
}

impl SlotHashEntropy {
    pub fn new(slot_hashes: &AccountInfo, unix_timestamp: i64) -> Result<Self> {
        require_keys_eq!(
            slot_hashes.key(),
            anchor_lang::solana_program::sysvar::slot_hashes::ID,
            LotteryError::InvalidSlotHashesAccount
        );

        let data = slot_hashes.try_borrow_data()?;
        require!(
            data.len() >= SLOT_HASHES_MIN_LEN,
            LotteryError::InvalidSlotHashesAccount
        );

        Ok(Self::from_hash(
            array_ref![data, NEWEST_HASH_OFFSET, 32],
            unix_timestamp,
        ))
    }

    pub fn from_hash(hash: &[u8; 32], unix_timestamp: i64) -> Self {
        let (a, b, c, d) = (
            u64::from_le_bytes(*array_ref![hash, 0, 8]),
            u64::from_le_bytes(*array_ref![hash, 8, 8]),
            u64::from_le_bytes(*array_ref![hash, 16, 8]),
            u64::from_le_bytes(*array_ref![hash, 24, 8]),
        );

        let mut state = mix(a, unix_timestamp as u64);
        state = mix(state, b);
        state = mix(state, c);
        state = mix(state, d);

        Self { state }
    }
}

impl EntropySource for SlotHashEntropy {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        mix(self.state, 0)
    }
}

/// Picks distinct numbers in [MIN_NUMBER, MAX_NUMBER] with a partial
/// Fisher-Yates shuffle of the full pool.
pub fn draw_numbers<E: EntropySource>(source: &mut E) -> Result<[u8; NUMBERS_PER_TICKET]> {
    let mut pool = [0u8; POOL_SIZE];
    for (slot, number) in pool.iter_mut().zip(MIN_NUMBER..=MAX_NUMBER) {
        *slot = number;
    }

    let mut numbers = [0u8; NUMBERS_PER_TICKET];
    for (i, drawn) in numbers.iter_mut().enumerate() {
        let remaining = (POOL_SIZE - i) as u64;
        let j = i + unbiased_range(source, remaining)? as usize;
        pool.swap(i, j);
        *drawn = pool[i];
    }

    Ok(numbers)
}

/// splitmix64 finalizer over the sum of both inputs.
fn mix(a: u64, b: u64) -> u64 {
    let mut z = a.wrapping_add(b);

    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Maps fresh entropy onto [0, range) by rejection sampling.
fn unbiased_range<E: EntropySource>(source: &mut E, range: u64) -> Result<u64> {
    require!(range > 0, LotteryError::Overflow);

    let threshold = u64::MAX - (u64::MAX % range);
    loop {
        let value = source.next_u64();
        if value < threshold {
            return Ok(value % range);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::numbers_are_valid;

    struct Sequence(Vec<u64>, usize);

    impl EntropySource for Sequence {
        fn next_u64(&mut self) -> u64 {
            let value = self.0[self.1 % self.0.len()];
            self.1 += 1;
            value
        }
    }

    #[test]
    fn test_zero_entropy_keeps_pool_order() {
        let mut source = Sequence(vec![0], 0);
        assert_eq!(draw_numbers(&mut source).unwrap(), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_drawn_numbers_are_valid_for_many_seeds() {
        for seed in 0..500u64 {
            let mut hash = [0u8; 32];
            hash[..8].copy_from_slice(&seed.to_le_bytes());
            let mut source = SlotHashEntropy::from_hash(&hash, 1_700_000_000 + seed as i64);

            let numbers = draw_numbers(&mut source).unwrap();
            assert!(numbers_are_valid(&numbers), "seed {seed} drew {numbers:?}");
        }
    }

    #[test]
    fn test_rejection_sampling_skips_biased_values() {
        // u64::MAX lies above the threshold for a range of 10 and must be redrawn
        let mut source = Sequence(vec![u64::MAX, 13], 0);
        assert_eq!(unbiased_range(&mut source, 10).unwrap(), 3);
        assert_eq!(source.1, 2);
    }

    #[test]
    fn test_slot_hash_entropy_depends_on_inputs() {
        let hash = [7u8; 32];
        let mut first = SlotHashEntropy::from_hash(&hash, 100);
        let mut same = SlotHashEntropy::from_hash(&hash, 100);
        let mut later = SlotHashEntropy::from_hash(&hash, 101);

        let a = first.next_u64();
        assert_eq!(a, same.next_u64());
        assert_ne!(a, later.next_u64());
    }
}
