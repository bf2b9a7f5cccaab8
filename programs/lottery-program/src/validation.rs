use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_NUMBER, MIN_NUMBER, NUMBERS_PER_TICKET},
    error::LotteryError,
};

/// Returns true when every number lies in [MIN_NUMBER, MAX_NUMBER] and no
/// value repeats.
pub fn numbers_are_valid(numbers: &[u8; NUMBERS_PER_TICKET]) -> bool {
    let mut seen: u16 = 0;
    for &number in numbers {
        if !(MIN_NUMBER..=MAX_NUMBER).contains(&number) {
            return false;
        }
        let bit = 1u16 << number;
        if seen & bit != 0 {
            return false;
        }
        seen |= bit;
    }
    true
}

pub fn validate_numbers(numbers: &[u8; NUMBERS_PER_TICKET]) -> Result<()> {
    require!(numbers_are_valid(numbers), LotteryError::InvalidNumbers);
    Ok(())
}
