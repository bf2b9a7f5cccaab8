use anchor_lang::prelude::*;

use crate::constants::NUMBERS_PER_TICKET;

// 8 discriminator + 6 numbers + 1 bump
pub const TICKET_ACCOUNT_SIZE: usize = 8 + NUMBERS_PER_TICKET + 1;

/// One buyer's pick for one lottery. The owning lottery and buyer are
/// implied by the PDA seeds, so only the bump is stored to re-derive it.
#[account]
#[derive(Debug)]
pub struct Ticket {
    pub numbers: [u8; 6],
    pub bump: u8,
}
