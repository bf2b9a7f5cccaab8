use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_NUMBER, MAX_TICKETS, MIN_NUMBER, NUMBERS_PER_TICKET, TICKET_PRICE},
    error::LotteryError,
    state::Ticket,
};

// Space calculation:
// 8 (discriminator) +
// 32 (authority) +
// 8 (id) +
// 4 (length of holders) +
// 32 * MAX_TICKETS (holders) +
// 4 (sold) +
// 8 (price) +
// 1 (is_active) +
// 1 (is_claimed) +
// 7 (numbers: Option<[u8; 6]>) +
// 1 (bump) =
// 3274 total bytes
pub const LOTTERY_ACCOUNT_SIZE: usize =
    8 + 32 + 8 + 4 + 32 * MAX_TICKETS as usize + 4 + 8 + 1 + 1 + (1 + NUMBERS_PER_TICKET) + 1;

/// A single numbers lottery.
///
/// Lifecycle: created active by `initialize`, `purchase` appends holders while
/// active, `draw` fixes `numbers` and deactivates it, and the first matching
/// `claim` takes the whole pot. Ties are not split.
///
/// `sold` always equals `holders.len()`; both only change in
/// [`Lottery::record_purchase`].
#[account]
#[derive(Debug)]
pub struct Lottery {
    pub authority: Pubkey,
    pub id: u64,
    pub holders: Vec<Pubkey>,
    pub sold: u32,
    pub price: u64,
    pub is_active: bool,
    pub is_claimed: bool,
    pub numbers: Option<[u8; 6]>,
    pub bump: u8,
}

impl Lottery {
    pub fn new(authority: Pubkey, id: u64, bump: u8) -> Self {
        Self {
            authority,
            id,
            holders: Vec::new(),
            sold: 0,
            price: TICKET_PRICE,
            is_active: true,
            is_claimed: false,
            numbers: None,
            bump,
        }
    }

    pub fn is_sold_out(&self) -> bool {
        self.sold >= MAX_TICKETS
    }

    /// Books a sold ticket. Fee collection is done by the caller.
    pub fn record_purchase(&mut self, ticket: Pubkey) -> Result<()> {
        require!(self.is_active, LotteryError::NotActive);
        require!(!self.is_sold_out(), LotteryError::SoldOut);

        self.sold = self.sold.checked_add(1).ok_or(LotteryError::Overflow)?;
        self.holders.push(ticket);

        Ok(())
    }

    pub fn ensure_drawable(&self) -> Result<()> {
        require!(self.is_active, LotteryError::NotActive);
        require!(self.sold > 0, LotteryError::NoTicketsSold);
        Ok(())
    }

    /// Fixes the winning numbers and closes ticket sales. One-way.
    pub fn record_draw(&mut self, numbers: [u8; NUMBERS_PER_TICKET]) -> Result<()> {
        self.ensure_drawable()?;
        require!(
            numbers
                .iter()
                .all(|number| (MIN_NUMBER..=MAX_NUMBER).contains(number)),
            LotteryError::InvalidNumbers
        );

        self.numbers = Some(numbers);
        self.is_active = false;

        Ok(())
    }

    /// Checks that `ticket` may take the pot. Ownership of the ticket is
    /// verified separately against its PDA.
    pub fn ensure_claimable(&self, ticket: &Ticket) -> Result<()> {
        require!(!self.is_active, LotteryError::StillActive);
        require!(!self.is_claimed, LotteryError::AlreadyClaimed);

        let numbers = self.numbers.ok_or(LotteryError::NumbersNotDrawn)?;
        require!(numbers == ticket.numbers, LotteryError::NumbersDoNotMatch);

        Ok(())
    }

    pub fn record_claim(&mut self, ticket: &Ticket) -> Result<()> {
        self.ensure_claimable(ticket)?;
        self.is_claimed = true;
        Ok(())
    }
}
