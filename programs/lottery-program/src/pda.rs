use anchor_lang::prelude::*;

use crate::{
    constants::{LOTTERY_SEED, TICKET_SEED},
    error::LotteryError,
};

/// Derives the lottery PDA and its bump for a caller-chosen id.
pub fn lottery_address(id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[LOTTERY_SEED, id.to_le_bytes().as_ref()], &crate::ID)
}

/// Derives the ticket PDA and its bump for a (lottery, buyer) pair.
/// A buyer can hold at most one ticket per lottery since this is a pure
/// function of the pair.
pub fn ticket_address(lottery: &Pubkey, buyer: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[TICKET_SEED, lottery.as_ref(), buyer.as_ref()],
        &crate::ID,
    )
}

/// Re-derives a ticket PDA from the bump stored on the ticket record.
pub fn ticket_address_with_bump(lottery: &Pubkey, buyer: &Pubkey, bump: u8) -> Result<Pubkey> {
    Pubkey::create_program_address(
        &[TICKET_SEED, lottery.as_ref(), buyer.as_ref(), &[bump]],
        &crate::ID,
    )
    .map_err(|_| LotteryError::WrongTicket.into())
}

/// Fails with `WrongTicket` unless `ticket` is the PDA of (`lottery`, `owner`).
pub fn verify_ticket_owner(
    ticket: &Pubkey,
    lottery: &Pubkey,
    owner: &Pubkey,
    bump: u8,
) -> Result<()> {
    let expected = ticket_address_with_bump(lottery, owner, bump)?;
    require_keys_eq!(*ticket, expected, LotteryError::WrongTicket);
    Ok(())
}
