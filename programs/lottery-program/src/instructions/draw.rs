use anchor_lang::prelude::*;

use crate::{
    constants::LOTTERY_SEED,
    error::LotteryError,
    state::Lottery,
};

/// Event emitted when the winning numbers are fixed
#[event]
pub struct LotteryDrawn {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The winning numbers
    pub numbers: [u8; 6],
    /// Final number of tickets sold
    pub sold: u32,
}

/// Fixes the winning numbers of a lottery and closes ticket sales.
///
/// Execution requirements:
/// 1. The signer is the lottery authority
/// 2. The lottery is still active
/// 3. At least one ticket was sold
///
/// The numbers are six distinct values in [1, 10]. They come from the
/// SlotHashes sysvar mixed with the clock (see `randomness`), or are fixed
/// when built with the `testing` feature. The draw is one-way: numbers are
/// never recomputed once stored.
///
/// # Errors
/// - `Unauthorized` if the signer is not the lottery authority
/// - `NotActive` if the lottery was already drawn
/// - `NoTicketsSold` if nobody bought a ticket
/// - `InvalidSlotHashesAccount` if the provided SlotHashes account is invalid
pub fn draw(ctx: Context<Draw>, _id: u64) -> Result<()> {
    ctx.accounts.lottery.ensure_drawable()?;

    // Fixed numbers for local test builds
    #[cfg(feature = "testing")]
    let numbers = crate::constants::TEST_WINNING_NUMBERS;

    #[cfg(not(feature = "testing"))]
    let numbers = {
        let clock = Clock::get()?;
        let mut entropy = crate::randomness::SlotHashEntropy::new(
            &ctx.accounts.recent_slothashes.to_account_info(),
            clock.unix_timestamp,
        )?;
        crate::randomness::draw_numbers(&mut entropy)?
    };

    // Closes sales and stores the numbers
    let lottery = &mut ctx.accounts.lottery;
    lottery.record_draw(numbers)?;

    msg!("Lottery {} drawn: {:?}", lottery.id, numbers);

    emit!(LotteryDrawn {
        lottery: lottery.key(),
        numbers,
        sold: lottery.sold,
    });

    Ok(())
}

/// Accounts required for the draw instruction
#[derive(Accounts)]
#[instruction(id: u64)]
pub struct Draw<'info> {
    pub authority: Signer<'info>,

    /// PDA with seeds ["lottery", id]
    #[account(
        mut,
        seeds = [
            LOTTERY_SEED,
            id.to_le_bytes().as_ref(),
        ],
        bump = lottery.bump,
        has_one = authority @ LotteryError::Unauthorized,
    )]
    pub lottery: Account<'info, Lottery>,

    /// The SlotHashes sysvar contains the most recent block hashes
    /// CHECK: Using UncheckedAccount because we manually validate the correct sysvar.
    /// Anchor cannot deserialize the SlotHashes sysvar.
    pub recent_slothashes: UncheckedAccount<'info>,
}
