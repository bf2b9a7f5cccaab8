use anchor_lang::prelude::*;

use crate::{
    constants::LOTTERY_SEED,
    escrow,
    pda::verify_ticket_owner,
    state::{Lottery, Ticket},
};

/// Event emitted when the pot is paid out
#[event]
pub struct PrizeClaimed {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The winner's address
    pub winner: Pubkey,
    /// The winning ticket
    pub ticket: Pubkey,
    /// Amount paid in lamports
    pub amount: u64,
}

/// Instruction for a ticket holder to take the pot
///
/// # Security Considerations
/// Checked in this order:
/// 1. The ticket is the signer's own: its address must re-derive from
///    ["ticket", lottery, signer] with the bump stored on the ticket
/// 2. The lottery has been drawn
/// 3. The pot has not been claimed yet
/// 4. The ticket numbers equal the drawn numbers element by element
///
/// # Implementation Notes
/// - The first matching claim takes the whole pot; identical winning tickets
///   bought by other holders get nothing
/// - Everything above the lottery account's rent-exempt reserve is paid, so
///   the lottery record stays alive
/// - Lamports are moved directly since the lottery PDA is owned by this program
pub fn claim(ctx: Context<Claim>, _id: u64) -> Result<()> {
    let lottery_key = ctx.accounts.lottery.key();
    let claimant_key = ctx.accounts.claimant.key();
    let ticket_key = ctx.accounts.ticket.key();

    // Ownership before any state check
    verify_ticket_owner(&ticket_key, &lottery_key, &claimant_key, ctx.accounts.ticket.bump)?;

    let ticket = &ctx.accounts.ticket;
    ctx.accounts.lottery.record_claim(ticket)?;

    // Keep the lottery record rent exempt, pay the rest
    let lottery_info = ctx.accounts.lottery.to_account_info();
    let rent_lamports = Rent::get()?.minimum_balance(lottery_info.data_len());
    let amount = escrow::claimable_amount(lottery_info.lamports(), rent_lamports);

    escrow::pay_out(
        &lottery_info,
        &ctx.accounts.claimant.to_account_info(),
        amount,
    )?;

    msg!("Lottery {} paid {} lamports to {}", ctx.accounts.lottery.id, amount, claimant_key);

    emit!(PrizeClaimed {
        lottery: lottery_key,
        winner: claimant_key,
        ticket: ticket_key,
        amount,
    });

    Ok(())
}

/// Accounts required for the claim instruction
#[derive(Accounts)]
#[instruction(id: u64)]
pub struct Claim<'info> {
    /// The ticket holder, receives the pot
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// PDA with seeds ["lottery", id]
    #[account(
        mut,
        seeds = [
            LOTTERY_SEED,
            id.to_le_bytes().as_ref(),
        ],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// The claimant's ticket, verified against its PDA in the handler
    pub ticket: Account<'info, Ticket>,
}
