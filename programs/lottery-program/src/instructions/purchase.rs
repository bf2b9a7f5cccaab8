use anchor_lang::prelude::*;

use crate::{
    constants::{LOTTERY_SEED, TICKET_SEED},
    error::LotteryError,
    escrow,
    state::{Lottery, Ticket, TICKET_ACCOUNT_SIZE},
    utils::{create_pda_account, write_record},
    validation::validate_numbers,
};

/// Event emitted when a ticket is bought
#[event]
pub struct TicketPurchased {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The buyer's address
    pub buyer: Pubkey,
    /// The ticket PDA created for this purchase
    pub ticket: Pubkey,
    /// Numbers picked by the buyer
    pub numbers: [u8; 6],
    /// Tickets sold including this one
    pub sold: u32,
}

/// Instruction to buy a ticket for an active lottery
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `id` - Id of the lottery to buy into
/// * `numbers` - Six distinct numbers in [1, 10]
///
/// # Security Considerations
/// Checked in this order, any failure leaves all state untouched:
/// 1. The lottery is active
/// 2. The numbers are in range and unique
/// 3. The lottery is not sold out
/// 4. The buyer has no ticket yet: the ticket PDA ["ticket", lottery, buyer]
///    must be vacant, otherwise `AlreadyExists`
///
/// The ticket is created in the handler rather than with `init`, because
/// account constraints would run the creation before any of the checks above.
///
/// # Implementation Notes
/// - Updates state before the fee transfer
/// - Verifies the lottery balance grew by exactly the ticket price
pub fn purchase(ctx: Context<Purchase>, _id: u64, numbers: [u8; 6]) -> Result<()> {
    let lottery_key = ctx.accounts.lottery.key();
    let buyer_key = ctx.accounts.buyer.key();
    let ticket_key = ctx.accounts.ticket.key();

    require!(ctx.accounts.lottery.is_active, LotteryError::NotActive);
    validate_numbers(&numbers)?;
    require!(!ctx.accounts.lottery.is_sold_out(), LotteryError::SoldOut);

    // Create the ticket PDA, buyer pays its rent
    let bump = ctx.bumps.ticket;
    let signer_seeds: &[&[&[u8]]] = &[&[
        TICKET_SEED,
        lottery_key.as_ref(),
        buyer_key.as_ref(),
        &[bump],
    ]];
    let ticket_info = ctx.accounts.ticket.to_account_info();
    create_pda_account(
        &ctx.accounts.buyer.to_account_info(),
        &ticket_info,
        &ctx.accounts.system_program.to_account_info(),
        TICKET_ACCOUNT_SIZE,
        signer_seeds,
        ctx.program_id,
    )?;
    write_record(&ticket_info, &Ticket { numbers, bump })?;

    let lottery = &mut ctx.accounts.lottery;
    lottery.record_purchase(ticket_key)?;
    let price = lottery.price;
    let sold = lottery.sold;

    // Fee goes to the lottery account, which holds the pot
    escrow::collect_fee(
        &ctx.accounts.buyer.to_account_info(),
        &ctx.accounts.lottery.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        price,
    )?;

    msg!("Ticket {} sold ({} total)", ticket_key, sold);

    emit!(TicketPurchased {
        lottery: lottery_key,
        buyer: buyer_key,
        ticket: ticket_key,
        numbers,
        sold,
    });

    Ok(())
}

/// Accounts required for the purchase instruction
#[derive(Accounts)]
#[instruction(id: u64)]
pub struct Purchase<'info> {
    /// The buyer, pays the ticket fee and the ticket account rent
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// The lottery being bought into
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

    /// CHECK: New ticket account, one per buyer per lottery. Address is
    /// checked against ["ticket", lottery_key, buyer_key] and the account is
    /// created in the handler
    #[account(
        mut,
        seeds = [
            TICKET_SEED,
            lottery.key().as_ref(),
            buyer.key().as_ref(),
        ],
        bump,
    )]
    pub ticket: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
