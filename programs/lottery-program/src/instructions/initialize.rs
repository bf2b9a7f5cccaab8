use anchor_lang::prelude::*;

use crate::{
    constants::LOTTERY_SEED,
    state::{Lottery, LOTTERY_ACCOUNT_SIZE},
    utils::{create_pda_account, write_record},
};

/// Event emitted when a lottery is opened
#[event]
pub struct LotteryInitialized {
    /// The pubkey of the lottery PDA
    pub lottery: Pubkey,
    /// The creator, the only key allowed to draw
    pub authority: Pubkey,
    /// Caller-chosen lottery id
    pub id: u64,
    /// Price per ticket in lamports
    pub price: u64,
}

/// Instruction to open a new lottery under a caller-chosen id
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `id` - Lottery id, the only seed besides the "lottery" prefix
///
/// # Security Considerations
/// 1. The lottery address is the PDA for ["lottery", id], checked by seeds
/// 2. Fails with `AlreadyExists` when a record already lives at that address,
///    so an existing lottery can never be overwritten or reset
///
/// # Implementation Notes
/// - The account is created here rather than through `init` so a reused id
///   surfaces as a typed error
/// - A pre-funded address is topped up to rent exemption, then allocated and
///   assigned to this program
pub fn initialize(ctx: Context<Initialize>, id: u64) -> Result<()> {
    let lottery_info = ctx.accounts.lottery.to_account_info();
    let bump = ctx.bumps.lottery;
    let id_bytes = id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[LOTTERY_SEED, id_bytes.as_ref(), &[bump]]];

    // Fails with AlreadyExists if the id is taken
    create_pda_account(
        &ctx.accounts.authority.to_account_info(),
        &lottery_info,
        &ctx.accounts.system_program.to_account_info(),
        LOTTERY_ACCOUNT_SIZE,
        signer_seeds,
        ctx.program_id,
    )?;

    let lottery = Lottery::new(ctx.accounts.authority.key(), id, bump);
    write_record(&lottery_info, &lottery)?;

    msg!("Lottery {} opened by {}", id, lottery.authority);

    emit!(LotteryInitialized {
        lottery: lottery_info.key(),
        authority: lottery.authority,
        id,
        price: lottery.price,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct Initialize<'info> {
    /// Creator of the lottery, pays for the account
    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: must be vacant; created and written by the handler.
    /// PDA with seeds ["lottery", id]
    #[account(
        mut,
        seeds = [
            LOTTERY_SEED,
            id.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub lottery: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
