use anchor_lang::{
    prelude::*,
    solana_program::{program::invoke, system_instruction},
};

use crate::error::LotteryError;

/// Moves a ticket fee from the buyer into the lottery account and checks
/// the lottery balance grew by exactly `amount`.
pub fn collect_fee<'info>(
    buyer: &AccountInfo<'info>,
    lottery: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let pre_transfer_balance = lottery.lamports();

    invoke(
        &system_instruction::transfer(buyer.key, lottery.key, amount),
        &[buyer.clone(), lottery.clone(), system_program.clone()],
    )?;

    let post_transfer_balance = lottery.lamports();
    require!(
        post_transfer_balance
            == pre_transfer_balance
                .checked_add(amount)
                .ok_or(LotteryError::Overflow)?,
        LotteryError::TransferFailed
    );

    Ok(())
}

/// Pot available to the winner: everything above the rent-exempt reserve.
pub fn claimable_amount(balance: u64, rent_reserve: u64) -> u64 {
    balance.saturating_sub(rent_reserve)
}

/// Pays `amount` out of a program-owned account. No CPI is needed since
/// the program may debit accounts it owns directly.
pub fn pay_out<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    from.sub_lamports(amount)?;
    to.add_lamports(amount)?;
    Ok(())
}
