use anchor_lang::{
    prelude::*,
    system_program::{self, Allocate, Assign, CreateAccount, Transfer},
};

use crate::error::LotteryError;

/// Fails with `AlreadyExists` unless no record lives at `account` yet.
/// A system-owned address holding only lamports counts as vacant.
pub fn ensure_vacant(account: &AccountInfo) -> Result<()> {
    require!(
        account.owner == &System::id() && account.data_is_empty(),
        LotteryError::AlreadyExists
    );
    Ok(())
}

/// Creates a rent-exempt PDA of `space` bytes owned by `owner`.
///
/// A pre-funded address is topped up to rent exemption, then allocated and
/// assigned, since `create_account` rejects accounts that hold lamports.
pub fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    space: usize,
    signer_seeds: &[&[&[u8]]],
    owner: &Pubkey,
) -> Result<()> {
    ensure_vacant(target)?;

    let rent_lamports = Rent::get()?.minimum_balance(space);
    let current_lamports = target.lamports();

    if current_lamports == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
                signer_seeds,
            ),
            rent_lamports,
            space as u64,
            owner,
        );
    }

    // Only fund the difference, the address may already be rent exempt
    let top_up = rent_lamports.saturating_sub(current_lamports);
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: target.clone(),
                },
            ),
            top_up,
        )?;
    }

    system_program::allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;

    system_program::assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: target.clone(),
            },
            signer_seeds,
        ),
        owner,
    )
}

/// Writes discriminator and data of `record` into a freshly created account.
pub fn write_record<T: AccountSerialize>(target: &AccountInfo, record: &T) -> Result<()> {
    let mut data = target.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    record.try_serialize(&mut writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Ticket;
    use anchor_lang::error::Error;

    #[test]
    fn test_ensure_vacant() {
        let key = Pubkey::new_unique();
        let system = System::id();
        let program = crate::ID;

        let mut empty_lamports = 0u64;
        let mut empty_data = [0u8; 0];
        let empty = AccountInfo::new(
            &key,
            false,
            true,
            &mut empty_lamports,
            &mut empty_data,
            &system,
            false,
            0,
        );
        assert!(ensure_vacant(&empty).is_ok());

        let mut funded_lamports = 5_000u64;
        let mut funded_data = [0u8; 0];
        let funded = AccountInfo::new(
            &key,
            false,
            true,
            &mut funded_lamports,
            &mut funded_data,
            &system,
            false,
            0,
        );
        assert!(ensure_vacant(&funded).is_ok());

        let mut taken_lamports = 1_000_000u64;
        let mut taken_data = [0u8; 15];
        let taken = AccountInfo::new(
            &key,
            false,
            true,
            &mut taken_lamports,
            &mut taken_data,
            &program,
            false,
            0,
        );
        let err = ensure_vacant(&taken).unwrap_err();
        assert_eq!(err, Error::from(LotteryError::AlreadyExists));
    }

    #[test]
    fn test_write_record_round_trips() {
        let key = Pubkey::new_unique();
        let program = crate::ID;
        let mut lamports = 1_000_000u64;
        let mut data = [0u8; crate::state::TICKET_ACCOUNT_SIZE];
        let account = AccountInfo::new(
            &key,
            false,
            true,
            &mut lamports,
            &mut data,
            &program,
            false,
            0,
        );

        let ticket = Ticket {
            numbers: [2, 4, 6, 8, 10, 1],
            bump: 251,
        };
        write_record(&account, &ticket).unwrap();

        let stored = Ticket::try_deserialize(&mut &account.data.borrow()[..]).unwrap();
        assert_eq!(stored.numbers, [2, 4, 6, 8, 10, 1]);
        assert_eq!(stored.bump, 251);
    }
}
