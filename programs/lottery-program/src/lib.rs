use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod escrow;
pub mod instructions;
pub mod pda;
pub mod randomness;
pub mod state;
pub mod utils;
pub mod validation;

declare_id!("LoTTo8Rkwxb6uc6bALeNeMgdNoMZMx4L14Dojkgy2Xq");

#[program]
pub mod lottery_program {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, id: u64) -> Result<()> {
        instructions::initialize::initialize(ctx, id)
    }

    pub fn purchase(ctx: Context<Purchase>, id: u64, numbers: [u8; 6]) -> Result<()> {
        instructions::purchase::purchase(ctx, id, numbers)
    }

    pub fn draw(ctx: Context<Draw>, id: u64) -> Result<()> {
        instructions::draw::draw(ctx, id)
    }

    pub fn claim(ctx: Context<Claim>, id: u64) -> Result<()> {
        instructions::claim::claim(ctx, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::LotteryError,
        escrow::claimable_amount,
        pda::{lottery_address, ticket_address, verify_ticket_owner},
        randomness::{draw_numbers, EntropySource},
        state::{Lottery, Ticket},
        validation::validate_numbers,
    };
    use anchor_lang::error::Error;

    struct ZeroEntropy;

    impl EntropySource for ZeroEntropy {
        fn next_u64(&mut self) -> u64 {
            0
        }
    }

    const RENT_RESERVE: u64 = 23_677_440;

    struct Holder {
        key: Pubkey,
        ticket_key: Pubkey,
        ticket: Ticket,
    }

    fn buy(lottery: &mut Lottery, lottery_key: &Pubkey, numbers: [u8; 6]) -> Holder {
        validate_numbers(&numbers).unwrap();
        let key = Pubkey::new_unique();
        let (ticket_key, bump) = ticket_address(lottery_key, &key);
        lottery.record_purchase(ticket_key).unwrap();
        Holder {
            key,
            ticket_key,
            ticket: Ticket { numbers, bump },
        }
    }

    fn claim(lottery: &mut Lottery, lottery_key: &Pubkey, claimant: &Pubkey, holder: &Holder) -> Result<()> {
        verify_ticket_owner(&holder.ticket_key, lottery_key, claimant, holder.ticket.bump)?;
        lottery.record_claim(&holder.ticket)
    }

    #[test]
    fn test_full_lottery_lifecycle() {
        let authority = Pubkey::new_unique();
        let (lottery_key, bump) = lottery_address(1);
        let mut lottery = Lottery::new(authority, 1, bump);
        let mut balance = RENT_RESERVE;

        let alice = buy(&mut lottery, &lottery_key, [1, 2, 3, 4, 5, 6]);
        balance += lottery.price;
        let bob = buy(&mut lottery, &lottery_key, [7, 8, 9, 10, 1, 2]);
        balance += lottery.price;

        assert_eq!(lottery.sold, 2);
        assert_eq!(lottery.holders, vec![alice.ticket_key, bob.ticket_key]);

        let numbers = draw_numbers(&mut ZeroEntropy).unwrap();
        lottery.record_draw(numbers).unwrap();
        assert!(!lottery.is_active);
        assert_eq!(lottery.numbers, Some([1, 2, 3, 4, 5, 6]));

        // Bob presenting Alice's winning ticket
        let err = claim(&mut lottery, &lottery_key, &bob.key, &alice).unwrap_err();
        assert_eq!(err, Error::from(LotteryError::WrongTicket));

        let err = claim(&mut lottery, &lottery_key, &bob.key, &bob).unwrap_err();
        assert_eq!(err, Error::from(LotteryError::NumbersDoNotMatch));

        claim(&mut lottery, &lottery_key, &alice.key, &alice).unwrap();
        let prize = claimable_amount(balance, RENT_RESERVE);
        assert_eq!(prize, 2 * lottery.price);
        balance -= prize;

        let err = claim(&mut lottery, &lottery_key, &alice.key, &alice).unwrap_err();
        assert_eq!(err, Error::from(LotteryError::AlreadyClaimed));
        let err = claim(&mut lottery, &lottery_key, &bob.key, &bob).unwrap_err();
        assert_eq!(err, Error::from(LotteryError::AlreadyClaimed));
        assert_eq!(balance, RENT_RESERVE);
    }

    #[test]
    fn test_matching_tickets_do_not_split_the_pot() {
        let (lottery_key, bump) = lottery_address(9);
        let mut lottery = Lottery::new(Pubkey::new_unique(), 9, bump);

        let first = buy(&mut lottery, &lottery_key, [1, 2, 3, 4, 5, 6]);
        let second = buy(&mut lottery, &lottery_key, [1, 2, 3, 4, 5, 6]);
        lottery.record_draw(draw_numbers(&mut ZeroEntropy).unwrap()).unwrap();

        claim(&mut lottery, &lottery_key, &second.key, &second).unwrap();
        let err = claim(&mut lottery, &lottery_key, &first.key, &first).unwrap_err();
        assert_eq!(err, Error::from(LotteryError::AlreadyClaimed));
    }
}
