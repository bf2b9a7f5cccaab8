use anchor_lang::error_code;

#[error_code]
pub enum LotteryError {
    #[msg("A lottery already exists for this id")]
    AlreadyExists,
    #[msg("The lottery is not active")]
    NotActive,
    #[msg("Numbers must be between 1 and 10 and unique")]
    InvalidNumbers,
    #[msg("All available tickets have been sold")]
    SoldOut,
    #[msg("Only the lottery authority can draw numbers")]
    Unauthorized,
    #[msg("No lottery tickets have been sold")]
    NoTicketsSold,
    #[msg("Invalid SlotHashes account provided")]
    InvalidSlotHashesAccount,
    #[msg("Ticket does not belong to the signer for this lottery")]
    WrongTicket,
    #[msg("The lottery is still active")]
    StillActive,
    #[msg("The lottery prize has already been claimed")]
    AlreadyClaimed,
    #[msg("The lottery numbers have not been drawn yet")]
    NumbersNotDrawn,
    #[msg("The ticket numbers do not match the drawn numbers")]
    NumbersDoNotMatch,
    Overflow,
    #[msg("Ticket fee transfer failed")]
    TransferFailed,
}
