use anchor_lang::prelude::*;

#[error_code]
pub enum MultiTransferError {
    #[msg("Both transfer amounts must be greater than zero")]
    AmountMustBeGreaterThanZero,
    #[msg("Remaining accounts can not be split evenly between the transfer legs")]
    InvalidLegAccounts,
}
