use anchor_lang::prelude::*;

#[error_code]
pub enum CounterError {
    #[msg("Record is already initialized")]
    AlreadyInitialized,
    #[msg("A counter required by the transfer is not initialized")]
    UninitializedCounter,
    #[msg("Extra accounts do not match the resolved transfer hook accounts")]
    InvalidExtraAccounts,
    #[msg("Counter would overflow")]
    Overflow,
    #[msg("Unauthorized signer")]
    Unauthorized,
    #[msg("Mint transfer hook does not point at this program")]
    MintHookMismatch,
    #[msg("Source token account is not currently transferring")]
    NotTransferring,
}
