use anchor_lang::prelude::*;

#[constant]
pub const PROGRAM_DATA_SEED: &[u8] = b"program-data";

#[constant]
pub const MINT_COUNTER_IN_SEED: &[u8] = b"mint-counter-in";

#[constant]
pub const MINT_COUNTER_OUT_SEED: &[u8] = b"mint-counter-out";

#[constant]
pub const WALLET_COUNTER_IN_SEED: &[u8] = b"wallet-counter-in";

#[constant]
pub const WALLET_COUNTER_OUT_SEED: &[u8] = b"wallet-counter-out";

/// Seed fixed by the transfer hook interface for the validation account
#[constant]
pub const EXTRA_ACCOUNT_METAS_SEED: &[u8] = b"extra-account-metas";

/// Number of counter records appended to every `Execute` invocation
#[constant]
pub const HOOK_COUNTER_ACCOUNTS: u8 = 6;

/// Byte offset of the owner field inside a token account
pub const TOKEN_ACCOUNT_OWNER_OFFSET: u8 = 32;
