//! Extra account resolution for the transfer hook.
//!
//! Accounts for SPL Transfer Hook interface `Execute` (* = extra meta):
//!
//! 0. `[ ]` Source token account.
//! 1. `[ ]` Token mint.
//! 2. `[ ]` Destination token account.
//! 3. `[ ]` Source authority.
//! 4. `[ ]` Extra account metas account.
//! 5. `[w]` * Mint counter (in).
//! 6. `[w]` * Mint counter (out).
//! 7. `[w]` * Source wallet counter (in).
//! 8. `[w]` * Source wallet counter (out).
//! 9. `[w]` * Destination wallet counter (in).
//! 10. `[w]` * Destination wallet counter (out).
//!
//! Wallet counters are keyed by the owner stored in the token account, so the
//! stored rules read it from the account data instead of using the authority,
//! which may be a delegate.
use {
    crate::{
        state::{Direction, MintCounter, WalletCounter},
        EXTRA_ACCOUNT_METAS_SEED, HOOK_COUNTER_ACCOUNTS, TOKEN_ACCOUNT_OWNER_OFFSET,
    },
    anchor_lang::{prelude::*, solana_program::instruction::AccountMeta},
    spl_tlv_account_resolution::{
        account::ExtraAccountMeta, seeds::Seed, state::ExtraAccountMetaList,
    },
    spl_transfer_hook_interface::instruction::ExecuteInstruction,
    spl_type_length_value::state::TlvStateBorrowed,
};

const SOURCE_INDEX: u8 = 0;
const MINT_INDEX: u8 = 1;
const DESTINATION_INDEX: u8 = 2;

/// Which endpoint a wallet counter rule reads its wallet from
#[derive(Clone, Copy)]
enum Endpoint {
    Source,
    Destination,
}

impl Endpoint {
    fn account_index(self) -> u8 {
        match self {
            Endpoint::Source => SOURCE_INDEX,
            Endpoint::Destination => DESTINATION_INDEX,
        }
    }
}

/// Counter slots in the order they follow the meta list account
const COUNTER_SLOTS: [(Option<Endpoint>, Direction); HOOK_COUNTER_ACCOUNTS as usize] = [
    (None, Direction::In),
    (None, Direction::Out),
    (Some(Endpoint::Source), Direction::In),
    (Some(Endpoint::Source), Direction::Out),
    (Some(Endpoint::Destination), Direction::In),
    (Some(Endpoint::Destination), Direction::Out),
];

/// Position of each counter inside the resolved extra accounts
pub mod slot {
    pub const MINT_IN: usize = 0;
    pub const MINT_OUT: usize = 1;
    pub const SOURCE_IN: usize = 2;
    pub const SOURCE_OUT: usize = 3;
    pub const DESTINATION_IN: usize = 4;
    pub const DESTINATION_OUT: usize = 5;
}

/// Derivation rules persisted in the meta list of every hooked mint
pub fn extra_account_metas() -> Result<Vec<ExtraAccountMeta>> {
    COUNTER_SLOTS
        .iter()
        .map(|(endpoint, direction)| -> Result<ExtraAccountMeta> {
            let meta = match endpoint {
                None => ExtraAccountMeta::new_with_seeds(
                    &[
                        Seed::Literal {
                            bytes: direction.mint_counter_seed().to_vec(),
                        },
                        Seed::AccountKey { index: MINT_INDEX },
                    ],
                    false, // is_signer
                    true,  // is_writable
                )?,
                Some(endpoint) => ExtraAccountMeta::new_with_seeds(
                    &[
                        Seed::Literal {
                            bytes: direction.wallet_counter_seed().to_vec(),
                        },
                        Seed::AccountKey { index: MINT_INDEX },
                        Seed::AccountData {
                            account_index: endpoint.account_index(),
                            data_index: TOKEN_ACCOUNT_OWNER_OFFSET,
                            length: 32,
                        },
                    ],
                    false, // is_signer
                    true,  // is_writable
                )?,
            };
            Ok(meta)
        })
        .collect()
}

/// Applies the rules to concrete endpoints.
///
/// Off-chain and on-chain callers get the same list; the transfer amount never
/// takes part in the derivation.
pub fn resolve_for_transfer(
    mint: Pubkey,
    source_wallet: Pubkey,
    destination_wallet: Pubkey,
) -> Vec<AccountMeta> {
    COUNTER_SLOTS
        .iter()
        .map(|(endpoint, direction)| {
            let address = match endpoint {
                None => MintCounter::derive_pda(mint, *direction).0,
                Some(Endpoint::Source) => {
                    WalletCounter::derive_pda(mint, source_wallet, *direction).0
                }
                Some(Endpoint::Destination) => {
                    WalletCounter::derive_pda(mint, destination_wallet, *direction).0
                }
            };
            AccountMeta::new(address, false)
        })
        .collect()
}

/// Everything a client appends to a `TransferChecked` for a hooked mint: the
/// resolved counters, the hook program and the meta list account
pub fn transfer_hook_account_metas(
    mint: Pubkey,
    source_wallet: Pubkey,
    destination_wallet: Pubkey,
) -> Vec<AccountMeta> {
    let mut metas = resolve_for_transfer(mint, source_wallet, destination_wallet);
    metas.push(AccountMeta::new_readonly(crate::ID, false));
    metas.push(AccountMeta::new_readonly(
        derive_extra_account_metas_pda(mint).0,
        false,
    ));
    metas
}

pub fn derive_extra_account_metas_pda(mint: Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[EXTRA_ACCOUNT_METAS_SEED, mint.as_ref()], &crate::ID)
}

/// Decodes the rules held in a meta list account
pub fn stored_extra_account_metas(data: &[u8]) -> Result<Vec<ExtraAccountMeta>> {
    let tlv_state = TlvStateBorrowed::unpack(data)?;
    let extra_accounts =
        ExtraAccountMetaList::unpack_with_tlv_state::<ExecuteInstruction>(&tlv_state)?;
    Ok(extra_accounts.data().to_vec())
}
