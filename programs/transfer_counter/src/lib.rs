pub mod constants;
pub mod error;
pub mod instructions;
pub mod resolver;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("14KA3wb3jtHft5MLy59VCJAAVDbCAduDydUAKDCEnipV");

#[program]
pub mod transfer_counter {
    use spl_transfer_hook_interface::instruction::TransferHookInstruction;

    use super::*;

    pub fn initialize_program_data(ctx: Context<InitializeProgramData>) -> Result<()> {
        InitializeProgramData::handler(ctx)
    }
    pub fn initialize_mint_counter(
        ctx: Context<InitializeMintCounter>,
        direction: Direction,
    ) -> Result<()> {
        InitializeMintCounter::handler(ctx, direction)
    }
    pub fn initialize_wallet_counter(
        ctx: Context<InitializeWalletCounter>,
        direction: Direction,
        wallet: Pubkey,
    ) -> Result<()> {
        InitializeWalletCounter::handler(ctx, direction, wallet)
    }
    pub fn initialize_extra_account_meta_list(
        ctx: Context<InitializeExtraAccountMetaList>,
    ) -> Result<()> {
        InitializeExtraAccountMetaList::handler(ctx)
    }

    pub fn transfer_hook<'info>(
        ctx: Context<'_, '_, 'info, 'info, TransferHook<'info>>,
        amount: u64,
    ) -> Result<()> {
        TransferHook::handler(ctx, amount)
    }

    pub fn fallback<'info>(
        program_id: &Pubkey,
        accounts: &'info [AccountInfo<'info>],
        data: &[u8],
    ) -> Result<()> {
        let instruction = TransferHookInstruction::unpack(data)?;

        // match instruction discriminator to transfer hook interface execute instruction
        // token2022 program CPIs this instruction on token transfer
        match instruction {
            TransferHookInstruction::Execute { amount } => {
                let amount_bytes = amount.to_le_bytes();

                // invoke transfer hook to tally the transfer on its counters
                __private::__global::transfer_hook(program_id, accounts, &amount_bytes)
            }
            _ => Err(ProgramError::InvalidInstructionData.into()),
        }
    }
}
