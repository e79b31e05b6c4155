use {
    crate::{error::MultiTransferError, LEG_COUNT},
    anchor_lang::{
        prelude::*,
        solana_program::instruction::{AccountMeta, Instruction},
        InstructionData,
    },
    anchor_spl::{
        token_2022::spl_token_2022::onchain::invoke_transfer_checked,
        token_interface::{Mint, Token2022, TokenAccount},
    },
    transfer_counter::resolver::transfer_hook_account_metas,
};

#[derive(Accounts)]
pub struct MultiTransfers<'info> {
    #[account(
        mut,
        token::mint = mint,
        token::authority = signer,
        token::token_program = token_program,
    )]
    pub source_account: Box<InterfaceAccount<'info, TokenAccount>>,
    #[account(
        mut,
        token::mint = mint,
        token::token_program = token_program,
    )]
    pub destination_account_1: Box<InterfaceAccount<'info, TokenAccount>>,
    #[account(
        mut,
        token::mint = mint,
        token::token_program = token_program,
    )]
    pub destination_account_2: Box<InterfaceAccount<'info, TokenAccount>>,
    #[account(
        mint::token_program = token_program,
    )]
    pub mint: Box<InterfaceAccount<'info, Mint>>,
    pub signer: Signer<'info>,
    pub token_program: Program<'info, Token2022>,
}

impl<'info> MultiTransfers<'info> {
    pub fn handler(
        ctx: Context<'_, '_, '_, 'info, MultiTransfers<'info>>,
        amount1: u64,
        amount2: u64,
    ) -> Result<()> {
        msg!("Multi transfers");
        validate_amounts(amount1, amount2)?;
        let (first_leg, second_leg) = split_leg_accounts(ctx.remaining_accounts)?;

        let accounts = &ctx.accounts;
        let decimals = accounts.mint.decimals;

        for (destination, leg_accounts, amount, leg) in [
            (&accounts.destination_account_1, first_leg, amount1, 1),
            (&accounts.destination_account_2, second_leg, amount2, 2),
        ] {
            msg!(
                "Invoke transfer {}: {} with {} hook accounts",
                leg,
                amount,
                leg_accounts.len()
            );
            invoke_transfer_checked(
                accounts.token_program.key,
                accounts.source_account.to_account_info(),
                accounts.mint.to_account_info(),
                destination.to_account_info(),
                accounts.signer.to_account_info(),
                leg_accounts,
                amount,
                decimals,
                &[],
            )?;
        }

        Ok(())
    }
}

pub fn validate_amounts(amount1: u64, amount2: u64) -> Result<()> {
    require!(
        amount1 > 0 && amount2 > 0,
        MultiTransferError::AmountMustBeGreaterThanZero
    );
    Ok(())
}

/// Splits remaining accounts into the hook accounts of each leg.
///
/// Both legs resolve the same number of accounts for a given mint, so an odd
/// count means the caller mixed up the lists.
pub fn split_leg_accounts<T>(accounts: &[T]) -> Result<(&[T], &[T])> {
    require!(
        accounts.len() % LEG_COUNT == 0,
        MultiTransferError::InvalidLegAccounts
    );
    Ok(accounts.split_at(accounts.len() / LEG_COUNT))
}

/// Remaining accounts for a `multi_transfers` on a mint hooked by the
/// transfer counter: the hook accounts of the first leg followed by those of
/// the second.
///
/// Wallets are the owners of the token accounts, not their addresses.
pub fn multi_transfer_remaining_accounts(
    mint: Pubkey,
    source_wallet: Pubkey,
    destination_wallet_1: Pubkey,
    destination_wallet_2: Pubkey,
) -> Vec<AccountMeta> {
    let mut metas = transfer_hook_account_metas(mint, source_wallet, destination_wallet_1);
    metas.extend(transfer_hook_account_metas(
        mint,
        source_wallet,
        destination_wallet_2,
    ));
    metas
}

/// Wallets owning the token accounts of a two leg transfer
pub struct TransferWallets {
    pub source: Pubkey,
    pub destination_1: Pubkey,
    pub destination_2: Pubkey,
}

/// Builds a complete `multi_transfers` instruction, hook accounts included
#[allow(clippy::too_many_arguments)]
pub fn multi_transfers_instruction(
    mint: Pubkey,
    source_account: Pubkey,
    destination_account_1: Pubkey,
    destination_account_2: Pubkey,
    signer: Pubkey,
    wallets: &TransferWallets,
    amount1: u64,
    amount2: u64,
) -> Instruction {
    let mut accounts = crate::accounts::MultiTransfers {
        source_account,
        destination_account_1,
        destination_account_2,
        mint,
        signer,
        token_program: anchor_spl::token_2022::ID,
    }
    .to_account_metas(None);
    accounts.extend(multi_transfer_remaining_accounts(
        mint,
        wallets.source,
        wallets.destination_1,
        wallets.destination_2,
    ));

    Instruction {
        program_id: crate::ID,
        accounts,
        data: crate::instruction::MultiTransfers { amount1, amount2 }.data(),
    }
}
