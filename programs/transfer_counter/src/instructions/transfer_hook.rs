use {
    crate::{
        error::CounterError,
        resolver::{resolve_for_transfer, slot},
        state::counter::{record_transfer, MintCounter, WalletCounter},
        EXTRA_ACCOUNT_METAS_SEED, HOOK_COUNTER_ACCOUNTS,
    },
    anchor_lang::{prelude::*, solana_program::instruction::AccountMeta},
    anchor_spl::token_2022::spl_token_2022::{
        extension::{
            transfer_hook::TransferHookAccount, BaseStateWithExtensions, StateWithExtensions,
        },
        state::Account as TokenAccount,
    },
};

#[derive(Accounts)]
pub struct TransferHook<'info> {
    /// CHECK: validated by token2022 program
    pub source_token: UncheckedAccount<'info>,
    /// CHECK: validated through extra_account_meta_list seed
    pub mint: UncheckedAccount<'info>,
    /// CHECK: validated by token2022 program
    pub destination_token: UncheckedAccount<'info>,
    /// CHECK: owner of source token account, may be a delegated signer
    pub owner: UncheckedAccount<'info>,
    /// CHECK: ExtraAccountMetaList Account,
    #[account(
        seeds = [EXTRA_ACCOUNT_METAS_SEED, mint.key().as_ref()],
        bump
    )]
    pub extra_account_meta_list: UncheckedAccount<'info>,
}

/// The four records a committed transfer moves
pub struct HookCounters<'info> {
    pub mint_in: Account<'info, MintCounter>,
    pub mint_out: Account<'info, MintCounter>,
    pub source_out: Account<'info, WalletCounter>,
    pub destination_in: Account<'info, WalletCounter>,
}

impl HookCounters<'_> {
    pub fn record(&mut self, amount: u64) -> Result<()> {
        record_transfer(
            amount,
            &mut self.mint_in,
            &mut self.mint_out,
            &mut self.source_out,
            &mut self.destination_in,
        )
    }
    pub fn exit(&self) -> Result<()> {
        self.mint_in.exit(&crate::ID)?;
        self.mint_out.exit(&crate::ID)?;
        self.source_out.exit(&crate::ID)?;
        self.destination_in.exit(&crate::ID)?;
        Ok(())
    }
}

impl TransferHook<'_> {
    /// Runs once per transfer: validate, update, commit. Any failure aborts the
    /// enclosing transfer, so there is nothing to roll back here.
    pub fn handler<'info>(
        ctx: Context<'_, '_, 'info, 'info, TransferHook<'info>>,
        amount: u64,
    ) -> Result<()> {
        msg!("transfer hook validating {}", amount);
        let (source_wallet, destination_wallet) = Self::validations(&ctx)?;
        let expected =
            resolve_for_transfer(ctx.accounts.mint.key(), source_wallet, destination_wallet);
        Self::verify_extra_accounts(&expected, ctx.remaining_accounts)?;
        let mut counters = Self::load_counters(ctx.remaining_accounts)?;

        msg!("transfer hook updating");
        counters.record(amount)?;
        counters.exit()?;

        msg!("transfer hook committed");
        Ok(())
    }

    /// Returns the wallets owning the source and destination token accounts
    fn validations<'info>(
        ctx: &Context<'_, '_, 'info, 'info, TransferHook<'info>>,
    ) -> Result<(Pubkey, Pubkey)> {
        require!(
            ctx.accounts.extra_account_meta_list.owner.eq(&crate::ID),
            CounterError::InvalidExtraAccounts
        );
        let source_wallet = {
            let data = ctx.accounts.source_token.try_borrow_data()?;
            let source_account = StateWithExtensions::<TokenAccount>::unpack(&data)?;
            // only token2022 sets this flag, and only for the duration of a transfer
            let transferring = source_account
                .get_extension::<TransferHookAccount>()
                .map(|extension| bool::from(extension.transferring))
                .unwrap_or(false);
            require!(transferring, CounterError::NotTransferring);
            source_account.base.owner
        };
        let destination_wallet = {
            let data = ctx.accounts.destination_token.try_borrow_data()?;
            StateWithExtensions::<TokenAccount>::unpack(&data)?.base.owner
        };
        Ok((source_wallet, destination_wallet))
    }

    /// Checks the attached counters against the resolved ones, position by position
    pub fn verify_extra_accounts(expected: &[AccountMeta], provided: &[AccountInfo]) -> Result<()> {
        require!(
            expected.len() == HOOK_COUNTER_ACCOUNTS as usize && provided.len() == expected.len(),
            CounterError::InvalidExtraAccounts
        );
        for (meta, info) in expected.iter().zip(provided) {
            require_keys_eq!(meta.pubkey, *info.key, CounterError::InvalidExtraAccounts);
            require!(
                !meta.is_writable || info.is_writable,
                CounterError::InvalidExtraAccounts
            );
        }
        Ok(())
    }

    /// Deserializes the verified counters. Every endpoint needs both of its
    /// wallet counters even though only one of each is written.
    pub fn load_counters<'info>(
        accounts: &'info [AccountInfo<'info>],
    ) -> Result<HookCounters<'info>> {
        for info in accounts {
            require!(
                info.owner == &crate::ID && !info.data_is_empty(),
                CounterError::UninitializedCounter
            );
        }
        Account::<WalletCounter>::try_from(&accounts[slot::SOURCE_IN])?;
        Account::<WalletCounter>::try_from(&accounts[slot::DESTINATION_OUT])?;
        Ok(HookCounters {
            mint_in: Account::try_from(&accounts[slot::MINT_IN])?,
            mint_out: Account::try_from(&accounts[slot::MINT_OUT])?,
            source_out: Account::try_from(&accounts[slot::SOURCE_OUT])?,
            destination_in: Account::try_from(&accounts[slot::DESTINATION_IN])?,
        })
    }
}
