use {
    crate::{
        error::CounterError, resolver::extra_account_metas,
        state::program_data::GlobalProgramData, EXTRA_ACCOUNT_METAS_SEED, PROGRAM_DATA_SEED,
    },
    anchor_lang::{
        prelude::*,
        system_program::{create_account, CreateAccount},
    },
    anchor_spl::{
        token_2022::{
            spl_token_2022::{
                extension::{
                    transfer_hook::TransferHook as TransferHookExtension, BaseStateWithExtensions,
                    StateWithExtensions,
                },
                state::Mint as MintState,
            },
            Token2022,
        },
        token_interface::Mint,
    },
    spl_tlv_account_resolution::state::ExtraAccountMetaList,
    spl_transfer_hook_interface::instruction::ExecuteInstruction,
};

#[derive(Accounts)]
pub struct InitializeExtraAccountMetaList<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [PROGRAM_DATA_SEED],
        bump = program_data.bump,
    )]
    pub program_data: Account<'info, GlobalProgramData>,

    /// CHECK: ExtraAccountMetaList Account, must use these seeds
    #[account(
        mut,
        seeds = [EXTRA_ACCOUNT_METAS_SEED, mint.key().as_ref()],
        bump
    )]
    pub extra_account_meta_list: AccountInfo<'info>,

    #[account(mint::token_program = token_program)]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    pub token_program: Program<'info, Token2022>,
    pub system_program: Program<'info, System>,
}

impl InitializeExtraAccountMetaList<'_> {
    pub fn handler(ctx: Context<InitializeExtraAccountMetaList>) -> Result<()> {
        Self::validations(&ctx)?;

        let account_metas = extra_account_metas()?;

        // calculate account size
        let account_size = ExtraAccountMetaList::size_of(account_metas.len())? as u64;
        // calculate minimum required lamports
        let lamports = Rent::get()?.minimum_balance(account_size as usize);

        let mint = ctx.accounts.mint.key();
        let signer_seeds: &[&[&[u8]]] = &[&[
            EXTRA_ACCOUNT_METAS_SEED,
            mint.as_ref(),
            &[ctx.bumps.extra_account_meta_list],
        ]];

        // create ExtraAccountMetaList account
        create_account(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                CreateAccount {
                    from: ctx.accounts.authority.to_account_info(),
                    to: ctx.accounts.extra_account_meta_list.to_account_info(),
                },
            )
            .with_signer(signer_seeds),
            lamports,
            account_size,
            ctx.program_id,
        )?;

        // initialize ExtraAccountMetaList account with the counter rules
        ExtraAccountMetaList::init::<ExecuteInstruction>(
            &mut ctx.accounts.extra_account_meta_list.try_borrow_mut_data()?,
            &account_metas,
        )?;

        msg!("extra account metas {} for {}", ctx.accounts.extra_account_meta_list.key, mint);
        Ok(())
    }

    fn validations(ctx: &Context<InitializeExtraAccountMetaList>) -> Result<()> {
        require!(
            ctx.accounts
                .program_data
                .is_authorized(ctx.accounts.authority.key()),
            CounterError::Unauthorized
        );
        // the list is immutable once written
        require!(
            ctx.accounts.extra_account_meta_list.data_is_empty()
                && ctx.accounts.extra_account_meta_list.lamports() == 0,
            CounterError::AlreadyInitialized
        );
        {
            let mint_info = ctx.accounts.mint.to_account_info();
            let data = mint_info.try_borrow_data()?;
            let mint = StateWithExtensions::<MintState>::unpack(&data)?;
            let hook_program_id = mint
                .get_extension::<TransferHookExtension>()
                .map(|hook| Option::<Pubkey>::from(hook.program_id))
                .map_err(|_| error!(CounterError::MintHookMismatch))?;
            require!(
                hook_program_id == Some(crate::ID),
                CounterError::MintHookMismatch
            );
        }
        Ok(())
    }
}
