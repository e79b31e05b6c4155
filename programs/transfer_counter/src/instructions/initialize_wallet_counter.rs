use {
    crate::state::counter::{Direction, WalletCounter},
    anchor_lang::prelude::*,
    anchor_spl::{token_2022::Token2022, token_interface::Mint},
};

#[derive(Accounts)]
#[instruction(direction: Direction, wallet: Pubkey)]
pub struct InitializeWalletCounter<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(mint::token_program = token_program)]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init_if_needed,
        seeds = [
            direction.wallet_counter_seed(),
            mint.key().as_ref(),
            wallet.as_ref(),
        ],
        payer = payer,
        space = WalletCounter::space(),
        bump,
    )]
    pub wallet_counter: Account<'info, WalletCounter>,

    pub token_program: Program<'info, Token2022>,
    pub system_program: Program<'info, System>,
}

impl InitializeWalletCounter<'_> {
    pub fn handler(
        ctx: Context<InitializeWalletCounter>,
        direction: Direction,
        wallet: Pubkey,
    ) -> Result<()> {
        let mint = ctx.accounts.mint.key();
        let wallet_counter = &mut ctx.accounts.wallet_counter;
        wallet_counter.initialize(mint, wallet, direction, ctx.bumps.wallet_counter)?;

        msg!(
            "wallet counter {:?} {} for {} on {}",
            direction,
            wallet_counter.key(),
            wallet,
            mint
        );
        Ok(())
    }
}
