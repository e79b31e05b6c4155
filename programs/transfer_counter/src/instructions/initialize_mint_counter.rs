use {
    crate::state::counter::{Direction, MintCounter},
    anchor_lang::prelude::*,
    anchor_spl::{token_2022::Token2022, token_interface::Mint},
};

#[derive(Accounts)]
#[instruction(direction: Direction)]
pub struct InitializeMintCounter<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(mint::token_program = token_program)]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init_if_needed,
        seeds = [direction.mint_counter_seed(), mint.key().as_ref()],
        payer = payer,
        space = MintCounter::space(),
        bump,
    )]
    pub mint_counter: Account<'info, MintCounter>,

    pub token_program: Program<'info, Token2022>,
    pub system_program: Program<'info, System>,
}

impl InitializeMintCounter<'_> {
    pub fn handler(ctx: Context<InitializeMintCounter>, direction: Direction) -> Result<()> {
        let mint = ctx.accounts.mint.key();
        let mint_counter = &mut ctx.accounts.mint_counter;
        mint_counter.initialize(mint, direction, ctx.bumps.mint_counter)?;

        msg!("mint counter {:?} {} for {}", direction, mint_counter.key(), mint);
        Ok(())
    }
}
