use {
    crate::{state::program_data::GlobalProgramData, PROGRAM_DATA_SEED},
    anchor_lang::prelude::*,
};

#[derive(Accounts)]
pub struct InitializeProgramData<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init_if_needed,
        seeds = [PROGRAM_DATA_SEED],
        payer = authority,
        space = GlobalProgramData::space(),
        bump,
    )]
    pub program_data: Account<'info, GlobalProgramData>,

    pub system_program: Program<'info, System>,
}

impl InitializeProgramData<'_> {
    pub fn handler(ctx: Context<InitializeProgramData>) -> Result<()> {
        let program_data = &mut ctx.accounts.program_data;
        program_data.initialize(ctx.accounts.authority.key(), ctx.bumps.program_data)?;

        msg!("program data {} managed by {}", program_data.key(), program_data.authority);
        Ok(())
    }
}
