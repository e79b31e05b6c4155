use {
    crate::{error::CounterError, PROGRAM_DATA_SEED},
    anchor_lang::prelude::*,
};

/// Deployment-wide configuration, one instance per program
#[account]
#[derive(Debug)]
pub struct GlobalProgramData {
    /// Identity allowed to enable the hook for new mints
    pub authority: Pubkey,
    pub initialized: bool,
    pub bump: u8,
}

impl GlobalProgramData {
    pub fn space() -> usize {
        8 + // discriminator
        32 + // authority
        1 + // initialized
        1 // bump
    }
    pub fn derive_pda() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[PROGRAM_DATA_SEED], &crate::ID)
    }
    pub fn is_authorized(&self, authority: Pubkey) -> bool {
        self.initialized && self.authority == authority
    }
    /// Fills a freshly allocated record. A second call is an error, never a no-op.
    pub fn initialize(&mut self, authority: Pubkey, bump: u8) -> Result<()> {
        require!(!self.initialized, CounterError::AlreadyInitialized);
        self.authority = authority;
        self.initialized = true;
        self.bump = bump;
        Ok(())
    }
}
