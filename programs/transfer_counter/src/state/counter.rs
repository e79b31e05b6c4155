use {
    crate::{
        error::CounterError, MINT_COUNTER_IN_SEED, MINT_COUNTER_OUT_SEED, WALLET_COUNTER_IN_SEED,
        WALLET_COUNTER_OUT_SEED,
    },
    anchor_lang::prelude::*,
};

/// Which side of a transfer a counter accumulates
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Credited on the destination side
    In,
    /// Debited on the source side
    Out,
}

impl Direction {
    pub fn mint_counter_seed(self) -> &'static [u8] {
        match self {
            Direction::In => MINT_COUNTER_IN_SEED,
            Direction::Out => MINT_COUNTER_OUT_SEED,
        }
    }
    pub fn wallet_counter_seed(self) -> &'static [u8] {
        match self {
            Direction::In => WALLET_COUNTER_IN_SEED,
            Direction::Out => WALLET_COUNTER_OUT_SEED,
        }
    }
}

/// Running totals held by every counter record
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    /// Sum of all amounts recorded, in base units
    pub volume: u128,
    /// Number of transfers recorded
    pub transfers: u64,
}

impl Tally {
    pub const SIZE: usize = 16 + 8;

    /// Returns the tally after one more transfer of `amount`, leaving `self` untouched
    pub fn checked_record(&self, amount: u64) -> Result<Tally> {
        match (
            self.volume.checked_add(u128::from(amount)),
            self.transfers.checked_add(1),
        ) {
            (Some(volume), Some(transfers)) => Ok(Tally { volume, transfers }),
            _ => err!(CounterError::Overflow),
        }
    }
}

/// Shared behaviour of mint and wallet counters.
///
/// Only the transfer hook calls `increment`; the runtime rejects writes to the
/// records from any other program because this program owns them.
pub trait CounterExt {
    fn tally(&self) -> Tally;
    fn set_tally(&mut self, tally: Tally);
    fn is_initialized(&self) -> bool;

    /// Adds `amount` to the record, failing without side effects on overflow
    fn increment(&mut self, amount: u64) -> Result<()> {
        let next = self.tally().checked_record(amount)?;
        self.set_tally(next);
        Ok(())
    }
}

/// Inbound or outbound volume of a whole mint
#[account]
#[derive(Debug)]
pub struct MintCounter {
    pub mint: Pubkey,
    pub direction: Direction,
    pub tally: Tally,
    pub bump: u8,
}

impl MintCounter {
    pub fn space() -> usize {
        8 + // discriminator
        32 + // mint
        1 + // direction
        Tally::SIZE +
        1 // bump
    }
    pub fn derive_pda(mint: Pubkey, direction: Direction) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[direction.mint_counter_seed(), mint.as_ref()],
            &crate::ID,
        )
    }
    pub fn initialize(&mut self, mint: Pubkey, direction: Direction, bump: u8) -> Result<()> {
        require!(!self.is_initialized(), CounterError::AlreadyInitialized);
        *self = Self {
            mint,
            direction,
            tally: Tally::default(),
            bump,
        };
        Ok(())
    }
}

impl CounterExt for MintCounter {
    fn tally(&self) -> Tally {
        self.tally
    }
    fn set_tally(&mut self, tally: Tally) {
        self.tally = tally;
    }
    fn is_initialized(&self) -> bool {
        self.mint != Pubkey::default()
    }
}

/// Inbound or outbound volume of one wallet for one mint
#[account]
#[derive(Debug)]
pub struct WalletCounter {
    pub mint: Pubkey,
    /// Owner of the token accounts this counter tracks
    pub wallet: Pubkey,
    pub direction: Direction,
    pub tally: Tally,
    pub bump: u8,
}

impl WalletCounter {
    pub fn space() -> usize {
        8 + // discriminator
        32 + // mint
        32 + // wallet
        1 + // direction
        Tally::SIZE +
        1 // bump
    }
    pub fn derive_pda(mint: Pubkey, wallet: Pubkey, direction: Direction) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                direction.wallet_counter_seed(),
                mint.as_ref(),
                wallet.as_ref(),
            ],
            &crate::ID,
        )
    }
    pub fn initialize(
        &mut self,
        mint: Pubkey,
        wallet: Pubkey,
        direction: Direction,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), CounterError::AlreadyInitialized);
        *self = Self {
            mint,
            wallet,
            direction,
            tally: Tally::default(),
            bump,
        };
        Ok(())
    }
}

impl CounterExt for WalletCounter {
    fn tally(&self) -> Tally {
        self.tally
    }
    fn set_tally(&mut self, tally: Tally) {
        self.tally = tally;
    }
    fn is_initialized(&self) -> bool {
        self.mint != Pubkey::default()
    }
}

/// Applies one transfer to the four counters it moves.
///
/// Every next value is computed before any record is written, so an overflow
/// on any of them leaves all four unchanged.
pub fn record_transfer(
    amount: u64,
    mint_in: &mut MintCounter,
    mint_out: &mut MintCounter,
    source_out: &mut WalletCounter,
    destination_in: &mut WalletCounter,
) -> Result<()> {
    let next_mint_out = mint_out.tally().checked_record(amount)?;
    let next_mint_in = mint_in.tally().checked_record(amount)?;
    let next_source_out = source_out.tally().checked_record(amount)?;
    let next_destination_in = destination_in.tally().checked_record(amount)?;

    mint_out.set_tally(next_mint_out);
    mint_in.set_tally(next_mint_in);
    source_out.set_tally(next_source_out);
    destination_in.set_tally(next_destination_in);
    Ok(())
}
