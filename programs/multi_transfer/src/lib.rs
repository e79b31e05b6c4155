pub mod constants;
pub mod error;
pub mod instructions;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;

declare_id!("4MNxsMM7niQkurWFyDvzhVbD3wHQFyAhnGjrvuYPi6Zu");

#[program]
pub mod multi_transfer {
    use super::*;

    /// Moves `amount1` to the first destination and `amount2` to the second,
    /// each through `TransferChecked` so the mint's hook runs once per leg.
    ///
    /// Remaining accounts carry the hook accounts of both legs, first leg
    /// first, in equal halves.
    pub fn multi_transfers<'info>(
        ctx: Context<'_, '_, '_, 'info, MultiTransfers<'info>>,
        amount1: u64,
        amount2: u64,
    ) -> Result<()> {
        MultiTransfers::handler(ctx, amount1, amount2)
    }
}
