use anchor_lang::prelude::*;

/// Compute budget a client should request for a two leg transfer, both hook
/// invocations included
#[constant]
pub const MULTI_TRANSFER_COMPUTE_UNIT_LIMIT: u32 = 400_000;

/// Number of transfers performed by `multi_transfers`
pub const LEG_COUNT: usize = 2;
