pub mod multi_transfers;

pub use multi_transfers::*;
