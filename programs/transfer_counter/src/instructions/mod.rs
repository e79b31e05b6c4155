pub mod initialize_extra_account_meta_list;
pub mod initialize_mint_counter;
pub mod initialize_program_data;
pub mod initialize_wallet_counter;
pub mod transfer_hook;

pub use initialize_extra_account_meta_list::*;
pub use initialize_mint_counter::*;
pub use initialize_program_data::*;
pub use initialize_wallet_counter::*;
pub use transfer_hook::*;
