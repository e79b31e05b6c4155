pub mod counter;
pub mod program_data;

pub use counter::*;
pub use program_data::*;
