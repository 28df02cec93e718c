pub mod league;
pub mod utils;

pub use league::*;
pub use utils::*;
