mod numbers;
mod time;

pub use numbers::*;
pub use time::*;
