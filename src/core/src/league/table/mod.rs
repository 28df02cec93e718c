mod aggregator;
mod form;
mod record;
mod row;
mod totals;

pub use aggregator::*;
pub use form::*;
pub use record::*;
pub use row::*;
pub use totals::*;
