pub mod elo;
pub mod flags;
pub mod head_to_head;
pub mod history;
pub mod matches;
pub mod points;
pub mod power;
pub mod progression;
pub mod records;
pub mod schedule;
pub mod settings;
pub mod table;
pub mod teams;
pub mod validation;

pub use elo::*;
pub use flags::*;
pub use head_to_head::*;
pub use history::*;
pub use matches::*;
pub use points::*;
pub use power::*;
pub use progression::*;
pub use records::*;
pub use schedule::*;
pub use settings::*;
pub use table::*;
pub use teams::*;
pub use validation::*;
