mod error;
mod loader;
mod loaders;

pub use error::*;
pub use loader::*;
pub use loaders::*;
