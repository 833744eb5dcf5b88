//! Device-local persistence for the favorites set

mod context;
mod favorites;

pub use context::*;
pub use favorites::*;
