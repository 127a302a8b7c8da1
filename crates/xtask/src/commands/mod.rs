//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod check;
mod features;
mod list;
mod show;

pub use check::Check;
pub use features::Features;
pub use list::List;
pub use show::Show;
