//! Remote Command Wrappers
//!
//! Run a manager operation, then either dispatch its action or report the
//! failure. Local state is only touched on success.

mod list;
mod todo;

pub use list::*;
pub use todo::*;
