//! Interactive shell
//!
//! Action parsing, prompting, and the command loop.

pub mod action;
pub mod prompt;
pub mod session;

pub use action::Action;
pub use prompt::{parse_fee, Prompter};
pub use session::{Flow, Session};
