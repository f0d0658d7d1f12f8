#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::panic)]
#![deny(unused_must_use)]

pub mod core;
pub mod error;
pub mod script;

pub use crate::core::{Group, Ledger, Transaction, User};
pub use error::{EntityKind, LedgerError, ScriptError};
pub use script::{Command, Engine, Outcome};
