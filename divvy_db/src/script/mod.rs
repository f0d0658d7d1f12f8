pub mod command;
pub mod engine;

pub use command::Command;
pub use engine::{Engine, Outcome};
