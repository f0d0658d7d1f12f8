use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Group,
    User,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Group => f.write_str("Group"),
            EntityKind::User => f.write_str("User"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("{kind} '{name}' already exists")]
    AlreadyExists { kind: EntityKind, name: String },

    #[error("{kind} '{name}' not found")]
    NotFound { kind: EntityKind, name: String },

    #[error("Group '{0}' has no users")]
    Empty(String),

    #[error("Transaction amount must be a finite number, got {0}")]
    InvalidAmount(f64),
}

impl LedgerError {
    pub(crate) fn group_exists(name: &str) -> Self {
        LedgerError::AlreadyExists {
            kind: EntityKind::Group,
            name: name.to_owned(),
        }
    }

    pub(crate) fn user_exists(name: &str) -> Self {
        LedgerError::AlreadyExists {
            kind: EntityKind::User,
            name: name.to_owned(),
        }
    }

    pub(crate) fn group_not_found(name: &str) -> Self {
        LedgerError::NotFound {
            kind: EntityKind::Group,
            name: name.to_owned(),
        }
    }

    pub(crate) fn user_not_found(name: &str) -> Self {
        LedgerError::NotFound {
            kind: EntityKind::User,
            name: name.to_owned(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("'{command}' expects {expected} argument(s), got {actual}")]
    Arity {
        command: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("Invalid transaction count '{0}'")]
    InvalidCount(String),
}
