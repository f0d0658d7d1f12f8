use serde::Serialize;

use crate::core::{Ledger, Transaction};
use crate::error::LedgerError;

use super::command::Command;

/// What a successfully executed command produced, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Done,
    Groups { names: Vec<String> },
    Users { names: Vec<String> },
    Balance { user: String, balance: f64 },
    UnderPaid { names: Vec<String> },
    Transactions { entries: Vec<Transaction> },
    Quit,
}

fn owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_owned).collect()
}

/// Runs commands against a ledger it owns.
pub struct Engine {
    ledger: Ledger,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            ledger: Ledger::new(),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome, LedgerError> {
        let ledger = &mut self.ledger;

        let outcome = match command {
            Command::AddGroup { group } => {
                ledger.add_group(&group)?;
                Outcome::Done
            }
            Command::ListGroups => Outcome::Groups {
                names: owned(ledger.list_groups()),
            },
            Command::AddUser { group, user } => {
                ledger.add_user(&group, &user)?;
                Outcome::Done
            }
            Command::RemoveUser { group, user } => {
                ledger.remove_user(&group, &user)?;
                Outcome::Done
            }
            Command::ListUsers { group } => Outcome::Users {
                names: owned(ledger.list_users(&group)?),
            },
            Command::UserBalance { group, user } => {
                let balance = ledger.balance(&group, &user)?;
                Outcome::Balance { user, balance }
            }
            Command::UnderPaid { group } => Outcome::UnderPaid {
                names: owned(ledger.under_paid(&group)?),
            },
            Command::AddXct {
                group,
                user,
                amount,
            } => {
                ledger.add_transaction(&group, &user, amount)?;
                Outcome::Done
            }
            Command::RecentXct { group, count } => Outcome::Transactions {
                entries: ledger
                    .recent_transactions(&group, count)?
                    .into_iter()
                    .cloned()
                    .collect(),
            },
            Command::Quit => Outcome::Quit,
        };

        Ok(outcome)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::error::EntityKind;

    fn run(engine: &mut Engine, line: &str) -> Result<Outcome, LedgerError> {
        let command = Command::parse(line)
            .expect("line should parse")
            .expect("line should hold a command");
        engine.execute(command)
    }

    #[test]
    fn test_script_round() {
        let mut engine = Engine::new();
        let script = [
            "add_group camp",
            "add_user camp alice",
            "add_user camp bob",
            "add_xct camp alice 10",
            "add_xct camp bob 4",
        ];
        for line in script {
            assert_eq!(run(&mut engine, line).unwrap(), Outcome::Done);
        }

        assert_eq!(
            run(&mut engine, "list_users camp").unwrap(),
            Outcome::Users {
                names: vec!["bob".to_string(), "alice".to_string()]
            }
        );
        assert_eq!(
            run(&mut engine, "user_balance camp alice").unwrap(),
            Outcome::Balance {
                user: "alice".to_string(),
                balance: 10.0
            }
        );
        assert_eq!(
            run(&mut engine, "under_paid camp").unwrap(),
            Outcome::UnderPaid {
                names: vec!["bob".to_string()]
            }
        );
        assert_eq!(
            run(&mut engine, "recent_xct camp 1").unwrap(),
            Outcome::Transactions {
                entries: vec![Transaction::new("bob", 4.0)]
            }
        );
        assert_eq!(run(&mut engine, "quit").unwrap(), Outcome::Quit);
    }

    #[test]
    fn test_errors_pass_through() {
        let mut engine = Engine::new();
        run(&mut engine, "add_group camp").unwrap();

        assert_eq!(
            run(&mut engine, "add_group camp").unwrap_err(),
            LedgerError::AlreadyExists {
                kind: EntityKind::Group,
                name: "camp".to_string()
            }
        );
        assert_eq!(
            run(&mut engine, "remove_user camp alice").unwrap_err(),
            LedgerError::NotFound {
                kind: EntityKind::User,
                name: "alice".to_string()
            }
        );
        assert_eq!(
            run(&mut engine, "under_paid camp").unwrap_err(),
            LedgerError::Empty("camp".to_string())
        );
        assert_eq!(engine.ledger().group_count(), 1);
    }

    #[test]
    fn test_outcome_serializes_tagged() {
        let outcome = Outcome::Balance {
            user: "alice".to_string(),
            balance: 2.5,
        };

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"outcome": "balance", "user": "alice", "balance": 2.5})
        );
    }
}
