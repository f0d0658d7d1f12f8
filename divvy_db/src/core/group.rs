use tracing::debug;

use crate::core::{Transaction, TransactionLog, User, UserRegistry};
use crate::error::LedgerError;

/// A named group owning its users and their transaction history.
///
/// The name is the group's key in the ledger and cannot be changed once
/// the group exists:
///
/// ```compile_fail
/// let mut ledger = divvy_db::Ledger::new();
/// ledger.add_group("rent").unwrap();
/// ledger.find_group_mut("rent").unwrap().name = "camp".to_string();
/// ```
#[derive(Debug, Clone)]
pub struct Group {
    name: String,
    users: UserRegistry,
    xcts: TransactionLog,
}

impl Group {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            users: UserRegistry::new(),
            xcts: TransactionLog::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn users(&self) -> &UserRegistry {
        &self.users
    }

    pub fn transactions(&self) -> &TransactionLog {
        &self.xcts
    }

    pub fn add_user(&mut self, name: &str) -> Result<(), LedgerError> {
        self.users.insert(name)?;
        Ok(())
    }

    /// Removes the user together with every transaction they made.
    pub fn remove_user(&mut self, name: &str) -> Result<User, LedgerError> {
        let user = self.users.remove(name)?;
        let purged = self.xcts.purge_user(name);

        debug!(group = %self.name, user = name, purged, "user removed");
        Ok(user)
    }

    pub fn list_users(&self) -> Vec<&str> {
        self.users.names()
    }

    pub fn balance(&self, name: &str) -> Result<f64, LedgerError> {
        self.users
            .get(name)
            .map(|u| u.balance)
            .ok_or_else(|| LedgerError::user_not_found(name))
    }

    pub fn least_paid(&self) -> Result<Vec<&str>, LedgerError> {
        self.users
            .least_paid()
            .ok_or_else(|| LedgerError::Empty(self.name.clone()))
    }

    /// Records the transaction and re-slots the user. Nothing changes when
    /// the amount is not finite or the user is unknown.
    pub fn add_transaction(&mut self, name: &str, amount: f64) -> Result<(), LedgerError> {
        if !amount.is_finite() {
            return Err(LedgerError::InvalidAmount(amount));
        }
        if !self.users.contains(name) {
            return Err(LedgerError::user_not_found(name));
        }

        self.users.apply(name, amount)?;
        self.xcts.record(name, amount);
        Ok(())
    }

    pub fn recent_transactions(&self, count: usize) -> Vec<&Transaction> {
        self.xcts.recent(count).collect()
    }

    pub fn purge_user(&mut self, name: &str) {
        self.xcts.purge_user(name);
    }
}
