use tracing::debug;

use crate::core::{Group, Transaction};
use crate::error::LedgerError;

/// Every group in the ledger, in the order they were added.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    groups: Vec<Group>,
}

impl Ledger {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    pub fn add_group(&mut self, name: &str) -> Result<(), LedgerError> {
        if self.find_group(name).is_some() {
            return Err(LedgerError::group_exists(name));
        }

        self.groups.push(Group::new(name));
        debug!(group = name, total = self.groups.len(), "group added");
        Ok(())
    }

    pub fn find_group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name() == name)
    }

    pub(crate) fn find_group_mut(&mut self, name: &str) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.name() == name)
    }

    pub fn list_groups(&self) -> Vec<&str> {
        self.groups.iter().map(Group::name).collect()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    fn group(&self, name: &str) -> Result<&Group, LedgerError> {
        self.find_group(name)
            .ok_or_else(|| LedgerError::group_not_found(name))
    }

    fn group_mut(&mut self, name: &str) -> Result<&mut Group, LedgerError> {
        self.find_group_mut(name)
            .ok_or_else(|| LedgerError::group_not_found(name))
    }

    pub fn add_user(&mut self, group: &str, user: &str) -> Result<(), LedgerError> {
        self.group_mut(group)?.add_user(user)
    }

    pub fn remove_user(&mut self, group: &str, user: &str) -> Result<(), LedgerError> {
        self.group_mut(group)?.remove_user(user)?;
        Ok(())
    }

    pub fn list_users(&self, group: &str) -> Result<Vec<&str>, LedgerError> {
        Ok(self.group(group)?.list_users())
    }

    pub fn balance(&self, group: &str, user: &str) -> Result<f64, LedgerError> {
        self.group(group)?.balance(user)
    }

    pub fn under_paid(&self, group: &str) -> Result<Vec<&str>, LedgerError> {
        self.group(group)?.least_paid()
    }

    pub fn add_transaction(
        &mut self,
        group: &str,
        user: &str,
        amount: f64,
    ) -> Result<(), LedgerError> {
        self.group_mut(group)?.add_transaction(user, amount)
    }

    pub fn recent_transactions(
        &self,
        group: &str,
        count: usize,
    ) -> Result<Vec<&Transaction>, LedgerError> {
        Ok(self.group(group)?.recent_transactions(count))
    }

    pub fn purge_user(&mut self, group: &str, user: &str) -> Result<(), LedgerError> {
        self.group_mut(group)?.purge_user(user);
        Ok(())
    }
}
