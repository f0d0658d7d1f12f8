use tracing::debug;

use crate::core::User;
use crate::error::LedgerError;

/// Users of one group, kept in non-decreasing balance order.
///
/// Every mutation finds its target slot with `partition_point`, so the order
/// holds after each call rather than being restored by a full sort.
#[derive(Debug, Default, Clone)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.users.iter().map(|u| u.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.users.iter().position(|u| u.name == name)
    }

    /// Adds a zero-balance user after everyone at or below zero, which keeps
    /// insertion order among fresh users and stays sorted once balances go negative.
    pub fn insert(&mut self, name: &str) -> Result<usize, LedgerError> {
        if self.contains(name) {
            return Err(LedgerError::user_exists(name));
        }

        let user = User::new(name);
        let slot = self.users.partition_point(|u| u.balance <= user.balance);
        self.users.insert(slot, user);

        debug!(user = name, position = slot, "user added");
        Ok(slot)
    }

    pub fn remove(&mut self, name: &str) -> Result<User, LedgerError> {
        let index = self
            .position(name)
            .ok_or_else(|| LedgerError::user_not_found(name))?;

        Ok(self.users.remove(index))
    }

    /// Credits `amount` to one user and moves it to its new sorted slot.
    /// Ties land after users already holding the same balance.
    pub fn apply(&mut self, name: &str, amount: f64) -> Result<usize, LedgerError> {
        let index = self
            .position(name)
            .ok_or_else(|| LedgerError::user_not_found(name))?;

        let mut user = self.users.remove(index);
        user.credit(amount);

        let slot = self.users.partition_point(|u| u.balance <= user.balance);
        debug!(
            user = name,
            balance = user.balance,
            from = index,
            to = slot,
            "balance updated"
        );
        self.users.insert(slot, user);

        Ok(slot)
    }

    /// All users tied at the lowest balance, or `None` when nobody is registered.
    pub fn least_paid(&self) -> Option<Vec<&str>> {
        let lowest = self.users.first()?.balance;

        Some(
            self.users
                .iter()
                .take_while(|u| u.balance == lowest)
                .map(|u| u.name.as_str())
                .collect(),
        )
    }

    pub fn is_sorted(&self) -> bool {
        self.users.is_sorted_by(|a, b| a.balance <= b.balance)
    }
}
