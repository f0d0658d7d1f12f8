use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct User {
    pub name: String,
    pub balance: f64,
}

impl User {
    pub fn new(name: &str) -> Self {
        User {
            name: name.to_owned(),
            balance: 0.0,
        }
    }

    pub(crate) fn credit(&mut self, amount: f64) {
        self.balance += amount;
    }
}
