use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Transaction {
    pub user: String,
    pub amount: f64,
}

impl Transaction {
    pub fn new(user: &str, amount: f64) -> Self {
        Self {
            user: user.to_owned(),
            amount,
        }
    }
}
