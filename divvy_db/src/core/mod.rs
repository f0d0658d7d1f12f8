pub mod group;
pub mod ledger;
pub mod registry;
pub mod transaction;
pub mod user;
pub mod xct_log;

pub use group::Group;
pub use ledger::Ledger;
pub use registry::UserRegistry;
pub use transaction::Transaction;
pub use user::User;
pub use xct_log::TransactionLog;
