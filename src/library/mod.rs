//! Stores owned by the lending service.

pub mod catalog;
pub mod directory;
pub mod transaction_log;

pub use catalog::Catalog;
pub use directory::UserDirectory;
pub use transaction_log::TransactionLog;
