pub mod lending_service;

pub use lending_service::{BorrowOutcome, LendingService, ReturnOutcome};
