use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Identifiable, Item, Transaction, TransactionAction, User};

/// Append-only history of borrow and return events.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionLog {
    #[serde(default)]
    entries: Vec<Transaction>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record of `action`. The caller has already applied it.
    pub fn record(
        &mut self,
        user: &User,
        item: &Item,
        action: TransactionAction,
        timestamp: DateTime<Utc>,
    ) -> Uuid {
        let transaction = Transaction::new(user.id, item.id, action, timestamp);
        let id = transaction.id();
        self.entries.push(transaction);
        id
    }

    pub fn list_all(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
