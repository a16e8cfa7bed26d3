//! Immutable records of borrow and return events.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{common::*, user::UserId};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One borrow or return event. Fields are private so a recorded entry cannot
/// be altered after the fact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    id: Uuid,
    user_id: UserId,
    item_id: Uuid,
    action: TransactionAction,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        user_id: UserId,
        item_id: Uuid,
        action: TransactionAction,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            item_id,
            action,
            timestamp,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn item_id(&self) -> Uuid {
        self.item_id
    }

    pub fn action(&self) -> TransactionAction {
        self.action
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("txn:{} [{}]", self.id, self.action)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// What happened to the item.
pub enum TransactionAction {
    Borrowed,
    Returned,
}

impl fmt::Display for TransactionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionAction::Borrowed => "borrowed",
            TransactionAction::Returned => "returned",
        };
        f.write_str(label)
    }
}

/// A transaction with its user and item resolved to display names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionView {
    pub user_name: String,
    pub title: String,
    pub action: TransactionAction,
    pub timestamp: DateTime<Utc>,
}

impl Displayable for TransactionView {
    fn display_label(&self) -> String {
        format!(
            "{} {} '{}' on {}",
            self.user_name,
            self.action,
            self.title,
            self.timestamp.format(TIMESTAMP_FORMAT)
        )
    }
}

impl fmt::Display for TransactionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_label())
    }
}
