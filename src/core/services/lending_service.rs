//! Borrow/return orchestration across the catalog, user directory, and log.

use std::{collections::HashMap, fmt};

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::config::{LibraryConfig, SeedItem};
use crate::core::time::{Clock, SystemClock};
use crate::domain::{
    Item, ItemKind, ItemSummary, ItemVariant, TransactionAction, TransactionView, UserId,
};
use crate::errors::LibraryResult;
use crate::library::{Catalog, TransactionLog, UserDirectory};

/// Result of a borrow request. Only `Borrowed` changes any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowOutcome {
    Borrowed,
    Unavailable,
    UserNotFound,
    ItemNotFound,
}

impl BorrowOutcome {
    pub fn is_success(self) -> bool {
        self == BorrowOutcome::Borrowed
    }
}

impl fmt::Display for BorrowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BorrowOutcome::Borrowed => "Item borrowed.",
            BorrowOutcome::Unavailable => "Item is currently unavailable.",
            BorrowOutcome::UserNotFound => "User not found.",
            BorrowOutcome::ItemNotFound => "Book not found.",
        };
        f.write_str(label)
    }
}

/// Result of a return request. Only `Returned` changes any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    Returned,
    NotBorrowed,
    UserNotFound,
    ItemNotFound,
}

impl ReturnOutcome {
    pub fn is_success(self) -> bool {
        self == ReturnOutcome::Returned
    }
}

impl fmt::Display for ReturnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReturnOutcome::Returned => "Item returned.",
            ReturnOutcome::NotBorrowed => "Item was not borrowed by this user.",
            ReturnOutcome::UserNotFound => "User not found.",
            ReturnOutcome::ItemNotFound => "Book not found.",
        };
        f.write_str(label)
    }
}

/// Owns the catalog, the user directory and the transaction log, and keeps
/// them consistent: a transaction is recorded exactly when a borrow or return
/// actually changed an item's holder.
pub struct LendingService {
    catalog: Catalog,
    users: UserDirectory,
    log: TransactionLog,
    clock: Box<dyn Clock>,
}

impl LendingService {
    /// Creates an empty library stamped by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            catalog: Catalog::new(),
            users: UserDirectory::new(),
            log: TransactionLog::new(),
            clock,
        }
    }

    /// Creates a library stocked with the configured seed items.
    pub fn from_config(config: &LibraryConfig) -> LibraryResult<Self> {
        let mut service = Self::new();
        service.seed(&config.seed_items)?;
        Ok(service)
    }

    /// Adds every seed item to the catalog, stopping at the first invalid one.
    pub fn seed(&mut self, seeds: &[SeedItem]) -> LibraryResult<()> {
        for seed in seeds {
            self.add_item(seed.kind, &seed.title, &seed.author, seed.issue_date)?;
        }
        Ok(())
    }

    pub fn seed_defaults(&mut self) -> LibraryResult<()> {
        self.seed(&LibraryConfig::default().seed_items)
    }

    pub fn register_user(&mut self, name: &str) -> LibraryResult<UserId> {
        let user = self.users.register(name)?;
        debug!(user_id = user.id, name = %user.name, "registered user");
        Ok(user.id)
    }

    pub fn add_item(
        &mut self,
        variant: ItemVariant,
        title: &str,
        author: &str,
        issue_date: Option<NaiveDate>,
    ) -> LibraryResult<Uuid> {
        let kind = ItemKind::from_variant(variant, issue_date)?;
        let item = Item::new(title, author, kind)?;
        debug!(item_id = %item.id, title = %item.title, kind = item.kind.label(), "added item");
        Ok(self.catalog.add(item))
    }

    pub fn search_items(&self, keyword: &str) -> Vec<ItemSummary> {
        self.catalog
            .search(keyword)
            .into_iter()
            .map(Item::summary)
            .collect()
    }

    pub fn list_all_items(&self) -> Vec<ItemSummary> {
        self.catalog.list_all().iter().map(Item::summary).collect()
    }

    /// Checks `title` out to `user_name`. The user is resolved before the item.
    pub fn borrow(&mut self, user_name: &str, title: &str) -> BorrowOutcome {
        let Some(user) = self.users.find_by_name_mut(user_name) else {
            return BorrowOutcome::UserNotFound;
        };
        let Some(item) = self.catalog.find_by_title_mut(title) else {
            return BorrowOutcome::ItemNotFound;
        };
        if user.borrow(item).is_err() {
            return BorrowOutcome::Unavailable;
        }
        let txn_id = self
            .log
            .record(user, item, TransactionAction::Borrowed, self.clock.now());
        debug!(%txn_id, user_id = user.id, item_id = %item.id, "item borrowed");
        BorrowOutcome::Borrowed
    }

    /// Checks `title` back in from `user_name`. The user is resolved before the item.
    pub fn return_item(&mut self, user_name: &str, title: &str) -> ReturnOutcome {
        let Some(user) = self.users.find_by_name_mut(user_name) else {
            return ReturnOutcome::UserNotFound;
        };
        let Some(item) = self.catalog.find_by_title_mut(title) else {
            return ReturnOutcome::ItemNotFound;
        };
        if user.return_item(item).is_err() {
            return ReturnOutcome::NotBorrowed;
        }
        let txn_id = self
            .log
            .record(user, item, TransactionAction::Returned, self.clock.now());
        debug!(%txn_id, user_id = user.id, item_id = %item.id, "item returned");
        ReturnOutcome::Returned
    }

    /// Titles held by `user_name` in catalog order, or `None` for an unknown user.
    pub fn list_borrowed(&self, user_name: &str) -> Option<Vec<String>> {
        let user = self.users.find_by_name(user_name)?;
        Some(
            self.catalog
                .list_all()
                .iter()
                .filter(|item| user.holds(item.id))
                .map(|item| item.title.clone())
                .collect(),
        )
    }

    pub fn list_transactions(&self) -> Vec<TransactionView> {
        self.log
            .list_all()
            .iter()
            .map(|txn| TransactionView {
                user_name: self
                    .users
                    .get(txn.user_id())
                    .map(|user| user.name.clone())
                    .unwrap_or_else(|| format!("user #{}", txn.user_id())),
                title: self
                    .catalog
                    .get(txn.item_id())
                    .map(|item| item.title.clone())
                    .unwrap_or_else(|| format!("item {}", txn.item_id())),
                action: txn.action(),
                timestamp: txn.timestamp(),
            })
            .collect()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    pub fn log(&self) -> &TransactionLog {
        &self.log
    }

    /// Detects holdings that disagree with item availability.
    ///
    /// An item must be unavailable exactly when one user holds it. An empty
    /// result means the stores are consistent.
    pub fn holding_warnings(&self) -> Vec<String> {
        let mut holders: HashMap<Uuid, Vec<UserId>> = HashMap::new();
        let mut warnings = Vec::new();

        for user in self.users.list() {
            for item_id in user.borrowed_ids() {
                holders.entry(item_id).or_default().push(user.id);
                if self.catalog.get(item_id).is_none() {
                    warnings.push(format!(
                        "user {} holds unknown item {}",
                        user.id, item_id
                    ));
                }
            }
        }

        for item in self.catalog.list_all() {
            match holders.get(&item.id).map(Vec::len).unwrap_or(0) {
                0 if !item.is_available() => warnings.push(format!(
                    "item '{}' is checked out but held by nobody",
                    item.title
                )),
                0 => {}
                1 if item.is_available() => warnings.push(format!(
                    "item '{}' is held but marked available",
                    item.title
                )),
                1 => {}
                count => warnings.push(format!(
                    "item '{}' is held by {} users",
                    item.title, count
                )),
            }
        }
        warnings
    }
}

impl Default for LendingService {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LendingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LendingService")
            .field("catalog", &self.catalog)
            .field("users", &self.users)
            .field("log", &self.log)
            .finish_non_exhaustive()
    }
}
