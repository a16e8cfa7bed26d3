use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{common::*, item::Item};
use crate::library::Catalog;

/// Sequential identifier assigned by the user directory, starting at 1.
pub type UserId = u32;

/// A registered borrower and the items it currently holds.
///
/// Holdings are item ids; the catalog owns the items themselves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    borrowed: HashSet<Uuid>,
}

impl User {
    pub fn new(name: impl Into<String>, id: UserId) -> Self {
        Self {
            id,
            name: name.into(),
            borrowed: HashSet::new(),
        }
    }

    /// Takes `item` out of circulation and adds it to this user's holdings.
    pub fn borrow(&mut self, item: &mut Item) -> Result<(), HoldingRejection> {
        if !item.is_available() {
            return Err(HoldingRejection::Unavailable);
        }
        self.borrowed.insert(item.id);
        item.mark_borrowed();
        Ok(())
    }

    /// Gives `item` back, provided this user is the one holding it.
    pub fn return_item(&mut self, item: &mut Item) -> Result<(), HoldingRejection> {
        if !self.borrowed.remove(&item.id) {
            return Err(HoldingRejection::NotBorrowed);
        }
        item.mark_returned();
        Ok(())
    }

    pub fn holds(&self, item_id: Uuid) -> bool {
        self.borrowed.contains(&item_id)
    }

    /// Identifiers of held items, in no particular order.
    pub fn borrowed_ids(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.borrowed.iter().copied()
    }

    pub fn borrowed_count(&self) -> usize {
        self.borrowed.len()
    }

    /// Resolves held ids against the catalog that owns the items.
    pub fn borrowed_items<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Item> {
        self.borrowed.iter().filter_map(|id| catalog.get(*id)).collect()
    }
}

impl NamedEntity for User {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for User {
    fn display_label(&self) -> String {
        format!("{} (ID: {})", self.name, self.id)
    }
}

/// Normal refusals of a holding transition. Neither leaves any state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldingRejection {
    /// The item is already checked out, possibly by the same user.
    Unavailable,
    /// The user does not hold the item.
    NotBorrowed,
}

impl fmt::Display for HoldingRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HoldingRejection::Unavailable => "item is currently unavailable",
            HoldingRejection::NotBorrowed => "item is not borrowed by this user",
        };
        f.write_str(label)
    }
}
