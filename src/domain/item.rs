//! Domain types representing catalog items.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;
use crate::errors::{LibraryError, LibraryResult};

const ISSUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single lendable entry in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub kind: ItemKind,
    available: bool,
}

impl Item {
    /// Creates an available item, rejecting blank titles.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        kind: ItemKind,
    ) -> LibraryResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(LibraryError::InvalidTitle);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            author: author.into(),
            kind,
            available: true,
        })
    }

    pub fn regular(title: impl Into<String>, author: impl Into<String>) -> LibraryResult<Self> {
        Self::new(title, author, ItemKind::RegularBook)
    }

    pub fn periodical(
        title: impl Into<String>,
        author: impl Into<String>,
        issue_date: NaiveDate,
    ) -> LibraryResult<Self> {
        Self::new(title, author, ItemKind::PeriodicalBook { issue_date })
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn issue_date(&self) -> Option<NaiveDate> {
        match self.kind {
            ItemKind::RegularBook => None,
            ItemKind::PeriodicalBook { issue_date } => Some(issue_date),
        }
    }

    pub(crate) fn mark_borrowed(&mut self) {
        self.available = false;
    }

    pub(crate) fn mark_returned(&mut self) {
        self.available = true;
    }

    /// Case-insensitive match on title or author.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        contains_text(&self.title, keyword) || contains_text(&self.author, keyword)
    }

    pub fn summary(&self) -> ItemSummary {
        ItemSummary {
            id: self.id,
            title: self.title.clone(),
            author: self.author.clone(),
            kind: self.kind.variant(),
            issue_date: self.issue_date(),
            available: self.available,
        }
    }

    fn availability_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Checked Out"
        }
    }
}

impl Identifiable for Item {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Item {
    fn name(&self) -> &str {
        &self.title
    }
}

impl Displayable for Item {
    fn display_label(&self) -> String {
        match self.kind {
            ItemKind::RegularBook => format!(
                "[{}] {} by {} - {}",
                self.kind.label(),
                self.title,
                self.author,
                self.availability_label()
            ),
            ItemKind::PeriodicalBook { issue_date } => format!(
                "[{}] {} by {} ({}) - {}",
                self.kind.label(),
                self.title,
                self.author,
                issue_date.format(ISSUE_DATE_FORMAT),
                self.availability_label()
            ),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_label())
    }
}

/// Closed set of item shapes; periodicals carry their issue date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ItemKind {
    RegularBook,
    PeriodicalBook { issue_date: NaiveDate },
}

impl ItemKind {
    /// Builds a kind from a variant tag, requiring a date for periodicals.
    /// A date supplied for a regular book is ignored.
    pub fn from_variant(variant: ItemVariant, issue_date: Option<NaiveDate>) -> LibraryResult<Self> {
        match variant {
            ItemVariant::Regular => Ok(ItemKind::RegularBook),
            ItemVariant::Periodical => issue_date
                .map(|issue_date| ItemKind::PeriodicalBook { issue_date })
                .ok_or(LibraryError::MissingIssueDate),
        }
    }

    pub fn variant(&self) -> ItemVariant {
        match self {
            ItemKind::RegularBook => ItemVariant::Regular,
            ItemKind::PeriodicalBook { .. } => ItemVariant::Periodical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::RegularBook => "Book",
            ItemKind::PeriodicalBook { .. } => "Periodical",
        }
    }
}

/// Tag used by callers when adding items (`regular` / `periodical`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemVariant {
    Regular,
    Periodical,
}

impl FromStr for ItemVariant {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "regular" => Ok(ItemVariant::Regular),
            "periodical" => Ok(ItemVariant::Periodical),
            other => Err(LibraryError::UnknownItemVariant(other.to_string())),
        }
    }
}

impl fmt::Display for ItemVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ItemVariant::Regular => "regular",
            ItemVariant::Periodical => "periodical",
        };
        f.write_str(label)
    }
}

/// Read-only projection of an item handed to presentation layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemSummary {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub kind: ItemVariant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<NaiveDate>,
    pub available: bool,
}
