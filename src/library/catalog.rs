use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{common::same_text, Item};

/// Owns every catalog item, in the order they were added.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    #[serde(default)]
    items: Vec<Item>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item`. Duplicate titles are accepted.
    pub fn add(&mut self, item: Item) -> Uuid {
        let id = item.id;
        self.items.push(item);
        id
    }

    pub fn list_all(&self) -> &[Item] {
        &self.items
    }

    /// First item whose title matches, ignoring case.
    pub fn find_by_title(&self, title: &str) -> Option<&Item> {
        self.items.iter().find(|item| same_text(&item.title, title))
    }

    pub(crate) fn find_by_title_mut(&mut self, title: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| same_text(&item.title, title))
    }

    /// Items whose title or author contains `keyword`, ignoring case.
    pub fn search(&self, keyword: &str) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.matches_keyword(keyword))
            .collect()
    }

    pub fn get(&self, id: Uuid) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn stocked() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add(Item::regular("1984", "George Orwell").unwrap());
        catalog.add(Item::regular("Brave New World", "Aldous Huxley").unwrap());
        catalog.add(
            Item::periodical(
                "Scientific American",
                "Various",
                NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
            )
            .unwrap(),
        );
        catalog
    }

    #[test]
    fn empty_catalog_lists_nothing() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.list_all().is_empty());
        assert!(catalog.search("anything").is_empty());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let titles: Vec<_> = stocked()
            .list_all()
            .iter()
            .map(|item| item.title.clone())
            .collect();
        assert_eq!(titles, ["1984", "Brave New World", "Scientific American"]);
    }

    #[test]
    fn find_by_title_is_case_insensitive_exact() {
        let catalog = stocked();
        assert!(catalog.find_by_title("brave new world").is_some());
        assert!(catalog.find_by_title("Brave New").is_none());
        assert!(catalog.find_by_title("Missing").is_none());
    }

    #[test]
    fn duplicate_titles_resolve_to_first_entry() {
        let mut catalog = Catalog::new();
        let first = catalog.add(Item::regular("Dune", "Frank Herbert").unwrap());
        catalog.add(Item::regular("DUNE", "Someone Else").unwrap());

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find_by_title("dune").map(|item| item.id), Some(first));
    }

    #[test]
    fn search_matches_title_or_author_substring() {
        let catalog = stocked();
        let by_author: Vec<_> = catalog
            .search("HUX")
            .into_iter()
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(by_author, ["Brave New World"]);

        let by_title: Vec<_> = catalog
            .search("scientific")
            .into_iter()
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(by_title, ["Scientific American"]);

        assert_eq!(catalog.search("").len(), 3);
        assert!(catalog.search("tolkien").is_empty());
    }
}
