use serde::{Deserialize, Serialize};

use crate::domain::{common::same_text, User, UserId};
use crate::errors::{LibraryError, LibraryResult};

/// Owns every registered user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDirectory {
    #[serde(default)]
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a directory from a previously captured set of users.
    pub fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Registers `name` under the next free id.
    ///
    /// Ids are `max + 1` rather than a count, so they never collide with an
    /// existing user even when the stored ids have gaps. Names that already
    /// exist are accepted.
    pub fn register(&mut self, name: &str) -> LibraryResult<&User> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LibraryError::InvalidName);
        }
        let id = self.next_id();
        self.users.push(User::new(name, id));
        let index = self.users.len() - 1;
        Ok(&self.users[index])
    }

    pub fn next_id(&self) -> UserId {
        self.users.iter().map(|user| user.id).max().map_or(1, |max| max + 1)
    }

    /// First user whose name matches, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|user| same_text(&user.name, name))
    }

    pub(crate) fn find_by_name_mut(&mut self, name: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|user| same_text(&user.name, name))
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_registration_order() {
        let mut directory = UserDirectory::new();
        assert_eq!(directory.register("Ann").unwrap().id, 1);
        assert_eq!(directory.register("Bob").unwrap().id, 2);
        assert_eq!(directory.register("Cy").unwrap().id, 3);
    }

    #[test]
    fn ids_continue_from_highest_existing() {
        let mut directory =
            UserDirectory::from_users(vec![User::new("Ann", 1), User::new("Dee", 5)]);
        assert_eq!(directory.register("Eve").unwrap().id, 6);
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut directory = UserDirectory::new();
        assert!(matches!(directory.register(""), Err(LibraryError::InvalidName)));
        assert!(matches!(directory.register(" \t "), Err(LibraryError::InvalidName)));
        assert!(directory.is_empty());
    }

    #[test]
    fn registered_names_are_trimmed() {
        let mut directory = UserDirectory::new();
        directory.register("  Ann  ").unwrap();
        assert_eq!(directory.list()[0].name, "Ann");
    }

    #[test]
    fn duplicate_names_get_distinct_ids_and_first_wins() {
        let mut directory = UserDirectory::new();
        directory.register("Ann").unwrap();
        directory.register("ANN").unwrap();

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.find_by_name("ann").map(|user| user.id), Some(1));
        assert_eq!(directory.get(2).map(|user| user.name.as_str()), Some("ANN"));
        assert!(directory.find_by_name("Bob").is_none());
    }
}
