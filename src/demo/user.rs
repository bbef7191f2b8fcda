//! User records and the in-memory directory that looks them up

use crate::option::Option;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename(serialize = "ID"), alias = "ID")]
    pub id: String,
    #[serde(rename(serialize = "Name"), alias = "Name")]
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Users keyed by id
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: BTreeMap<String, User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding the single built-in user `1`
    pub fn with_default_users() -> Self {
        Self::from_users(default_users())
    }

    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        let mut directory = Self::new();
        for user in users {
            directory.insert(user);
        }
        directory
    }

    /// Add a user, replacing any existing record with the same id
    pub fn insert(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    pub fn get_user(&self, id: &str) -> Option<User> {
        debug!("Looking up user: {}", id);
        self.users.get(id).cloned().into()
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

pub fn default_users() -> Vec<User> {
    vec![User::new("1", "cyrusaf")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_user_known_id() {
        let directory = UserDirectory::with_default_users();

        let (user, ok) = directory.get_user("1").unwrap();

        assert!(ok);
        assert_eq!(user, User::new("1", "cyrusaf"));
    }

    #[test]
    fn test_get_user_unknown_id() {
        let directory = UserDirectory::with_default_users();

        let result = directory.get_user("2");

        assert!(result.is_none());
        assert_eq!(result.unwrap(), (User::default(), false));
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut directory = UserDirectory::new();
        directory.insert(User::new("7", "first"));
        directory.insert(User::new("7", "second"));

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.get_user("7").unwrap().0.name, "second");
    }

    #[test]
    fn test_user_json_field_names() {
        let value = serde_json::to_value(User::new("1", "cyrusaf")).unwrap();

        assert_eq!(value, json!({"ID": "1", "Name": "cyrusaf"}));
    }

    #[test]
    fn test_user_reads_both_spellings() {
        let upper: User = serde_json::from_value(json!({"ID": "3", "Name": "a"})).unwrap();
        let lower: User = serde_json::from_value(json!({"id": "3", "name": "a"})).unwrap();

        assert_eq!(upper, lower);
    }
}
