use crate::demo::user::{User, UserDirectory, default_users};
use anyhow::{Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Users file contents:
///
/// ```toml
/// [[users]]
/// id = "1"
/// name = "cyrusaf"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub users: Vec<User>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            users: default_users(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading users from: {:?}", path);

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read users file: {:?}", path))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse users file: {:?}", path))?;

        info!("Loaded {} users from {:?}", config.users.len(), path);
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid users TOML")
    }

    /// Config from `path` if given, otherwise the built-in users
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn into_directory(self) -> UserDirectory {
        UserDirectory::from_users(self.users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_users() {
        let config = Config::parse(
            r#"
[[users]]
id = "1"
name = "cyrusaf"

[[users]]
id = "42"
name = "ferris"
"#,
        )
        .unwrap();

        assert_eq!(config.users.len(), 2);
        assert_eq!(config.users[1], User::new("42", "ferris"));
    }

    #[test]
    fn test_parse_missing_users_is_empty() {
        let config = Config::parse("").unwrap();

        assert!(config.users.is_empty());
        assert!(config.into_directory().is_empty());
    }

    #[test]
    fn test_parse_accepts_json_field_spelling() {
        let config = Config::parse("[[users]]\nID = \"5\"\nName = \"listed\"\n").unwrap();

        assert_eq!(config.users, vec![User::new("5", "listed")]);
    }

    #[test]
    fn test_parse_invalid() {
        let err = Config::parse("[[users]]\nid = 1\n").unwrap_err();

        assert!(err.to_string().contains("Invalid users TOML"));
    }

    #[test]
    fn test_default_has_builtin_user() {
        let directory = Config::load_or_default(None).unwrap().into_directory();

        assert!(directory.get_user("1").is_some());
    }
}
