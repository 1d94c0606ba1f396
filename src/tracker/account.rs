use std::collections::BTreeMap;

use crate::error::{HealthError, Result};
use crate::state::{StorePort, keys, read_json, write_json};

/// Create a local account. Duplicate usernames are rejected.
///
/// This is the signup stub only: credentials land in the store as-is, with
/// no hashing or session handling.
pub fn signup(store: &mut dyn StorePort, username: &str, password: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(HealthError::InvalidInput("username is empty".to_string()));
    }
    if password.is_empty() {
        return Err(HealthError::InvalidInput("password is empty".to_string()));
    }

    let mut users: BTreeMap<String, String> =
        read_json(store, keys::USERS)?.unwrap_or_default();

    if users.contains_key(username) {
        return Err(HealthError::UsernameTaken(username.to_string()));
    }

    users.insert(username.to_string(), password.to_string());
    write_json(store, keys::USERS, &users)
}

/// Whether a username is already registered.
pub fn user_exists(store: &dyn StorePort, username: &str) -> Result<bool> {
    let users: BTreeMap<String, String> = read_json(store, keys::USERS)?.unwrap_or_default();
    Ok(users.contains_key(username))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryStore;

    #[test]
    fn test_signup_and_duplicate() {
        let mut store = MemoryStore::new();

        signup(&mut store, "alex", "hunter2").unwrap();
        assert!(user_exists(&store, "alex").unwrap());
        assert!(!user_exists(&store, "sam").unwrap());

        let err = signup(&mut store, "alex", "other").unwrap_err();
        assert!(matches!(err, HealthError::UsernameTaken(_)));
    }

    #[test]
    fn test_signup_rejects_empty_fields() {
        let mut store = MemoryStore::new();
        assert!(signup(&mut store, "", "pw").is_err());
        assert!(signup(&mut store, "  ", "pw").is_err());
        assert!(signup(&mut store, "alex", "").is_err());
    }
}
