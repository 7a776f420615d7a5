//! Username 値オブジェクト

use super::error::DomainError;

/// Maximum username length in characters
const MAX_USERNAME_LENGTH: usize = 32;

/// A validated player username.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a new Username after validation.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUsername`] if the name is empty (after
    /// trimming) or longer than 32 characters.
    pub fn new(name: String) -> Result<Self, DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed.chars().count() > MAX_USERNAME_LENGTH {
            return Err(DomainError::InvalidUsername(name));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the username as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
