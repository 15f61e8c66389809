use crate::domain::shared::errors::DomainError;
use validator::Validate;

/// Trimmed, lower-cased email address.
///
/// Two emails differing only in case or surrounding whitespace are the same
/// account key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Validate)]
pub struct Email {
    #[validate(email, length(max = 254))]
    value: String,
}

impl Email {
    /// Normalizes without validating the format. Used for lookups, where a
    /// malformed address simply matches nothing.
    pub fn normalized(raw: &str) -> Self {
        Self {
            value: raw.trim().to_lowercase(),
        }
    }

    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let email = Self::normalized(raw);
        if email.value.is_empty() {
            return Err(DomainError::ValidationError("Email is required".into()));
        }
        email
            .validate()
            .map_err(|_| DomainError::ValidationError("Valid email is required".into()))?;
        Ok(email)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// A raw password of at least six characters.
#[derive(Clone, Validate)]
pub struct NewPassword {
    #[validate(length(min = 6))]
    value: String,
}

impl NewPassword {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let password = Self {
            value: raw.to_string(),
        };
        password.validate().map_err(|_| DomainError::WeakPassword)?;
        Ok(password)
    }

    pub fn expose(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Debug for NewPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("NewPassword(***)")
    }
}
