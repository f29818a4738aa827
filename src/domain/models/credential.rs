use serde::{Deserialize, Serialize};

use crate::domain::error::CredentialError;

/// Value object representing a service-derived credential, safe to persist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredential(String);

impl StoredCredential {
    /// Create a StoredCredential from an already strengthened representation
    pub fn new(representation: String) -> Self {
        Self(representation)
    }

    /// Get the representation as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// The credential field's value, tagged by lifecycle state.
///
/// The raw attribute on a record is an opaque string; whether it holds a
/// plaintext awaiting strengthening or an already stored representation is
/// decided by the field's dirty flag at the moment the record is read.
#[derive(Debug, Clone)]
pub enum CredentialValue {
    /// Assigned via set_credential but not yet strengthened
    Plaintext(String),
    /// Already produced by the hashing service
    Stored(StoredCredential),
}

impl CredentialValue {
    /// Interpret a record's raw field value together with its dirty flag.
    ///
    /// An absent or empty value is never a valid credential in either state.
    pub fn from_record(raw: Option<&str>, modified: bool) -> Result<Self, CredentialError> {
        match raw {
            None => Err(CredentialError::InconsistentCredential),
            Some(value) if value.is_empty() => Err(CredentialError::InconsistentCredential),
            Some(value) if modified => Ok(Self::Plaintext(value.to_string())),
            Some(value) => Ok(Self::Stored(StoredCredential::new(value.to_string()))),
        }
    }
}
