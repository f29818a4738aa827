use std::sync::Arc;

use futures::future::BoxFuture;

use crate::domain::error::CredentialError;

/// Hook invoked by the host persistence layer immediately before a record is
/// committed. An error aborts the save and is surfaced to the save caller.
pub type PreSaveHook<R> =
    Arc<dyn for<'a> Fn(&'a mut R) -> BoxFuture<'a, Result<(), CredentialError>> + Send + Sync>;

/// A persisted record that owns string attributes with per-field dirty flags.
///
/// The persistence layer owns the instance; this crate only reads and writes
/// the single configured credential field through it.
pub trait CredentialRecord {
    fn get(&self, field: &str) -> Option<&str>;

    /// Assign a value and mark the field modified
    fn set(&mut self, field: &str, value: String);

    /// Has this field been assigned since the record was loaded or created?
    fn is_modified(&self, field: &str) -> bool;
}

/// A mutable record definition that fields and pre-save hooks can be
/// registered on at attach time.
pub trait CredentialSchema {
    type Record: CredentialRecord + Send;

    /// Register a string-typed attribute on every instance of the schema
    fn add_string_field(&mut self, name: &str);

    /// Register a hook to run before every save of an instance
    fn register_pre_save(&mut self, hook: PreSaveHook<Self::Record>);
}
