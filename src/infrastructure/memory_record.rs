use std::collections::{HashMap, HashSet};

use crate::domain::{
    error::CredentialError,
    repositories::host_record::{CredentialRecord, CredentialSchema, PreSaveHook},
};

/// In-memory host record with per-field dirty tracking.
///
/// Stands in for a real persistence layer in tests and examples. Assigning a
/// field through [`CredentialRecord::set`] marks it modified; the owning
/// schema's `save` clears the flags after a successful commit, the way a
/// document mapper would.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecord {
    fields: HashMap<String, String>,
    modified: HashSet<String>,
}

impl InMemoryRecord {
    /// Reconstruct a record as loaded from storage, with clean dirty flags
    pub fn load(fields: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
            modified: HashSet::new(),
        }
    }

    /// Clear all dirty flags, as the persistence layer does after a commit
    pub fn clear_modified(&mut self) {
        self.modified.clear();
    }
}

impl CredentialRecord for InMemoryRecord {
    fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    fn set(&mut self, field: &str, value: String) {
        self.fields.insert(field.to_string(), value);
        self.modified.insert(field.to_string());
    }

    fn is_modified(&self, field: &str) -> bool {
        self.modified.contains(field)
    }
}

/// In-memory schema holding registered fields and pre-save hooks.
#[derive(Default)]
pub struct InMemorySchema {
    fields: Vec<String>,
    pre_save: Vec<PreSaveHook<InMemoryRecord>>,
}

impl InMemorySchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the string fields registered on this schema
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Create a fresh record instance with no fields assigned
    pub fn new_record(&self) -> InMemoryRecord {
        InMemoryRecord::default()
    }

    /// Commit a record: run every pre-save hook in registration order, then
    /// clear the dirty flags. A hook error aborts the save and leaves the
    /// flags untouched.
    pub async fn save(&self, record: &mut InMemoryRecord) -> Result<(), CredentialError> {
        for hook in &self.pre_save {
            hook(&mut *record).await?;
        }
        record.clear_modified();
        Ok(())
    }
}

impl CredentialSchema for InMemorySchema {
    type Record = InMemoryRecord;

    fn add_string_field(&mut self, name: &str) {
        self.fields.push(name.to_string());
    }

    fn register_pre_save(&mut self, hook: PreSaveHook<InMemoryRecord>) {
        self.pre_save.push(hook);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_marks_the_field_modified() {
        let mut record = InMemoryRecord::default();
        assert!(!record.is_modified("password"));

        record.set("password", "hunter2".to_string());

        assert_eq!(record.get("password"), Some("hunter2"));
        assert!(record.is_modified("password"));
    }

    #[test]
    fn loaded_records_start_clean() {
        let record = InMemoryRecord::load([("password".to_string(), "pythia$x".to_string())]);
        assert_eq!(record.get("password"), Some("pythia$x"));
        assert!(!record.is_modified("password"));
    }

    #[tokio::test]
    async fn failed_hook_leaves_dirty_flags_set() {
        let mut schema = InMemorySchema::new();
        let hook: PreSaveHook<InMemoryRecord> = std::sync::Arc::new(|_record| {
            Box::pin(async { Err(CredentialError::InconsistentCredential) })
        });
        schema.register_pre_save(hook);

        let mut record = schema.new_record();
        record.set("password", "hunter2".to_string());

        assert!(schema.save(&mut record).await.is_err());
        assert!(record.is_modified("password"));
    }

    #[tokio::test]
    async fn successful_save_clears_dirty_flags() {
        let schema = InMemorySchema::new();
        let mut record = schema.new_record();
        record.set("password", "hunter2".to_string());

        schema.save(&mut record).await.unwrap();

        assert!(!record.is_modified("password"));
    }
}
