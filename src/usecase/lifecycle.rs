use std::sync::Arc;

use crate::{
    config::CredentialConfig,
    domain::{
        error::CredentialError,
        models::credential::{CredentialValue, StoredCredential},
        repositories::host_record::{CredentialRecord, CredentialSchema, PreSaveHook},
        services::hashing_client::CredentialHashingClient,
    },
};

/// Drives the credential field's lifecycle on a host record.
///
/// One controller is attached per schema; it is cheap to clone and every
/// clone shares the same client, so a single attach serves any number of
/// record instances saving and verifying concurrently.
pub struct CredentialLifecycleController<C> {
    client: Arc<C>,
    config: CredentialConfig,
}

impl<C> Clone for CredentialLifecycleController<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            config: self.config.clone(),
        }
    }
}

impl<C> CredentialLifecycleController<C>
where
    C: CredentialHashingClient + Send + Sync + 'static,
{
    /// Wrap an already initialized hashing client
    pub fn new(client: C, config: CredentialConfig) -> Self {
        Self {
            client: Arc::new(client),
            config,
        }
    }

    /// Attach the credential lifecycle to a record schema.
    ///
    /// Initializes the hashing client for the configured endpoint, registers
    /// the credential field on the schema, and registers a pre-save hook
    /// that strengthens a freshly assigned plaintext before the save
    /// proceeds. Client initialization failure aborts the attach; nothing is
    /// registered in that case.
    pub fn attach<S>(
        schema: &mut S,
        selector: &str,
        config: Option<CredentialConfig>,
    ) -> Result<Self, CredentialError>
    where
        S: CredentialSchema,
    {
        let config = config.unwrap_or_default();
        let client = C::initialize(selector, &config.service_endpoint)
            .map_err(CredentialError::ClientInitialization)?;
        let controller = Self::new(client, config);

        schema.add_string_field(controller.field_name());

        let hook_controller = controller.clone();
        let hook: PreSaveHook<S::Record> = Arc::new(move |record| {
            let controller = hook_controller.clone();
            Box::pin(async move { controller.before_save(record).await })
        });
        schema.register_pre_save(hook);

        Ok(controller)
    }

    pub fn config(&self) -> &CredentialConfig {
        &self.config
    }

    pub fn field_name(&self) -> &str {
        &self.config.credential_field_name
    }

    /// Pre-save hook body, run by the host immediately before a commit.
    ///
    /// An unset or empty credential field fails the save. An unmodified
    /// field is left byte-identical with no service call, so re-saving an
    /// already stored record never re-hashes it. A modified field is sent to
    /// the service exactly once and overwritten only after the call fully
    /// succeeds; a failed or cancelled call leaves the field untouched.
    pub async fn before_save<R>(&self, record: &mut R) -> Result<(), CredentialError>
    where
        R: CredentialRecord + Send,
    {
        let field = self.field_name();
        let value = CredentialValue::from_record(record.get(field), record.is_modified(field))?;

        match value {
            CredentialValue::Stored(_) => {
                tracing::trace!(field, "credential unchanged, skipping hash");
                Ok(())
            }
            CredentialValue::Plaintext(plaintext) => {
                let stored = self.client.hash(&plaintext).await?;
                record.set(field, stored.into_string());
                tracing::debug!(field, "credential strengthened before save");
                Ok(())
            }
        }
    }

    /// Assign a new plaintext credential.
    ///
    /// Pure local mutation: the plaintext is stored pending and the field
    /// marked modified; strengthening happens in the pre-save hook when the
    /// host commits the record. Calling again before a save simply replaces
    /// the pending value.
    pub fn set_credential<R>(&self, record: &mut R, plaintext: &str)
    where
        R: CredentialRecord,
    {
        record.set(self.field_name(), plaintext.to_string());
    }

    /// Compare a candidate plaintext against the stored credential.
    ///
    /// The verdict is the service's, exactly as reported; no local
    /// comparison is performed and no record state is mutated.
    pub async fn verify<R>(&self, record: &R, candidate: &str) -> Result<bool, CredentialError>
    where
        R: CredentialRecord,
    {
        let stored = match record.get(self.field_name()) {
            Some(value) if !value.is_empty() => StoredCredential::new(value.to_string()),
            _ => return Err(CredentialError::InconsistentCredential),
        };

        let matched = self.client.compare(candidate, &stored).await?;
        Ok(matched)
    }
}
