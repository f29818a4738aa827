//! Password credential lifecycle backed by a remote oblivious hashing
//! service.
//!
//! A record's password is never persisted as a direct function of the
//! plaintext alone: a freshly assigned credential is strengthened by a
//! round-trip to a Pythia-style hashing service inside a pre-save hook, and
//! verification is delegated to the same service so the plaintext is never
//! stored or compared locally.
//!
//! [`CredentialLifecycleController::attach`] wires the lifecycle onto a
//! schema: it registers the credential field, installs the pre-save hook,
//! and returns the controller whose [`set_credential`] and [`verify`]
//! methods operate on individual records. The persistence layer and the
//! hashing service are both collaborators behind traits
//! ([`CredentialSchema`] / [`CredentialRecord`] and
//! [`CredentialHashingClient`]); [`PythiaHttpClient`] is the bundled HTTP
//! implementation of the latter.
//!
//! ```no_run
//! use pythia_credential::infrastructure::memory_record::InMemorySchema;
//! use pythia_credential::{CredentialLifecycleController, PythiaHttpClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), pythia_credential::CredentialError> {
//! let mut schema = InMemorySchema::new();
//! let controller: CredentialLifecycleController<PythiaHttpClient> =
//!     CredentialLifecycleController::attach(&mut schema, "users", None)?;
//!
//! let mut record = schema.new_record();
//! controller.set_credential(&mut record, "correct horse battery staple");
//! schema.save(&mut record).await?;
//!
//! assert!(controller.verify(&record, "correct horse battery staple").await?);
//! # Ok(())
//! # }
//! ```
//!
//! [`set_credential`]: CredentialLifecycleController::set_credential
//! [`verify`]: CredentialLifecycleController::verify

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod usecase;

pub use config::{CredentialConfig, DEFAULT_FIELD_NAME, DEFAULT_SERVICE_ENDPOINT};
pub use domain::error::{ClientError, CredentialError};
pub use domain::models::credential::{CredentialValue, StoredCredential};
pub use domain::repositories::host_record::{CredentialRecord, CredentialSchema, PreSaveHook};
pub use domain::services::hashing_client::CredentialHashingClient;
pub use infrastructure::http_hashing_client::PythiaHttpClient;
pub use usecase::lifecycle::CredentialLifecycleController;
