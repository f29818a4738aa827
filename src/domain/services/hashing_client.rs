use async_trait::async_trait;

use crate::domain::{error::ClientError, models::credential::StoredCredential};

/// Client for the remote oblivious hashing service.
///
/// The service strengthens a secret with key material only it holds; neither
/// the plaintext nor the final representation is learnable from the exchange
/// alone. Implementations must be safe for concurrent use by multiple record
/// instances issuing hash and compare calls in parallel.
#[async_trait]
pub trait CredentialHashingClient {
    /// Set up the client for a given selector and service endpoint.
    ///
    /// Fails fast: a client that cannot be initialized is surfaced here
    /// rather than on the first hash or compare call.
    fn initialize(selector: &str, endpoint: &str) -> Result<Self, ClientError>
    where
        Self: Sized;

    /// Produce the storable representation of a secret
    async fn hash(&self, secret: &str) -> Result<StoredCredential, ClientError>;

    /// Compare a candidate secret against a previously produced representation
    async fn compare(
        &self,
        candidate: &str,
        stored: &StoredCredential,
    ) -> Result<bool, ClientError>;
}
