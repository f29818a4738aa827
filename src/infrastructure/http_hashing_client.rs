use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::domain::{
    error::ClientError,
    models::credential::StoredCredential,
    services::hashing_client::CredentialHashingClient,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct HashRequest<'a> {
    selector: &'a str,
    secret: &'a str,
}

#[derive(Deserialize)]
struct HashResponse {
    hash: String,
}

#[derive(Serialize)]
struct CompareRequest<'a> {
    selector: &'a str,
    secret: &'a str,
    stored: &'a str,
}

#[derive(Deserialize)]
struct CompareResponse {
    matched: bool,
}

/// HTTP client for a Pythia-style oblivious hashing service.
///
/// Speaks a small JSON protocol: `POST /v1/hash` strengthens a secret into
/// its storable representation, `POST /v1/compare` checks a candidate
/// against one. The selector identifies the key namespace the service uses
/// for this host application.
#[derive(Clone)]
pub struct PythiaHttpClient {
    http: Client,
    base_url: String,
    selector: String,
}

impl PythiaHttpClient {
    async fn post_json<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp, ClientError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(%status, path, "hashing service rejected request");
            return Err(ClientError::Protocol(format!(
                "{} returned {}: {}",
                path, status, message
            )));
        }

        response
            .json::<Resp>()
            .await
            .map_err(|e| ClientError::Protocol(format!("invalid response from {}: {}", path, e)))
    }
}

#[async_trait]
impl CredentialHashingClient for PythiaHttpClient {
    fn initialize(selector: &str, endpoint: &str) -> Result<Self, ClientError> {
        let url = Url::parse(endpoint).map_err(|e| {
            ClientError::Protocol(format!("invalid service endpoint {:?}: {}", endpoint, e))
        })?;

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: url.as_str().trim_end_matches('/').to_string(),
            selector: selector.to_string(),
        })
    }

    async fn hash(&self, secret: &str) -> Result<StoredCredential, ClientError> {
        let request = HashRequest {
            selector: &self.selector,
            secret,
        };
        let response: HashResponse = self.post_json("/v1/hash", &request).await?;
        Ok(StoredCredential::new(response.hash))
    }

    async fn compare(
        &self,
        candidate: &str,
        stored: &StoredCredential,
    ) -> Result<bool, ClientError> {
        let request = CompareRequest {
            selector: &self.selector,
            secret: candidate,
            stored: stored.as_str(),
        };
        let response: CompareResponse = self.post_json("/v1/compare", &request).await?;
        Ok(response.matched)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn hash_posts_selector_and_secret() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/hash"))
            .and(body_json(json!({"selector": "users", "secret": "hunter2"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"hash": "pythia$abc"})))
            .mount(&server)
            .await;

        let client = PythiaHttpClient::initialize("users", &server.uri()).unwrap();
        let stored = client.hash("hunter2").await.unwrap();

        assert_eq!(stored.as_str(), "pythia$abc");
    }

    #[tokio::test]
    async fn compare_returns_the_service_verdict() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/compare"))
            .and(body_json(
                json!({"selector": "users", "secret": "hunter2", "stored": "pythia$abc"}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"matched": false})))
            .mount(&server)
            .await;

        let client = PythiaHttpClient::initialize("users", &server.uri()).unwrap();
        let stored = StoredCredential::new("pythia$abc".to_string());

        assert!(!client.compare("hunter2", &stored).await.unwrap());
    }

    #[tokio::test]
    async fn server_error_maps_to_protocol_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/hash"))
            .respond_with(ResponseTemplate::new(500).set_body_string("key rotation in progress"))
            .mount(&server)
            .await;

        let client = PythiaHttpClient::initialize("users", &server.uri()).unwrap();
        let result = client.hash("hunter2").await;

        assert!(matches!(result, Err(ClientError::Protocol(_))));
    }

    #[tokio::test]
    async fn malformed_response_maps_to_protocol_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/hash"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
            .mount(&server)
            .await;

        let client = PythiaHttpClient::initialize("users", &server.uri()).unwrap();
        let result = client.hash("hunter2").await;

        assert!(matches!(result, Err(ClientError::Protocol(_))));
    }

    #[tokio::test]
    async fn unreachable_service_maps_to_transport_error() {
        let client = PythiaHttpClient::initialize("users", "http://127.0.0.1:1").unwrap();
        let result = client.hash("hunter2").await;

        assert!(matches!(result, Err(ClientError::Transport(_))));
    }

    #[test]
    fn initialize_rejects_an_invalid_endpoint() {
        let result = PythiaHttpClient::initialize("users", "not a url");
        assert!(matches!(result, Err(ClientError::Protocol(_))));
    }
}
