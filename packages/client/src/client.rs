//! HTTP client for the Todoist REST API
//!
//! `TodoistClient` owns the connection pool, the base URL, and the
//! authorization header. Endpoint groups ([`Projects`](crate::Projects),
//! [`Tasks`](crate::Tasks), [`Sections`](crate::Sections),
//! [`Labels`](crate::Labels), [`Comments`](crate::Comments)) are capability
//! traits implemented on top of the request plumbing here.

use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::{TodoistError, TodoistResult};

/// Name of the idempotency/tracing header attached to mutating requests
const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Client for the Todoist REST API
///
/// Holds no mutable state; cloning is cheap and clones share the underlying
/// connection pool.
#[derive(Debug, Clone)]
pub struct TodoistClient {
    http_client: Client,
    base_url: String,
    auth_header: String,
}

impl TodoistClient {
    /// Create a client with the default configuration.
    ///
    /// Fails if the API token does not match the service's token format.
    pub fn new(api_token: &str) -> TodoistResult<Self> {
        Self::with_config(ClientConfig::new(api_token))
    }

    /// Create a client from an explicit configuration
    pub fn with_config(config: ClientConfig) -> TodoistResult<Self> {
        let token = config.validated_token()?;
        let http_client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| TodoistError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url().to_string(),
            auth_header: format!("Bearer {}", token),
        })
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Generate the per-request idempotency token
    fn request_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Send a GET request
    pub(crate) async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> TodoistResult<Response> {
        tracing::debug!("GET {}", path);
        let mut request = self
            .http_client
            .get(self.endpoint_url(path))
            .header(header::AUTHORIZATION, &self.auth_header);
        if !query.is_empty() {
            request = request.query(query);
        }
        Ok(request.send().await?)
    }

    /// Send a POST request with a JSON body
    pub(crate) async fn post<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> TodoistResult<Response> {
        tracing::debug!("POST {}", path);
        let response = self
            .http_client
            .post(self.endpoint_url(path))
            .header(header::AUTHORIZATION, &self.auth_header)
            .header(REQUEST_ID_HEADER, Self::request_id())
            .json(body)
            .send()
            .await?;
        Ok(response)
    }

    /// Send a POST request without a body
    pub(crate) async fn post_empty(&self, path: &str) -> TodoistResult<Response> {
        tracing::debug!("POST {}", path);
        let response = self
            .http_client
            .post(self.endpoint_url(path))
            .header(header::AUTHORIZATION, &self.auth_header)
            .header(REQUEST_ID_HEADER, Self::request_id())
            .send()
            .await?;
        Ok(response)
    }

    /// Send a DELETE request
    pub(crate) async fn delete(&self, path: &str) -> TodoistResult<Response> {
        tracing::debug!("DELETE {}", path);
        let response = self
            .http_client
            .delete(self.endpoint_url(path))
            .header(header::AUTHORIZATION, &self.auth_header)
            .header(REQUEST_ID_HEADER, Self::request_id())
            .send()
            .await?;
        Ok(response)
    }

    /// Interpret a response that may carry a JSON payload.
    ///
    /// Returns `Some(payload)` on 200, `None` on 204, and maps every other
    /// status through [`status_error`](Self::status_error).
    pub(crate) async fn read_json<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> TodoistResult<Option<T>> {
        match response.status() {
            StatusCode::OK => {
                let payload = response
                    .json::<T>()
                    .await
                    .map_err(|e| TodoistError::InvalidResponse(e.to_string()))?;
                Ok(Some(payload))
            }
            StatusCode::NO_CONTENT => Ok(None),
            status => Err(Self::status_error(status)),
        }
    }

    /// Interpret a response whose only success form is an empty 204.
    pub(crate) async fn expect_no_content(&self, response: Response) -> TodoistResult<()> {
        match response.status() {
            StatusCode::NO_CONTENT => Ok(()),
            status => Err(Self::status_error(status)),
        }
    }

    /// Map a non-success HTTP status to its error
    fn status_error(status: StatusCode) -> TodoistError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                TodoistError::auth("Unable to access the API. Is the API token valid?")
            }
            StatusCode::PAYMENT_REQUIRED => TodoistError::PremiumRequired,
            StatusCode::INTERNAL_SERVER_ERROR => TodoistError::ServerError,
            StatusCode::BAD_GATEWAY => TodoistError::BadGateway,
            status => {
                tracing::warn!("Unexpected HTTP status from the API: {}", status);
                TodoistError::UnexpectedStatus(status.as_u16())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_TOKEN: &str = "0123456789abcdef0123456789abcdef01234567";

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(
            TodoistClient::status_error(StatusCode::UNAUTHORIZED),
            TodoistError::Authentication(_)
        ));
        assert!(matches!(
            TodoistClient::status_error(StatusCode::FORBIDDEN),
            TodoistError::Authentication(_)
        ));
        assert!(matches!(
            TodoistClient::status_error(StatusCode::PAYMENT_REQUIRED),
            TodoistError::PremiumRequired
        ));
        assert!(matches!(
            TodoistClient::status_error(StatusCode::INTERNAL_SERVER_ERROR),
            TodoistError::ServerError
        ));
        assert!(matches!(
            TodoistClient::status_error(StatusCode::BAD_GATEWAY),
            TodoistError::BadGateway
        ));
        assert!(matches!(
            TodoistClient::status_error(StatusCode::IM_A_TEAPOT),
            TodoistError::UnexpectedStatus(418)
        ));
    }

    #[test]
    fn test_invalid_token_is_rejected_at_construction() {
        let err = TodoistClient::new("not-a-token").unwrap_err();
        assert!(matches!(err, TodoistError::Configuration(_)));
    }

    #[test]
    fn test_endpoint_url_joins_base_and_path() {
        let client = TodoistClient::new(VALID_TOKEN).unwrap();
        assert_eq!(
            client.endpoint_url("tasks/42/close"),
            "https://api.todoist.com/rest/v2/tasks/42/close"
        );
    }

    #[test]
    fn test_request_ids_are_unique() {
        assert_ne!(TodoistClient::request_id(), TodoistClient::request_id());
    }
}
