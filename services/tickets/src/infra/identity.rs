use anyhow::Context as _;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::repository::IdentityProviderPort;
use crate::error::TicketsServiceError;

/// HTTP client for the external identity provider.
///
/// Protocol: `POST /accounts` creates a credential pair, `POST /sessions`
/// verifies one. Both respond `{"subject": "..."}` on success. This service
/// never stores the password.
#[derive(Clone)]
pub struct HttpIdentityProvider {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct SubjectBody {
    subject: String,
}

impl HttpIdentityProvider {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

impl IdentityProviderPort for HttpIdentityProvider {
    async fn sign_up(&self, email: &str, password: &str) -> Result<String, TicketsServiceError> {
        let resp = self
            .client
            .post(format!("{}/accounts", self.base_url))
            .json(&CredentialsBody { email, password })
            .send()
            .await
            .context("identity provider sign-up request")?;

        match resp.status() {
            StatusCode::CREATED | StatusCode::OK => {
                let body: SubjectBody = resp
                    .json()
                    .await
                    .context("identity provider sign-up response body")?;
                Ok(body.subject)
            }
            StatusCode::CONFLICT => Err(TicketsServiceError::EmailAlreadyRegistered),
            status => Err(TicketsServiceError::Internal(anyhow::anyhow!(
                "identity provider sign-up returned {status}"
            ))),
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<String, TicketsServiceError> {
        let resp = self
            .client
            .post(format!("{}/sessions", self.base_url))
            .json(&CredentialsBody { email, password })
            .send()
            .await
            .context("identity provider sign-in request")?;

        match resp.status() {
            StatusCode::CREATED | StatusCode::OK => {
                let body: SubjectBody = resp
                    .json()
                    .await
                    .context("identity provider sign-in response body")?;
                Ok(body.subject)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
                Err(TicketsServiceError::InvalidCredentials)
            }
            status => Err(TicketsServiceError::Internal(anyhow::anyhow!(
                "identity provider sign-in returned {status}"
            ))),
        }
    }
}
