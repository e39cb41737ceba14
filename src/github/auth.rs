//! Personal access token minting
//!
//! Calls the GitHub authorizations endpoint with Basic Authentication.
//! Accounts with two-factor authentication answer 401 with an
//! `X-GitHub-OTP` header; the caller collects a one-time code and re-issues
//! the request with the code in the same header.

use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GitliftError, Result};

/// Endpoint used to mint personal access tokens
const AUTHORIZATIONS_URL: &str = "https://api.github.com/authorizations";

/// Note attached to the minted token, visible in the account settings
///
/// GitHub rejects a second token with the same note with 422.
const TOKEN_NOTE: &str = "gitlift, the command-line tool for publishing local repositories";

/// Scopes requested for the minted token
const TOKEN_SCOPES: &[&str] = &["user", "public_repo", "repo", "repo:status"];

/// Header GitHub uses to signal and carry one-time codes
const OTP_HEADER: &str = "x-github-otp";

/// Transient login credentials, held only for the duration of the mint call
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
    /// One-time code for accounts with two-factor authentication
    pub otp: Option<String>,
}

/// Token-creation request body
#[derive(Serialize)]
struct AuthorizationRequest<'a> {
    note: &'a str,
    scopes: &'a [&'a str],
}

/// Token-creation response; remaining fields are ignored
#[derive(Deserialize)]
struct AuthorizationResponse {
    token: String,
}

/// Client for the token-minting endpoint
pub struct TokenMinter {
    client: Client,
}

impl TokenMinter {
    /// Create a new minter
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("gitlift/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// Mint a personal access token for `credentials`
    ///
    /// Returns `TwoFactorRequired` when the account needs a one-time code;
    /// call again with `otp` set to re-issue the request.
    pub async fn mint_personal_access_token(
        &self,
        credentials: &Credentials,
    ) -> Result<SecretString> {
        let body = AuthorizationRequest {
            note: TOKEN_NOTE,
            scopes: TOKEN_SCOPES,
        };

        let mut request = self
            .client
            .post(AUTHORIZATIONS_URL)
            .basic_auth(
                &credentials.username,
                Some(credentials.password.expose_secret()),
            )
            .header("Accept", "application/vnd.github+json")
            .json(&body);

        if let Some(code) = &credentials.otp {
            request = request.header(OTP_HEADER, code);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let authorization: AuthorizationResponse = response.json().await?;
            debug!("token minted");
            return Ok(SecretString::from(authorization.token));
        }

        if status == StatusCode::UNAUTHORIZED {
            let otp_header = response
                .headers()
                .get(OTP_HEADER)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("");
            if otp_header_requires_code(otp_header) {
                return Err(GitliftError::TwoFactorRequired);
            }
        }

        Err(classify_status(status))
    }
}

/// True when the `X-GitHub-OTP` header value asks for a one-time code
fn otp_header_requires_code(value: &str) -> bool {
    value.trim_start().starts_with("required")
}

/// Map a rejected status to the closed error set, keeping the code
fn classify_status(status: StatusCode) -> GitliftError {
    match status {
        StatusCode::UNAUTHORIZED => GitliftError::AuthenticationFailed {
            status: status.as_u16(),
        },
        StatusCode::UNPROCESSABLE_ENTITY => GitliftError::ConflictExists {
            status: status.as_u16(),
        },
        _ => GitliftError::GitHubApi(format!("token creation failed with HTTP {}", status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_header_detection() {
        assert!(otp_header_requires_code("required; sms"));
        assert!(otp_header_requires_code("required; app"));
        assert!(!otp_header_requires_code(""));
        assert!(!otp_header_requires_code("sent"));
    }

    #[test]
    fn test_classify_unauthorized() {
        assert!(matches!(
            classify_status(StatusCode::UNAUTHORIZED),
            GitliftError::AuthenticationFailed { status: 401 }
        ));
    }

    #[test]
    fn test_classify_conflict() {
        assert!(matches!(
            classify_status(StatusCode::UNPROCESSABLE_ENTITY),
            GitliftError::ConflictExists { status: 422 }
        ));
    }

    #[test]
    fn test_classify_other_statuses_stay_generic() {
        assert!(matches!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR),
            GitliftError::GitHubApi(_)
        ));
    }

    #[test]
    fn test_request_body_shape() {
        let body = AuthorizationRequest {
            note: TOKEN_NOTE,
            scopes: TOKEN_SCOPES,
        };
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["note"], TOKEN_NOTE);
        assert!(value["scopes"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("repo")));
    }
}
