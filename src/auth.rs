//! OAuth refresh-token exchange.
//!
//! One POST per run to `{api_base}/v5/oauth/token` with HTTP Basic
//! credentials (`app_id:app_secret`, the secret may be empty) and a
//! `grant_type=refresh_token` form body. The returned access token is held
//! in memory for the remainder of the run; there is no caching and no
//! mid-run refresh.

use reqwest::Client;
use serde::Deserialize;

use crate::config::Credentials;
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchange a refresh token for an access token.
///
/// Any network error or non-200 status is fatal to the run; the response
/// body is surfaced verbatim for diagnosis.
pub async fn exchange_refresh_token(
    client: &Client,
    api_base: &str,
    credentials: &Credentials,
) -> Result<String> {
    let resp = client
        .post(format!("{api_base}/v5/oauth/token"))
        .basic_auth(&credentials.app_id, Some(&credentials.app_secret))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", credentials.refresh_token.as_str()),
        ])
        .send()
        .await
        .map_err(Error::AuthTransport)?;

    let status = resp.status();
    if status != reqwest::StatusCode::OK {
        let body = resp.text().await.unwrap_or_default();
        return Err(Error::AuthRejected {
            status: status.as_u16(),
            body,
        });
    }

    let token: TokenResponse = resp.json().await.map_err(Error::AuthResponse)?;
    Ok(token.access_token)
}
