use contracts::system::auth::{LoginRequest, LoginResponse, SessionResponse};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::shared::api_utils::api_url;
use crate::shared::error::ApiError;

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::from_status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Exchange credentials for a session
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/api/auth/login"))
        .json(&request)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(response).await
}

/// Resolve the identity and permissions behind a stored token
pub async fn get_session(access_token: &str) -> Result<SessionResponse, ApiError> {
    let response = Request::get(&api_url("/api/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(response).await
}

/// Revoke the refresh token server-side
pub async fn logout(access_token: &str, refresh_token: Option<String>) -> Result<(), ApiError> {
    let body = serde_json::json!({ "refresh_token": refresh_token });

    let response = Request::post(&api_url("/api/auth/logout"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .json(&body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::from_status(response.status()));
    }
    Ok(())
}
