//! REST API client for the console backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call returns `ApiError::Unavailable` so pages and
//! state modules still compile and test without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every response body is decoded as a `{success, data, message}` envelope.
//! A non-2xx status or `success: false` becomes `ApiError::Rejected` with the
//! server's message; callers turn any error into a toast.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    ApiEnvelope, AuthResponse, Customer, Driver, LoginRequest, Order, RateContract, SignupRequest, User,
    Vehicle,
};
use crate::error::ApiError;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const SIGNUP_PATH: &str = "/api/auth/signup";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const PROFILE_PATH: &str = "/api/auth/profile";
pub const ORDERS_PATH: &str = "/api/orders";
pub const VEHICLES_PATH: &str = "/api/vehicles";
pub const DRIVERS_PATH: &str = "/api/drivers";
pub const CUSTOMERS_PATH: &str = "/api/customers";
pub const RATE_CONTRACTS_PATH: &str = "/api/rate-contracts";

/// Message used when a failed envelope carries none.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Request failed";

/// HTTP verbs the console issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// `Authorization` header value for a bearer token.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Headers attached to every request; the bearer header only when a
/// non-empty token is stored.
pub fn request_headers(token: Option<&str>) -> Vec<(&'static str, String)> {
    let mut headers = vec![
        ("Content-Type", "application/json".to_owned()),
        ("Accept", "application/json".to_owned()),
    ];
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        headers.push(("Authorization", bearer_header(token)));
    }
    headers
}

/// Decode a raw response into the envelope's `data`.
///
/// # Errors
///
/// - `Status` when a non-2xx body is not an envelope.
/// - `Decode` when a 2xx body is not an envelope or `data` has the wrong shape.
/// - `Rejected` when the status is non-2xx or the envelope reports failure.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<Option<T>, ApiError> {
    let ok = (200..300).contains(&status);
    let envelope = match serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body) {
        Ok(envelope) => envelope,
        Err(e) if ok => return Err(ApiError::Decode(e.to_string())),
        Err(_) => return Err(ApiError::Status { status }),
    };
    if !ok || !envelope.success {
        let message = envelope
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_owned());
        return Err(ApiError::Rejected { status, message });
    }
    match envelope.data {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string())),
    }
}

/// Require that a decoded envelope carried `data`.
///
/// # Errors
///
/// Returns `MissingData` for `None`.
pub fn require_data<T>(data: Option<T>) -> Result<T, ApiError> {
    data.ok_or(ApiError::MissingData)
}

#[cfg(feature = "csr")]
async fn send<B: Serialize>(method: Method, path: &str, body: Option<&B>) -> Result<(u16, String), ApiError> {
    use gloo_net::http::Request;

    let url = crate::config::endpoint(path);
    let token = crate::util::storage::load_token();
    let mut builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
    };
    for (name, value) in request_headers(token.as_deref()) {
        builder = builder.header(name, &value);
    }
    let request = match body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok((status, text))
}

/// Issue a request and decode its envelope.
///
/// # Errors
///
/// See [`decode_envelope`]; transport failures are `Network`.
pub async fn request<T, B>(method: Method, path: &str, body: Option<&B>) -> Result<Option<T>, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    #[cfg(feature = "csr")]
    {
        let result = match send(method, path, body).await {
            Ok((status, text)) => decode_envelope(status, &text),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            log::warn!("{method:?} {path} failed: {e}");
        }
        result
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (method, path, body);
        Err(ApiError::Unavailable)
    }
}

/// `GET` a typed value.
///
/// # Errors
///
/// Any request failure, or `MissingData` when the envelope has no `data`.
pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    request::<T, ()>(Method::Get, path, None).await.and_then(require_data)
}

/// `POST` a JSON body and read a typed value.
///
/// # Errors
///
/// Any request failure, or `MissingData` when the envelope has no `data`.
pub async fn post<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    request::<T, B>(Method::Post, path, Some(body)).await.and_then(require_data)
}

/// `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the server's rejection message for bad credentials.
pub async fn login(req: &LoginRequest) -> Result<AuthResponse, ApiError> {
    post(LOGIN_PATH, req).await
}

/// `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns the server's rejection message, e.g. for a taken email.
pub async fn signup(req: &SignupRequest) -> Result<AuthResponse, ApiError> {
    post(SIGNUP_PATH, req).await
}

/// `POST /api/auth/logout`. The envelope needs no `data`.
///
/// # Errors
///
/// Any request failure.
pub async fn logout() -> Result<(), ApiError> {
    request::<serde_json::Value, ()>(Method::Post, LOGOUT_PATH, None)
        .await
        .map(|_| ())
}

/// `GET /api/auth/profile` using the stored bearer token.
///
/// # Errors
///
/// Any request failure; callers do not distinguish expiry from outage.
pub async fn fetch_profile() -> Result<User, ApiError> {
    get(PROFILE_PATH).await
}

/// # Errors
///
/// Any request failure.
pub async fn fetch_orders() -> Result<Vec<Order>, ApiError> {
    get(ORDERS_PATH).await
}

/// # Errors
///
/// Any request failure.
pub async fn fetch_vehicles() -> Result<Vec<Vehicle>, ApiError> {
    get(VEHICLES_PATH).await
}

/// # Errors
///
/// Any request failure.
pub async fn fetch_drivers() -> Result<Vec<Driver>, ApiError> {
    get(DRIVERS_PATH).await
}

/// # Errors
///
/// Any request failure.
pub async fn fetch_customers() -> Result<Vec<Customer>, ApiError> {
    get(CUSTOMERS_PATH).await
}

/// # Errors
///
/// Any request failure.
pub async fn fetch_rate_contracts() -> Result<Vec<RateContract>, ApiError> {
    get(RATE_CONTRACTS_PATH).await
}
