use contracts::system::auth::{SessionResponse, SignInRequest, SignUpRequest, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Sign in with email and password
pub async fn sign_in(email: String, password: String) -> Result<SessionResponse, String> {
    let request = SignInRequest { email, password };

    let response = Request::post(&api_url("/api/system/auth/sign-in"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Sign-in failed: {}", response.status()));
    }

    response
        .json::<SessionResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Register a new account
pub async fn sign_up(email: String, password: String) -> Result<SessionResponse, String> {
    let request = SignUpRequest { email, password };

    let response = Request::post(&api_url("/api/system/auth/sign-up"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Sign-up failed: {}", response.status()));
    }

    response
        .json::<SessionResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Revoke the current session token
pub async fn sign_out(access_token: &str) -> Result<(), String> {
    let response = Request::post(&api_url("/api/system/auth/sign-out"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Sign-out failed: {}", response.status()));
    }

    Ok(())
}

/// Get the current user, or `None` when the session is not authenticated
pub async fn get_current_user(access_token: &str) -> Result<Option<UserInfo>, String> {
    let response = Request::get(&api_url("/api/system/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    // Отсутствие сессии — не ошибка, а легитимное "пользователя нет".
    if response.status() == 401 || response.status() == 403 {
        return Ok(None);
    }

    if !response.ok() {
        return Err(format!("Get current user failed: {}", response.status()));
    }

    response
        .json::<UserInfo>()
        .await
        .map(Some)
        .map_err(|e| format!("Failed to parse response: {}", e))
}
