//! User accounts and the wire-facing session principal.

use serde::{Deserialize, Serialize};

/// Role of an authenticated user. Determines which surface is reachable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Ceo,
    Driver,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Ceo => "ceo",
            Role::Driver => "driver",
        }
    }
}

/// A user account. Internal to the identity store; the password never
/// leaves the store, so this type is deliberately not `Serialize`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub role: Role,
    pub name: String,
    #[serde(default)]
    pub driver_id: Option<String>,
}

/// The authenticated principal as exposed to handlers and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub username: String,
    pub role: Role,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            role: user.role,
            name: user.name.clone(),
            driver_id: user.driver_id.clone(),
        }
    }
}

/// Request body for login.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response body for a successful login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

/// Request body for changing the current user's password.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}
