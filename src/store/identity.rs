//! Identity store: user table, credential checks, and server-side sessions.
//!
//! Credentials are compared in constant time. Sessions are opaque tokens
//! held only in memory; nothing credential-shaped ever leaves the store.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use subtle::ConstantTimeEq;

use crate::errors::AppError;
use crate::models::{SessionUser, User};

use super::{read_lock, write_lock};

struct Session {
    user_id: String,
    created_at: Instant,
}

/// Owner of the user table and the session map.
pub struct IdentityStore {
    users: RwLock<Vec<User>>,
    sessions: RwLock<HashMap<String, Session>>,
    session_ttl: Duration,
}

impl IdentityStore {
    pub fn new(users: Vec<User>, session_ttl: Duration) -> Self {
        Self {
            users: RwLock::new(users),
            sessions: RwLock::new(HashMap::new()),
            session_ttl,
        }
    }

    /// Check credentials and mint a session. Returns None on any mismatch,
    /// leaving all state untouched.
    pub fn login(&self, username: &str, password: &str) -> Option<(String, SessionUser)> {
        let users = read_lock(&self.users);
        let user = users
            .iter()
            .find(|u| u.username == username && constant_time_compare(&u.password, password))?;
        let principal = SessionUser::from(user);
        drop(users);

        let token = uuid::Uuid::new_v4().to_string();
        write_lock(&self.sessions).insert(
            token.clone(),
            Session {
                user_id: principal.id.clone(),
                created_at: Instant::now(),
            },
        );

        Some((token, principal))
    }

    /// Resolve a session token to its principal. Expired sessions are
    /// dropped on sight.
    pub fn resolve(&self, token: &str) -> Option<SessionUser> {
        let user_id = {
            let mut sessions = write_lock(&self.sessions);
            match sessions.get(token) {
                Some(session) if session.created_at.elapsed() <= self.session_ttl => {
                    session.user_id.clone()
                }
                Some(_) => {
                    sessions.remove(token);
                    return None;
                }
                None => return None,
            }
        };

        read_lock(&self.users)
            .iter()
            .find(|u| u.id == user_id)
            .map(SessionUser::from)
    }

    /// Remove a session. Idempotent.
    pub fn logout(&self, token: &str) {
        write_lock(&self.sessions).remove(token);
    }

    /// Change a user's password after verifying the current one.
    pub fn change_password(
        &self,
        user_id: &str,
        current: &str,
        new: &str,
    ) -> Result<(), AppError> {
        let mut users = write_lock(&self.users);
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        if !constant_time_compare(&user.password, current) {
            return Err(AppError::Unauthorized(
                "Current password is incorrect".to_string(),
            ));
        }

        user.password = new.to_string();
        Ok(())
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
