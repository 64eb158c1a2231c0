//! Mock session store.
//!
//! This is a placeholder, not real authentication: it trusts the supplied
//! credentials, never verifies them against anything, and stores a plain
//! user object under the `user` key. A production build must replace it
//! with a real credential check before any trust is placed in the flag.

use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use crate::checkout::is_valid_email;
use crate::error::{AppError, AppResult, FieldError};
use crate::models::User;
use crate::storage::{SnapshotStore, USER_KEY};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub struct AuthStore {
    user: Option<User>,
    storage: Arc<dyn SnapshotStore>,
}

impl AuthStore {
    /// Hydrates the session marker from the `user` key; a missing or
    /// corrupted snapshot means signed out.
    pub fn new(storage: Arc<dyn SnapshotStore>) -> Self {
        let user = match storage.load(USER_KEY) {
            Ok(Some(text)) => match serde_json::from_str(&text) {
                Ok(user) => Some(user),
                Err(err) => {
                    tracing::warn!(error = %err, "user snapshot corrupted, starting signed out");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(error = %err, "user snapshot unreadable, starting signed out");
                None
            }
        };
        Self { user, storage }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn login(&mut self, payload: LoginRequest) -> AppResult<&User> {
        let mut errors = Vec::new();
        if payload.email.trim().is_empty() {
            errors.push(FieldError::new("email", "This field is required"));
        } else if !is_valid_email(&payload.email) {
            errors.push(FieldError::new("email", "Please enter a valid email address"));
        }
        if payload.password.is_empty() {
            errors.push(FieldError::new("password", "This field is required"));
        }
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let user = User {
            id: Uuid::new_v4(),
            name: "Test User".into(),
            email: payload.email,
        };
        self.persist(&user);
        Ok(self.user.insert(user))
    }

    pub fn register(&mut self, payload: RegisterRequest) -> AppResult<&User> {
        let mut errors = Vec::new();
        if payload.name.trim().is_empty() {
            errors.push(FieldError::new("name", "This field is required"));
        }
        if payload.email.trim().is_empty() {
            errors.push(FieldError::new("email", "This field is required"));
        } else if !is_valid_email(&payload.email) {
            errors.push(FieldError::new("email", "Please enter a valid email address"));
        }
        if payload.password.is_empty() {
            errors.push(FieldError::new("password", "This field is required"));
        } else if payload.password != payload.confirm_password {
            errors.push(FieldError::new("confirm_password", "Passwords do not match"));
        }
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let user = User {
            id: Uuid::new_v4(),
            name: payload.name,
            email: payload.email,
        };
        self.persist(&user);
        Ok(self.user.insert(user))
    }

    pub fn logout(&mut self) {
        self.user = None;
        if let Err(err) = self.storage.remove(USER_KEY) {
            tracing::warn!(error = %err, "user snapshot remove failed");
        }
    }

    fn persist(&self, user: &User) {
        let json = match serde_json::to_string(user) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(error = %err, "user snapshot encode failed");
                return;
            }
        };
        if let Err(err) = self.storage.save(USER_KEY, &json) {
            tracing::warn!(error = %err, "user snapshot write failed, in-memory session stays authoritative");
        }
    }
}
