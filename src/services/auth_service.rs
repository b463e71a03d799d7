//! Authentication service - employee id + password login.
//!
//! Passwords are checked against their Argon2 hash. `relaxed_login` turns
//! that check off so that a matching employee id alone is enough; every
//! such login is logged as a warning.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Authentication service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve the user for these credentials
    async fn login(&self, employee_id: &str, password: &str) -> AppResult<User>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    relaxed_login: bool,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>, relaxed_login: bool) -> Self {
        Self { uow, relaxed_login }
    }
}

/// Verified against when the employee id is unknown, so both paths hash.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$ZHVtbXlzYWx0MTIzNA$3Tf+aTc9N3l8oN1cRp5mQm0JbDqzH0Y8d1l0Jm1f2xY";

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn login(&self, employee_id: &str, password: &str) -> AppResult<User> {
        let user = self.uow.users().find_by_employee_id(employee_id).await?;

        let Some(user) = user else {
            Password::from_hash(DUMMY_HASH.to_string()).verify(password);
            tracing::info!(employee_id, "Login rejected: unknown employee id");
            return Err(AppError::InvalidCredentials);
        };

        if self.relaxed_login {
            tracing::warn!(employee_id, "Relaxed login: password not checked");
            return Ok(user);
        }

        if !Password::from_hash(user.password_hash.clone()).verify(password) {
            tracing::info!(employee_id, "Login rejected: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }
}
