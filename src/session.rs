//! Session collaborator
//!
//! Authentication itself happens elsewhere. The home screen only needs the
//! signed-in user's name for its greeting and a way to end the session.

use crate::error::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

/// Screens a host can route to after a session change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The sign-in form
    SignIn,
    /// The book list
    Home,
}

/// An established session
pub trait SessionHandle: Send + Sync {
    /// Identifying name shown to the user
    fn username(&self) -> &str;

    /// End the session
    fn sign_out(&self) -> Result<()>;
}

/// Session held entirely in process
#[derive(Debug)]
pub struct StaticSession {
    username: String,
    signed_out: AtomicBool,
}

impl StaticSession {
    /// Create a signed-in session for `username`
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            signed_out: AtomicBool::new(false),
        }
    }

    /// Whether `sign_out` has been called
    pub fn is_signed_out(&self) -> bool {
        self.signed_out.load(Ordering::Acquire)
    }
}

impl SessionHandle for StaticSession {
    fn username(&self) -> &str {
        &self.username
    }

    fn sign_out(&self) -> Result<()> {
        if self.signed_out.swap(true, Ordering::AcqRel) {
            return Err(Error::session(format!(
                "'{}' is already signed out",
                self.username
            )));
        }
        info!(user = %self.username, "Signed out");
        Ok(())
    }
}
