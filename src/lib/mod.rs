//! Shared frontend utilities for configuration, errors, blocking dialogs,
//! theming, and build metadata.
//!
//! Centralizing these helpers keeps storage and validation behavior
//! consistent and avoids duplicated logic in routes and features. Nothing in
//! here is a secret: the whole app runs inside the user's browser and the
//! user store is plain localStorage.

pub(crate) mod config;
pub(crate) mod dialog;
pub(crate) mod errors;
pub(crate) mod theme;

/// Commit the binary was built from, embedded by `build.rs`.
pub(crate) const GIT_COMMIT_HASH: &str = env!("GOTRAVEL_WEB_GIT_SHA");

pub(crate) use errors::AppError;
