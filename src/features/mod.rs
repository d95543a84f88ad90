//! Feature modules. Auth is the only feature on this page: the login
//! decision, the local user store, and the password-reset flow.

pub(crate) mod auth;
