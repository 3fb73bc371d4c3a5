//! Ephemeral client state shared via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing here is persisted; every value lives for the current render tree
//! only. Session custody beyond that is the identity provider's job.

pub mod auth;
pub mod signup;
