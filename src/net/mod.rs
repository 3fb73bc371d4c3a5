//! Networking modules for the identity-provider HTTP boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` performs the REST calls and the OAuth hand-off, `error` classifies
//! provider failures into a closed kind set at the boundary, and `types`
//! defines the wire schema for successful responses.

pub mod auth;
pub mod error;
pub mod types;
