//! Ambient plumbing shared across the workspace: request-id middleware,
//! tracing initialization, and serialization helpers.

pub mod middleware;
pub mod serde;
pub mod tracing;
