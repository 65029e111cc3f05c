//! Cross-cutting HTTP plumbing shared by Mindora services: health probes,
//! request-id middleware, tracing setup, and serde helpers.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
