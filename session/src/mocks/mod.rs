//! Test doubles for session providers.

mod gateway;

pub use gateway::MockAuthGateway;
