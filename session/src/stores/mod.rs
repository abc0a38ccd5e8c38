//! Concrete provider implementations.

mod file;
mod gateway;
mod memory;

pub use file::FileStorage;
pub use gateway::HttpAuthGateway;
pub use memory::MemoryStorage;
