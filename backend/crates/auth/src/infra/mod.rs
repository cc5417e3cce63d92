//! Infrastructure Layer
//!
//! Identity store and revocation registry backends.

pub mod memory;
pub mod postgres;
pub mod redis_registry;

pub use memory::{MemoryRevocationRegistry, MemoryUserRepository};
pub use postgres::PgAuthRepository;
pub use redis_registry::RedisRevocationRegistry;
