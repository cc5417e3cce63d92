//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC-SHA256, Base64)
//! - Secret key handling (zeroized on drop, never printed)
//! - Cookie and bearer credential extraction
//! - Deadlines for calls into external stores

pub mod cookie;
pub mod crypto;
pub mod deadline;
pub mod secret;
