//! Value Object Module

pub mod revocation_key;
pub mod token_claims;
pub mod user_status;
