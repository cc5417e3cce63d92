//! Domain Layer
//!
//! Contains entities, value objects, the token codec, and repository traits.

pub mod entity;
pub mod repository;
pub mod token_codec;
pub mod value_object;

// Re-exports
pub use entity::user::User;
pub use repository::{RevocationRegistry, UserRepository};
pub use token_codec::{IssuedToken, TokenCodec, TokenError};
pub use value_object::{
    revocation_key::RevocationKey, token_claims::TokenClaims, user_status::UserStatus,
};
