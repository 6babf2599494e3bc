pub mod password_hasher;
pub mod token_blacklist;
pub mod token_provider;

pub use password_hasher::{HashError, PasswordHasher};
pub use token_blacklist::{TokenBlacklist, TokenBlacklistError};
pub use token_provider::{TokenClaims, TokenError, TokenProvider, ACCESS_TOKEN_TYPE};
