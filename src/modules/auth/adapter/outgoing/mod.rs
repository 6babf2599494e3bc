pub mod jwt;
pub mod security;
pub mod token_blacklist_redis;

pub use token_blacklist_redis::RedisTokenBlacklist;
