pub mod auth;

pub use auth::AdminSession;
