//! # contenthub-auth
//!
//! Admin authentication for ContentHub.
//!
//! ## Modules
//!
//! - `jwt` — session token creation and validation
//! - `password` — Argon2id password hashing
//! - `authenticator` — login against the configured admin account

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::{AdminAuthenticator, IssuedToken};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
