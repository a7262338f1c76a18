//! Authentication implementations: JWT session tokens and Argon2 hashes.

mod jwt;
mod password;

pub use jwt::{JwtConfig, JwtTokenService};
pub use password::Argon2PasswordService;
