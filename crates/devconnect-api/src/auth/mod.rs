//! Authentication and authorization
//!
//! - Token issuance and verification (`jwt`)
//! - The request guard attaching the verified identity (`middleware`)
//! - Password hashing with Argon2 (`password`)
//! - The ownership predicate used by mutating handlers (`authz`)

pub mod authz;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use authz::{ensure_owner, is_owner};
pub use jwt::{Claims, TokenError, UserClaim};
pub use middleware::{auth_middleware, AuthError, AuthUser, TOKEN_HEADER};
pub use password::{hash_password, verify_password};
