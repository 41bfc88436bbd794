//! Registration, login, and security-question verification.
//!
//! Passwords are stored only as Argon2id hashes. Unknown emails and
//! credential mismatches are reported with the same `Unauthorized` failure
//! so responses do not reveal which emails are registered.

mod credentials;
mod crypto;
mod errors;
mod service;

pub use credentials::{
    seeded_repository, Credential, CredentialRepository, InMemoryCredentialRepository,
};
pub use crypto::{constant_time_str_eq, hash_password, verify_password};
pub use errors::{AuthError, AuthResult};
pub use service::AuthService;
