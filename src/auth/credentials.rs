//! Credential model and repository.
//!
//! Credentials are keyed by email. Serialized credentials never include the
//! password hash or the stored security answers.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::crypto::hash_password;
use super::errors::{AuthError, AuthResult};

/// A registered user's credential.
#[derive(Debug, Clone, Serialize)]
pub struct Credential {
    /// Unique credential identifier.
    pub id: Uuid,

    /// Email address, unique per user.
    pub email: String,

    /// Argon2id hash, never plaintext.
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Stored security answers, compared positionally during verification.
    #[serde(skip_serializing)]
    pub security_answers: Vec<String>,

    /// When the credential was created.
    pub created_at: DateTime<Utc>,
}

impl Credential {
    /// Create a credential, hashing the raw password.
    pub fn new(email: String, password: &str, security_answers: Vec<String>) -> AuthResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            email,
            password_hash: hash_password(password)?,
            security_answers,
            created_at: Utc::now(),
        })
    }
}

/// Storage operations for credentials.
pub trait CredentialRepository: Send + Sync {
    /// Find a credential by email.
    fn find_by_email(&self, email: &str) -> AuthResult<Option<Credential>>;

    /// Whether an email is already registered.
    fn email_exists(&self, email: &str) -> AuthResult<bool>;

    /// Store a new credential. Duplicate emails are a `Conflict`.
    fn create(&self, credential: &Credential) -> AuthResult<()>;
}

/// In-memory credential repository.
#[derive(Debug, Default)]
pub struct InMemoryCredentialRepository {
    credentials: std::sync::RwLock<Vec<Credential>>,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialRepository for InMemoryCredentialRepository {
    fn find_by_email(&self, email: &str) -> AuthResult<Option<Credential>> {
        let credentials = self
            .credentials
            .read()
            .map_err(|_| AuthError::Storage("Lock poisoned".to_string()))?;

        Ok(credentials
            .iter()
            .find(|credential| credential.email == email)
            .cloned())
    }

    fn email_exists(&self, email: &str) -> AuthResult<bool> {
        let credentials = self
            .credentials
            .read()
            .map_err(|_| AuthError::Storage("Lock poisoned".to_string()))?;

        Ok(credentials
            .iter()
            .any(|credential| credential.email == email))
    }

    fn create(&self, credential: &Credential) -> AuthResult<()> {
        let mut credentials = self
            .credentials
            .write()
            .map_err(|_| AuthError::Storage("Lock poisoned".to_string()))?;

        if credentials.iter().any(|c| c.email == credential.email) {
            return Err(AuthError::Conflict);
        }

        credentials.push(credential.clone());
        Ok(())
    }
}

/// A repository pre-loaded with the starter account.
pub fn seeded_repository() -> AuthResult<InMemoryCredentialRepository> {
    let repository = InMemoryCredentialRepository::new();

    let harry = Credential::new(
        "harry@hogwarts.edu".to_string(),
        "potter",
        vec![
            "Hedwig".to_string(),
            "Quidditch Through the Ages".to_string(),
            "Evans".to_string(),
        ],
    )?;
    repository.create(&harry)?;

    Ok(repository)
}
