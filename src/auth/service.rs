//! Auth orchestration: register, login, verify security answers.

use super::credentials::{Credential, CredentialRepository};
use super::crypto::{constant_time_str_eq, verify_password};
use super::errors::{AuthError, AuthResult};

/// Auth operations over a credential repository.
pub struct AuthService<R: CredentialRepository> {
    repository: R,
}

impl<R: CredentialRepository> AuthService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Register a new user. Duplicate emails are a `Conflict`.
    ///
    /// Accounts created here start with no security answers; answers are
    /// provisioned out of band.
    pub fn register(&self, email: &str, password: &str) -> AuthResult<Credential> {
        if self.repository.email_exists(email)? {
            return Err(AuthError::Conflict);
        }

        let credential = Credential::new(email.to_string(), password, Vec::new())?;
        self.repository.create(&credential)?;
        Ok(credential)
    }

    /// Check an email/password pair.
    ///
    /// Unknown emails fail exactly like wrong passwords.
    pub fn login(&self, email: &str, password: &str) -> AuthResult<()> {
        let credential = self
            .repository
            .find_by_email(email)?
            .ok_or(AuthError::Unauthorized)?;

        if !verify_password(password, &credential.password_hash)? {
            return Err(AuthError::Unauthorized);
        }

        Ok(())
    }

    /// Compare submitted security answers against the stored ones.
    ///
    /// The comparison is positional over the full stored sequence: the
    /// submission must have the same length, and every answer must match
    /// its counterpart exactly. Every pair is compared before the verdict
    /// is produced.
    pub fn verify_security_answers(
        &self,
        email: &str,
        submitted: &[String],
    ) -> AuthResult<Credential> {
        let credential = self
            .repository
            .find_by_email(email)?
            .ok_or(AuthError::Unauthorized)?;

        let stored = &credential.security_answers;
        if stored.is_empty() || submitted.len() != stored.len() {
            return Err(AuthError::Unauthorized);
        }

        let mut all_match = true;
        for (submitted_answer, stored_answer) in submitted.iter().zip(stored.iter()) {
            all_match &= constant_time_str_eq(submitted_answer, stored_answer);
        }

        if !all_match {
            return Err(AuthError::Unauthorized);
        }

        Ok(credential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::credentials::{seeded_repository, InMemoryCredentialRepository};

    fn seeded_service() -> AuthService<InMemoryCredentialRepository> {
        AuthService::new(seeded_repository().unwrap())
    }

    fn answers(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_register_new_email() {
        let service = seeded_service();
        let credential = service.register("ron@hogwarts.edu", "weasley").unwrap();

        assert_eq!(credential.email, "ron@hogwarts.edu");
        assert!(service.login("ron@hogwarts.edu", "weasley").is_ok());
    }

    #[test]
    fn test_register_duplicate_email_is_conflict() {
        let service = seeded_service();
        let result = service.register("harry@hogwarts.edu", "potter");

        assert!(matches!(result, Err(AuthError::Conflict)));
    }

    #[test]
    fn test_login_success() {
        let service = seeded_service();
        assert!(service.login("harry@hogwarts.edu", "potter").is_ok());
    }

    #[test]
    fn test_login_wrong_password_is_unauthorized() {
        let service = seeded_service();
        let result = service.login("harry@hogwarts.edu", "porter");

        assert!(matches!(result, Err(AuthError::Unauthorized)));
    }

    #[test]
    fn test_login_unknown_email_is_unauthorized() {
        let service = seeded_service();
        let result = service.login("tom@riddle.com", "horcrux");

        assert!(matches!(result, Err(AuthError::Unauthorized)));
    }

    #[test]
    fn test_verify_all_answers_match() {
        let service = seeded_service();
        let result = service.verify_security_answers(
            "harry@hogwarts.edu",
            &answers(&["Hedwig", "Quidditch Through the Ages", "Evans"]),
        );

        assert_eq!(result.unwrap().email, "harry@hogwarts.edu");
    }

    #[test]
    fn test_verify_one_wrong_answer_is_unauthorized() {
        let service = seeded_service();
        let result = service.verify_security_answers(
            "harry@hogwarts.edu",
            &answers(&["Fluffy", "Quidditch Through the Ages", "Evans"]),
        );

        assert!(matches!(result, Err(AuthError::Unauthorized)));
    }

    #[test]
    fn test_verify_length_mismatch_is_unauthorized() {
        let service = seeded_service();

        let short = service
            .verify_security_answers("harry@hogwarts.edu", &answers(&["Hedwig"]));
        assert!(matches!(short, Err(AuthError::Unauthorized)));

        let long = service.verify_security_answers(
            "harry@hogwarts.edu",
            &answers(&["Hedwig", "Quidditch Through the Ages", "Evans", "Extra"]),
        );
        assert!(matches!(long, Err(AuthError::Unauthorized)));
    }

    #[test]
    fn test_verify_unknown_email_is_unauthorized() {
        let service = seeded_service();
        let result =
            service.verify_security_answers("tom@riddle.com", &answers(&["Nagini"]));

        assert!(matches!(result, Err(AuthError::Unauthorized)));
    }

    #[test]
    fn test_verify_account_without_answers_is_unauthorized() {
        let service = seeded_service();
        service.register("ron@hogwarts.edu", "weasley").unwrap();

        let result = service.verify_security_answers("ron@hogwarts.edu", &[]);
        assert!(matches!(result, Err(AuthError::Unauthorized)));
    }

    #[test]
    fn test_answer_comparison_is_case_sensitive() {
        let service = seeded_service();
        let result = service.verify_security_answers(
            "harry@hogwarts.edu",
            &answers(&["hedwig", "Quidditch Through the Ages", "Evans"]),
        );

        assert!(matches!(result, Err(AuthError::Unauthorized)));
    }
}
