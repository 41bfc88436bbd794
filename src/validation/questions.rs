//! Body shape for security-question verification.
//!
//! The body must contain exactly the key `securityQuestions`, an array of
//! objects each containing exactly the key `answer`. `deny_unknown_fields`
//! at both levels enforces the "no extra properties" half of the contract;
//! the required-field half falls out of the non-optional struct fields.

use serde::Deserialize;

/// Verification request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerifyAnswersBody {
    #[serde(rename = "securityQuestions")]
    pub security_questions: Vec<SubmittedAnswer>,
}

/// One submitted answer, compared positionally against the stored answers.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubmittedAnswer {
    pub answer: String,
}

impl VerifyAnswersBody {
    /// Flatten into the bare answer strings, in submission order.
    pub fn into_answers(self) -> Vec<String> {
        self.security_questions
            .into_iter()
            .map(|submitted| submitted.answer)
            .collect()
    }
}
