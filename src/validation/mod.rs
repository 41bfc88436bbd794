//! Request-shape validation.
//!
//! Everything here is structural: key-set rules for JSON bodies, path
//! identifier parsing, and the strict body shape for security-question
//! verification. Field values are never inspected beyond their JSON type.

mod ident;
mod keys;
mod questions;

pub use ident::{parse_id, InvalidId};
pub use keys::{KeyMode, KeyRule};
pub use questions::{SubmittedAnswer, VerifyAnswersBody};
