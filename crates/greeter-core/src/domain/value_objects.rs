//! Domain value objects.
//!
//! # Design
//!
//! Value objects are immutable and defined by their data, not identity.
//! The only way to obtain one is its smart constructor, which returns a
//! [`GreetResult`] instead of panicking, so an invalid `Person` can never
//! exist.

use std::fmt;

use crate::domain::error::{ErrorInfo, GreetResult};

/// Maximum length of a person's name, in UTF-8 bytes.
///
/// ASCII names may use all 100 characters; multibyte text fits fewer.
pub const MAX_NAME_LENGTH: usize = 100;

// ── Person ───────────────────────────────────────────────────────────────────

/// A validated person's name.
///
/// Invariants, established by [`Person::new`]:
/// - the name is never empty
/// - the name is at most [`MAX_NAME_LENGTH`] bytes
///
/// Whitespace and Unicode are preserved exactly as given; no trimming or
/// normalization takes place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: String,
}

impl Person {
    /// Validate `name` and build a `Person`.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `name` is empty or longer than
    /// [`MAX_NAME_LENGTH`] bytes.
    pub fn new(name: impl Into<String>) -> GreetResult<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(ErrorInfo::validation("Person name cannot be empty"));
        }

        if name.len() > MAX_NAME_LENGTH {
            return Err(ErrorInfo::validation(format!(
                "Person name exceeds maximum length of {MAX_NAME_LENGTH} characters"
            )));
        }

        Ok(Self { name })
    }

    /// The exact name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `Hello, <name>!`
    pub fn greeting_message(&self) -> String {
        format!("Hello, {}!", self.name)
    }

    /// Restates the non-empty invariant. Always `true` for a constructed
    /// `Person`; kept for diagnostics and tests.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<&str> for Person {
    type Error = ErrorInfo;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Person {
    type Error = ErrorInfo;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
