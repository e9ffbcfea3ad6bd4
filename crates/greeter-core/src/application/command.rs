//! Command DTOs crossing the presentation → application boundary.

/// Request to greet someone.
///
/// Carries the raw, unvalidated input. Validation happens when the use
/// case builds a [`Person`](crate::domain::Person) from it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GreetCommand {
    pub name: String,
}

impl GreetCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
