//! Parsing of user-provided bookmark selectors.
//!
//! A selector names a bookmark either by its exact key or by its 1-based
//! position in the sorted listing. The string is decoded once at the CLI
//! boundary into a [`Selector`], so downstream code never re-inspects raw
//! input.
//!
//! All-digit input is treated as an ordinal; everything else is a key.
//! Numeric keys are rejected at `add` time, so the two forms can never
//! collide.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Key(String),
    Ordinal(usize),
}

impl Selector {
    pub fn parse(input: &str) -> Selector {
        let trimmed = input.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(ordinal) = trimmed.parse::<usize>() {
                return Selector::Ordinal(ordinal);
            }
        }
        Selector::Key(trimmed.to_string())
    }

    /// The raw form, for error messages.
    pub fn display(&self) -> String {
        match self {
            Selector::Key(key) => key.clone(),
            Selector::Ordinal(ordinal) => ordinal.to_string(),
        }
    }
}

/// True if the string would parse as an ordinal rather than a key.
pub fn is_numeric(input: &str) -> bool {
    matches!(Selector::parse(input), Selector::Ordinal(_))
}
