use regex::Regex;

use crate::error::{Error, Result};

/// Numeric suffix of a name that already follows `<prefix><digits>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    Number(u64),
    /// Matches the pattern but the digits do not fit in a `u64`.
    TooLarge,
}

/// The `<prefix><digits>` naming scheme.
///
/// Matching is a full match against `^<prefix>[0-9]+$` with the prefix escaped,
/// so `clip.` only matches a literal dot. Leading zeros are accepted and parsed,
/// which makes `clip.007` occupy number 7.
#[derive(Debug, Clone)]
pub struct NamePattern {
    prefix: String,
    regex: Regex,
}

impl NamePattern {
    pub fn new(prefix: &str) -> Result<Self> {
        let source = format!("^{}([0-9]+)$", regex::escape(prefix));
        let regex = Regex::new(&source).map_err(|e| {
            Error::validation_invalid_argument("prefix", e.to_string(), Some(prefix.to_string()))
        })?;

        Ok(Self {
            prefix: prefix.to_string(),
            regex,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// Parse the suffix of a conforming name; `None` when the name does not conform.
    pub fn suffix(&self, name: &str) -> Option<Suffix> {
        let digits = self.regex.captures(name)?.get(1)?.as_str();
        Some(match digits.parse::<u64>() {
            Ok(n) => Suffix::Number(n),
            Err(_) => Suffix::TooLarge,
        })
    }

    pub fn name_for(&self, number: u64) -> String {
        format!("{}{}", self.prefix, number)
    }
}
