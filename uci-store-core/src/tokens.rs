use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// An ordered set of unique string tokens with a space-delimited text form.
///
/// UCI stores several memberships (firewall zone networks, bridge ports) as
/// space-delimited strings. Editing those in place invites duplicate tokens
/// and substring false positives ("wan3" matching "wan3x"). This type parses
/// the string form once, offers exact-token membership and append-if-absent,
/// and serializes back at the store boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TokenSet(Vec<String>);

impl TokenSet {
    /// Parse a space-delimited token string, dropping duplicate tokens while
    /// preserving first-occurrence order.
    pub fn parse(raw: &str) -> Self {
        let mut set = TokenSet::default();
        for token in raw.split_whitespace() {
            set.add_unique(token);
        }
        set
    }

    /// Exact-token membership test.
    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    /// Append a token unless an identical token is already present.
    /// Returns true if the set changed.
    pub fn add_unique(&mut self, token: &str) -> bool {
        if self.contains(token) {
            return false;
        }
        self.0.push(token.to_string());
        true
    }

    /// Iterate over tokens in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for TokenSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}
