use crate::constants::origin;
use indexmap::IndexSet;

/// Allow-list parsed from the raw comma-separated configuration value.
///
/// Entries are kept exactly as splitting yields them: `"a, b"` holds `"a"`
/// and `" b"`, and `"a,"` holds only `"a"`. Matching is exact and case-sensitive. A `*` entry anywhere in
/// the list admits every origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedOriginSet {
    entries: IndexSet<String>,
    wildcard: bool,
}

impl AllowedOriginSet {
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        if raw.trim().is_empty() {
            return Self::default();
        }

        let mut pieces: Vec<&str> = raw.split(origin::SEPARATOR).collect();
        // Trailing empty pieces are dropped; interior ones are kept.
        while pieces.last().is_some_and(|piece| piece.is_empty()) {
            pieces.pop();
        }

        let entries: IndexSet<String> = pieces.into_iter().map(str::to_owned).collect();
        let wildcard = entries.contains(origin::WILDCARD);

        Self { entries, wildcard }
    }

    pub fn allows(&self, candidate: &str) -> bool {
        self.wildcard || self.entries.contains(candidate)
    }

    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "allowed_origins_test.rs"]
mod allowed_origins_test;
