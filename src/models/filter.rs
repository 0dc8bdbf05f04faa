//! Query filters with an "All" sentinel.

use std::str::FromStr;

/// Sentinel query values meaning "no filtering".
pub const ALL_SENTINELS: [&str; 2] = ["All", "all"];

/// Equality filter over a record's classification field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter<T> {
    All,
    Only(T),
    /// A value outside the closed set; no record can match it.
    NoMatch,
}

impl<T> CategoryFilter<T> {
    /// Whether `value` passes this filter.
    pub fn matches(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(expected) => expected == value,
            CategoryFilter::NoMatch => false,
        }
    }
}

impl<T: FromStr> CategoryFilter<T> {
    /// Parse an optional query value.
    ///
    /// Absent, empty and the "All" sentinel mean no filtering. Values are
    /// compared exactly; anything unparseable filters everything out.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|s| !s.is_empty()) else {
            return CategoryFilter::All;
        };

        if ALL_SENTINELS.contains(&raw) {
            return CategoryFilter::All;
        }

        raw.parse::<T>()
            .map(CategoryFilter::Only)
            .unwrap_or(CategoryFilter::NoMatch)
    }
}

/// Normalized free-text search term.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTerm(Option<String>);

impl SearchTerm {
    /// Build from a raw query value; empty input means no search.
    pub fn new(raw: Option<&str>) -> Self {
        Self(
            raw.filter(|s| !s.is_empty())
                .map(|s| s.to_lowercase()),
        )
    }

    /// Whether any of `fields` contains the term, ignoring case.
    pub fn matches_any(&self, fields: &[&str]) -> bool {
        match &self.0 {
            None => true,
            Some(needle) => fields
                .iter()
                .any(|field| field.to_lowercase().contains(needle.as_str())),
        }
    }
}
