//! Prop filter queries.
//!
//! One filter string narrows which prop facts are counted:
//!
//! - `key` counts every prop named `key`
//! - `key=value` counts props whose value string-equals `value`
//! - `key!=value` counts props whose value differs from `value`
//! - `!key` counts elements carrying no prop named `key` at all
//!
//! Splitting is first-match-wins: `!=` is recognized before `=` (it contains
//! one), and the first occurrence of the operator separates key from value.
//! Keys or values that themselves contain `=` or `!` are not supported.

use crate::core::facts::PropFact;

/// A parsed prop filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropQuery {
    /// `key` - the prop is present, any value.
    Has { key: String },
    /// `key=value` - the prop's rendered value equals `value` exactly.
    Equals { key: String, value: String },
    /// `key!=value` - the prop's rendered value differs from `value`.
    /// Dynamic values always differ.
    NotEquals { key: String, value: String },
    /// `!key` - the element has no prop named `key`. Matched per element,
    /// not per fact; see [`PropQuery::matches`].
    Absent { key: String },
}

impl PropQuery {
    pub fn parse(filter: &str) -> Self {
        if let Some(key) = filter.strip_prefix('!') {
            return PropQuery::Absent {
                key: key.to_string(),
            };
        }
        if let Some(index) = filter.find("!=") {
            return PropQuery::NotEquals {
                key: filter[..index].to_string(),
                value: filter[index + 2..].to_string(),
            };
        }
        if let Some(index) = filter.find('=') {
            return PropQuery::Equals {
                key: filter[..index].to_string(),
                value: filter[index + 1..].to_string(),
            };
        }
        PropQuery::Has {
            key: filter.to_string(),
        }
    }

    /// The prop name this query is about.
    pub fn key(&self) -> &str {
        match self {
            PropQuery::Has { key }
            | PropQuery::Equals { key, .. }
            | PropQuery::NotEquals { key, .. }
            | PropQuery::Absent { key } => key,
        }
    }

    /// Whether a single prop fact satisfies this query.
    ///
    /// `Absent` never matches an individual fact: its condition is the
    /// absence of a prop on the whole element, which the scan checks via
    /// [`ElementFact::lacks_prop`] before emitting a synthetic fact.
    ///
    /// [`ElementFact::lacks_prop`]: crate::core::facts::ElementFact::lacks_prop
    pub fn matches(&self, fact: &PropFact) -> bool {
        match self {
            PropQuery::Has { key } => fact.prop == *key,
            PropQuery::Equals { key, value } => {
                fact.prop == *key && fact.value.render() == Some(value.as_str())
            }
            PropQuery::NotEquals { key, value } => {
                fact.prop == *key && fact.value.render() != Some(value.as_str())
            }
            PropQuery::Absent { .. } => false,
        }
    }
}
