//! Fact types produced by one traversal of a parsed source file.
//!
//! A fact is an immutable observation: one [`ElementFact`] per tagged element
//! occurrence, carrying one [`PropFact`] per attribute in source order. Facts
//! hold everything the aggregation step needs, so nothing downstream has to
//! touch the syntax tree again.

use serde::Serialize;

/// Prop name used for spread attributes (`{...props}`), whose original key
/// cannot be recovered statically.
pub const SPREAD_PROP: &str = "{...}";

/// A position in a source file. Lines are 1-based, columns 0-based,
/// matching the parser's convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Statically determined value of a prop.
///
/// Classification is total: every attribute-value shape maps to exactly one
/// variant, with anything non-literal falling back to [`PropValue::Dynamic`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropValue {
    /// Valueless boolean attribute, e.g. `<input disabled />`.
    Present,
    /// A string/number/boolean literal, rendered as text.
    Literal(String),
    /// Any expression whose value is not statically representable
    /// (identifiers, calls, templates, elements, ...).
    Dynamic,
}

impl PropValue {
    /// The textual rendering used for filter comparisons.
    ///
    /// `Present` renders as `"true"`; `Dynamic` has no rendering and thus
    /// never string-equals a filter literal.
    pub fn render(&self) -> Option<&str> {
        match self {
            PropValue::Present => Some("true"),
            PropValue::Literal(text) => Some(text),
            PropValue::Dynamic => None,
        }
    }
}

/// One attribute occurrence on one element.
#[derive(Debug, Clone, PartialEq)]
pub struct PropFact {
    /// Canonical dotted name of the owning component.
    pub component: String,
    /// Prop name, or [`SPREAD_PROP`] for spread attributes.
    pub prop: String,
    pub value: PropValue,
    /// Exact source text of the attribute.
    pub source: String,
    pub start: SourceLocation,
    pub end: SourceLocation,
}

/// One tagged-element occurrence with its attributes in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementFact {
    /// Canonical dotted name, e.g. `"Tab.Container"`.
    pub name: String,
    /// Source text of the opening element, backing synthetic facts.
    pub source: String,
    pub start: SourceLocation,
    pub end: SourceLocation,
    pub props: Vec<PropFact>,
}

impl ElementFact {
    /// True when no attribute on this element is named `key`.
    pub fn lacks_prop(&self, key: &str) -> bool {
        self.props.iter().all(|fact| fact.prop != key)
    }

    /// Synthetic fact for a `!key` filter match, covering the element's own
    /// source range.
    pub fn absent_fact(&self, key: &str) -> PropFact {
        PropFact {
            component: self.name.clone(),
            prop: key.to_string(),
            value: PropValue::Present,
            source: self.source.clone(),
            start: self.start,
            end: self.end,
        }
    }
}
