//! Fact extraction: one traversal of a parsed file into usage facts.
//!
//! - `element_name`: canonical dotted-name resolution for tags and attributes
//! - `prop_value`: static classification of attribute values
//! - `visitor`: the single-pass tree walk producing [`ElementFact`]s
//!
//! [`ElementFact`]: crate::core::facts::ElementFact

pub mod element_name;
pub mod prop_value;
pub mod visitor;

pub use element_name::{resolve_attr_name, resolve_element_name};
pub use prop_value::classify_prop_value;
pub use visitor::extract_facts;
