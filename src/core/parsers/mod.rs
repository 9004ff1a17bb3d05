//! Parser collaborators producing syntax trees for the analysis engine.

pub mod jsx;

pub use jsx::{parse_source, ParseFailure, ParsedSource, SyntaxExtension};
