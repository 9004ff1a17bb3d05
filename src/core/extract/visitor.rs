//! Single-pass fact extraction over a parsed module.
//!
//! The extractor visits every tagged element exactly once, in source order,
//! and returns plain [`ElementFact`] values. It holds no aggregate state:
//! re-invoking it on the same tree restarts the sequence from scratch.

use swc_common::{BytePos, SourceMap, Span, Spanned};
use swc_ecma_ast::{JSXAttrOrSpread, JSXOpeningElement};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::extract::element_name::{resolve_attr_name, resolve_element_name};
use crate::core::extract::prop_value::classify_prop_value;
use crate::core::facts::{ElementFact, PropFact, PropValue, SourceLocation, SPREAD_PROP};
use crate::core::parsers::ParsedSource;

/// Extract one [`ElementFact`] per tagged element, each with its props in
/// source order. Elements whose name is absent from a non-empty
/// `only_components` allow-list are skipped (their descendants still count).
pub fn extract_facts(
    parsed: &ParsedSource,
    code: &str,
    only_components: &[String],
) -> Vec<ElementFact> {
    let mut extractor = FactExtractor {
        code,
        offset: parsed.start_pos,
        source_map: &parsed.source_map,
        only_components,
        elements: Vec::new(),
    };
    parsed.module.visit_with(&mut extractor);
    extractor.elements
}

struct FactExtractor<'a> {
    code: &'a str,
    /// Byte offset of the file within the source map.
    offset: BytePos,
    source_map: &'a SourceMap,
    only_components: &'a [String],
    elements: Vec<ElementFact>,
}

impl FactExtractor<'_> {
    fn keep(&self, name: &str) -> bool {
        self.only_components.is_empty() || self.only_components.iter().any(|c| c == name)
    }

    fn location(&self, pos: BytePos) -> SourceLocation {
        let loc = self.source_map.lookup_char_pos(pos);
        SourceLocation::new(loc.line, loc.col_display)
    }

    fn snippet(&self, span: Span) -> String {
        let lo = span.lo.0.saturating_sub(self.offset.0) as usize;
        let hi = span.hi.0.saturating_sub(self.offset.0) as usize;
        self.code.get(lo..hi).unwrap_or_default().to_string()
    }

    fn prop_fact(&self, component: &str, attr: &JSXAttrOrSpread) -> PropFact {
        let (prop, value, span) = match attr {
            JSXAttrOrSpread::JSXAttr(attr) => (
                resolve_attr_name(&attr.name),
                classify_prop_value(attr.value.as_ref()),
                attr.span,
            ),
            // A spread carries no recoverable key; like a valueless
            // attribute it classifies as present.
            JSXAttrOrSpread::SpreadElement(spread) => {
                (SPREAD_PROP.to_string(), PropValue::Present, spread.span())
            }
        };
        PropFact {
            component: component.to_string(),
            prop,
            value,
            source: self.snippet(span),
            start: self.location(span.lo),
            end: self.location(span.hi),
        }
    }
}

impl Visit for FactExtractor<'_> {
    fn visit_jsx_opening_element(&mut self, node: &JSXOpeningElement) {
        let name = resolve_element_name(&node.name);

        if self.keep(&name) {
            let props = node
                .attrs
                .iter()
                .map(|attr| self.prop_fact(&name, attr))
                .collect();

            self.elements.push(ElementFact {
                name,
                source: self.snippet(node.span),
                start: self.location(node.span.lo),
                end: self.location(node.span.hi),
                props,
            });
        }

        // Elements can nest inside attribute values; keep walking.
        node.visit_children_with(self);
    }
}
