//! Canonical name resolution for element and attribute identifiers.
//!
//! Resolution is purely syntactic: member paths are joined with `.` and no
//! import or alias tracking is attempted, so `<Tab.Container>` always
//! resolves to `"Tab.Container"` regardless of what `Tab` is bound to.

use swc_ecma_ast::{JSXAttrName, JSXElementName, JSXMemberExpr, JSXObject};

/// Resolve a tag name to its canonical dotted string.
pub fn resolve_element_name(name: &JSXElementName) -> String {
    match name {
        JSXElementName::Ident(ident) => ident.sym.to_string(),
        JSXElementName::JSXMemberExpr(member) => resolve_member(member),
        // The namespace carries no component identity; keep the name part.
        JSXElementName::JSXNamespacedName(ns) => ns.name.sym.to_string(),
    }
}

/// Resolve an attribute name. Namespaced attributes (`xlink:href`) resolve
/// to the name part only.
pub fn resolve_attr_name(name: &JSXAttrName) -> String {
    match name {
        JSXAttrName::Ident(ident) => ident.sym.to_string(),
        JSXAttrName::JSXNamespacedName(ns) => ns.name.sym.to_string(),
    }
}

fn resolve_member(member: &JSXMemberExpr) -> String {
    let object = match &member.obj {
        JSXObject::Ident(ident) => ident.sym.to_string(),
        JSXObject::JSXMemberExpr(inner) => resolve_member(inner),
    };
    format!("{}.{}", object, member.prop.sym)
}
