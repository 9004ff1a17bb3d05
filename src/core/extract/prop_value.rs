//! Static classification of attribute values.
//!
//! Mirrors only what the literal syntax determines: no constant folding and
//! no cross-reference resolution. Every shape not recognized as a literal
//! classifies as [`PropValue::Dynamic`].

use swc_ecma_ast::{Expr, JSXAttrValue, JSXExpr, Lit, Number};

use crate::core::facts::PropValue;

/// Classify an attribute's value syntax. Total over all value shapes.
pub fn classify_prop_value(value: Option<&JSXAttrValue>) -> PropValue {
    match value {
        // `<input disabled />` carries no value node.
        None => PropValue::Present,
        Some(JSXAttrValue::Str(text)) => match text.value.as_str() {
            Some(value) => PropValue::Literal(value.to_string()),
            None => PropValue::Dynamic,
        },
        // One level of unwrapping: `kind={"primary"}` classifies the inner
        // expression; containers cannot nest syntactically.
        Some(JSXAttrValue::JSXExprContainer(container)) => match &container.expr {
            JSXExpr::JSXEmptyExpr(_) => PropValue::Dynamic,
            JSXExpr::Expr(expr) => classify_expr(expr),
        },
        Some(JSXAttrValue::JSXElement(_)) | Some(JSXAttrValue::JSXFragment(_)) => {
            PropValue::Dynamic
        }
    }
}

fn classify_expr(expr: &Expr) -> PropValue {
    match expr {
        Expr::Lit(lit) => classify_lit(lit),
        _ => PropValue::Dynamic,
    }
}

fn classify_lit(lit: &Lit) -> PropValue {
    match lit {
        Lit::Str(text) => match text.value.as_str() {
            Some(value) => PropValue::Literal(value.to_string()),
            None => PropValue::Dynamic,
        },
        Lit::Num(num) => PropValue::Literal(render_number(num)),
        Lit::Bool(flag) => PropValue::Literal(flag.value.to_string()),
        _ => PropValue::Dynamic,
    }
}

/// Textual representation of a numeric literal: the raw source text when the
/// parser kept it, otherwise a minimal decimal rendering.
fn render_number(num: &Number) -> String {
    match &num.raw {
        Some(raw) => raw.to_string(),
        None if num.value.fract() == 0.0 && num.value.is_finite() => {
            format!("{}", num.value as i64)
        }
        None => num.value.to_string(),
    }
}
