//! Repairs markup copied out of JSX components.

use super::{RewriteContext, RewriteStep};

/// camelCase attribute spellings and their SVG names.
const CAMEL_CASE_ATTRIBUTES: [(&str, &str); 3] = [
    ("strokeWidth=", "stroke-width="),
    ("strokeLinecap=", "stroke-linecap="),
    ("strokeLinejoin=", "stroke-linejoin="),
];

/// Rewrites JSX attribute names and `{expr}` quoting to plain SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizeAttributes;

impl RewriteStep for NormalizeAttributes {
    fn name(&self) -> &'static str {
        "normalize"
    }

    fn rewrite(&self, svg: &str, _ctx: &RewriteContext) -> String {
        normalize_attributes(svg)
    }
}

/// Hyphenates the known camelCase stroke attributes and turns every `{` and
/// `}` into `"`, so `strokeWidth={2}` becomes `stroke-width="2"`.
pub fn normalize_attributes(svg: &str) -> String {
    let mut out = svg.to_string();
    for (camel, svg_name) in CAMEL_CASE_ATTRIBUTES {
        out = out.replace(camel, svg_name);
    }
    out.replace(['{', '}'], "\"")
}
