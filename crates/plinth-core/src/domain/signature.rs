//! Method-signature parsing.
//!
//! The `adapter` generator asks for a comma-separated list of method
//! signatures and synthesizes a matching port interface from it. This module
//! turns that free-form answer into structured descriptors.
//!
//! ## Grammar
//!
//! Each segment (after a top-level comma split and trim) must match:
//!
//! ```text
//! identifier "(" params ")" ":" return-type
//! ```
//!
//! - `identifier`: letters, digits, `_`, `$`; must not start with a digit
//! - `params`: any characters up to the first `)`, captured raw and unvalidated
//! - the `:` must immediately follow the `)`
//! - `return-type`: the remainder, trimmed, non-empty
//!
//! ## Known limitation
//!
//! The split is a naive comma split: commas nested inside a parameter list or
//! a generic return type (`fetch(a: string, b: number): Map<string, number>`)
//! are treated as signature separators, so such inputs are mis-split into
//! fragments that fail the segment match and are dropped. Kept deliberately;
//! a balanced-bracket splitter would be a visible behavior change.

/// One parsed method signature.
///
/// `params` and `return_type` are carried through verbatim — no type checking,
/// no parameter parsing, no uniqueness checking across descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// Method name, e.g. `saveUser`.
    pub name: String,
    /// Raw parameter list, e.g. `user: User`.
    pub params: String,
    /// Raw return type, e.g. `Promise<void>`.
    pub return_type: String,
}

/// Parse a comma-separated signature list into descriptors, in input order.
///
/// Never fails: segments that do not match the grammar (including empty
/// segments from stray commas) are silently dropped, so malformed or empty
/// input yields an empty vec.
pub fn parse_signatures(raw: &str) -> Vec<MethodDescriptor> {
    raw.split(',')
        .map(str::trim)
        .filter_map(parse_segment)
        .collect()
}

/// Match one trimmed segment against the signature grammar.
fn parse_segment(segment: &str) -> Option<MethodDescriptor> {
    let open = segment.find('(')?;
    let name = &segment[..open];
    if !is_identifier(name) {
        return None;
    }

    // Params run to the first ')'; the ':' must follow it immediately.
    let rest = &segment[open + 1..];
    let close = rest.find(')')?;
    let params = &rest[..close];
    let after = &rest[close + 1..];
    let return_type = after.strip_prefix(':')?.trim();
    if return_type.is_empty() {
        return None;
    }

    Some(MethodDescriptor {
        name: name.to_string(),
        params: params.to_string(),
        return_type: return_type.to_string(),
    })
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
