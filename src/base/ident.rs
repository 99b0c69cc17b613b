//! Identifier and reference-token validation.

use unicode_ident::{is_xid_continue, is_xid_start};

use super::SCOPE_SEPARATOR;

/// Check that `text` is a single identifier.
///
/// Follows Unicode XID rules, with `_` additionally allowed as a start
/// character and a single leading `~` permitted for destructor names.
pub fn is_identifier(text: &str) -> bool {
    let body = text.strip_prefix('~').unwrap_or(text);
    let mut chars = body.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(is_xid_start(first) || first == '_') {
        return false;
    }
    chars.all(|c| is_xid_continue(c))
}

/// Check that `text` is a well-formed reference token:
/// one or more `::`-separated identifiers, optionally rooted (`::name`).
pub fn is_reference_token(text: &str) -> bool {
    let body = text.strip_prefix(SCOPE_SEPARATOR).unwrap_or(text);
    if body.is_empty() {
        return false;
    }
    body.split(SCOPE_SEPARATOR).all(is_identifier)
}
