//! Foundation types for the documentation model.
//!
//! This module provides fundamental types used throughout the pipeline:
//! - [`ScopePath`] - Ordered scope segments with `::` display joining
//! - Qualified-name helpers ([`parent_scope`], [`simple_name`], [`join_scope`])
//! - Identifier and reference-token validation
//!
//! This module has NO dependencies on other docsym modules.

mod ident;
mod scope_path;

pub use ident::{is_identifier, is_reference_token};
pub use scope_path::{ScopePath, join_scope, parent_scope, simple_name};

/// Separator between scope segments in qualified names.
pub const SCOPE_SEPARATOR: &str = "::";

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
