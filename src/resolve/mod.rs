//! Reference resolution — cross-reference tokens to symbols.
//!
//! Resolution is a distinct final stage over a complete symbol index,
//! never eager during parsing, so forward references (a doc comment
//! referencing a symbol declared later) cost nothing special.
//!
//! The index covers the *complete* symbol set, including symbols the
//! filter excluded: a reference to a hidden symbol resolves to
//! "present but hidden" and renders as plain text instead of a
//! dangling link.

mod index;
mod resolver;

pub use index::SymbolIndex;
pub use resolver::{RefToken, ResolveResult, Resolver, resolve_docs};
