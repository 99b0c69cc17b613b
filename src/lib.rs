//! # docsym-base
//!
//! Core library for symbol-graph documentation modeling, filtering,
//! and cross-reference resolution.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! pipeline  → stage orchestration, DocModel output
//!   ↓
//! tree      → documentation tree assembly (terminal, immutable)
//!   ↓
//! resolve   → cross-reference resolution over the complete index
//!   ↓
//! semantic  → ingestion, visibility filter, overload grouping
//!   ↓
//! comment   → doc-comment parsing into structured blocks
//!   ↓
//! model     → declaration records, symbols, kinds, relations
//!   ↓
//! base      → primitives (scope paths, text ranges, identifiers)
//! ```
//!
//! Data flows strictly forward: records are ingested into the symbol
//! arena, comments are parsed per symbol, the filter prunes, overloads
//! are grouped, references resolve against the complete set, and the
//! assembler emits the tree. Fatal problems surface as
//! [`ModelError`]; everything else is a [`Warning`] attached to the
//! final [`DocModel`].

// ============================================================================
// MODULES (dependency order: base → model → comment → semantic → resolve →
// tree → pipeline)
// ============================================================================

/// Foundation types: scope paths, identifier checks, text ranges
pub mod base;

/// Symbol record model: raw records and normalized symbols
pub mod model;

/// Comment parser: raw doc text to structured blocks
pub mod comment;

/// Run configuration and option validation
pub mod config;

/// Non-fatal warnings collected across a run
pub mod diagnostics;

/// Fatal error taxonomy
pub mod error;

/// Ingestion, visibility filtering, overload grouping
pub mod semantic;

/// Reference resolution over the complete symbol index
pub mod resolve;

/// Documentation tree assembly
pub mod tree;

/// Stage orchestration
pub mod pipeline;

// Re-export the commonly needed surface
pub use base::ScopePath;
pub use comment::{DocBlock, DocRef, Inline, InlineKind, RefTarget};
pub use config::Config;
pub use diagnostics::{Warning, WarningKind};
pub use error::{ConfigError, ModelError};
pub use model::{
    BaseRecord, BaseRelation, DeclRecord, FriendRecord, FriendRelation, ParamRecord, RecordKind,
    Signature, Symbol, SymbolKind, Visibility,
};
pub use pipeline::{DocModel, build_docs};
pub use resolve::{RefToken, ResolveResult, Resolver, SymbolIndex};
pub use semantic::OverloadSet;
pub use tree::{DocNode, DocTree, NodeKind, SignatureEntry};
