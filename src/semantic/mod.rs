//! Semantic stages — ingestion, visibility filtering, overload grouping.
//!
//! These stages run between comment parsing and reference resolution:
//! [`ingest`] normalizes raw records into the symbol arena and performs
//! the structural validation of the input, [`filter`] decides per-symbol
//! inclusion from the configuration, and [`overloads`] collapses
//! same-named function declarations into grouped entries.

pub mod filter;
pub mod ingest;
pub mod overloads;

pub use filter::{filter_symbols, friend_included, visible};
pub use ingest::ingest;
pub use overloads::{OverloadSet, group_overloads};
