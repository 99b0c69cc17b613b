//! Query-time resolution of reference tokens.
//!
//! Lookup follows unqualified-name semantics adapted to documentation
//! scope: the originating scope's own members first, then each
//! enclosing scope outward to the root; qualified tokens descend
//! segment-by-segment, absolute from the root or anchored at whatever
//! the first segment resolves to from the origin. Resolution is
//! deterministic and order-independent: it only ever reads the
//! completed index, in declaration order.

use std::sync::Arc;

use tracing::trace;

use crate::base::{SCOPE_SEPARATOR, is_reference_token, parent_scope};
use crate::comment::{DocBlock, RefTarget};
use crate::diagnostics::Warning;
use crate::model::symbol::{SymbolId, SymbolKind};

use super::index::SymbolIndex;

/// A parsed cross-reference token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RefToken {
    raw: Arc<str>,
    /// True for explicitly rooted tokens (`::name`), which only
    /// resolve absolutely.
    rooted: bool,
    segments: Vec<Arc<str>>,
}

impl RefToken {
    /// Parse a textual token; `None` if it is not a well-formed
    /// reference (well-formedness is identifier segments joined by
    /// `::`, optionally rooted).
    pub fn parse(text: &str) -> Option<Self> {
        if !is_reference_token(text) {
            return None;
        }
        let rooted = text.starts_with(SCOPE_SEPARATOR);
        let body = text.strip_prefix(SCOPE_SEPARATOR).unwrap_or(text);
        Some(Self {
            raw: Arc::from(text),
            rooted,
            segments: body.split(SCOPE_SEPARATOR).map(Arc::from).collect(),
        })
    }

    pub fn raw(&self) -> &Arc<str> {
        &self.raw
    }

    pub fn is_qualified(&self) -> bool {
        self.rooted || self.segments.len() > 1
    }

    pub fn segments(&self) -> &[Arc<str>] {
        &self.segments
    }
}

/// Result of resolving a reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// Resolved to exactly one symbol.
    Found(SymbolId),
    /// Could not resolve the reference.
    NotFound,
}

impl ResolveResult {
    pub fn symbol_id(&self) -> Option<SymbolId> {
        match self {
            ResolveResult::Found(id) => Some(*id),
            ResolveResult::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ResolveResult::Found(_))
    }
}

/// Resolver for one origin scope.
#[derive(Clone, Debug)]
pub struct Resolver<'a> {
    index: &'a SymbolIndex,
    /// Qualified name of the scope lookups start from; `""` is the
    /// root.
    origin: Arc<str>,
}

impl<'a> Resolver<'a> {
    pub fn new(index: &'a SymbolIndex) -> Self {
        Self {
            index,
            origin: Arc::from(""),
        }
    }

    /// Set the origin scope.
    pub fn with_scope(mut self, scope: impl Into<Arc<str>>) -> Self {
        self.origin = scope.into();
        self
    }

    /// Resolve a token against the index.
    pub fn resolve(&self, token: &RefToken) -> ResolveResult {
        if !token.is_qualified() {
            return match self.resolve_unqualified(&token.segments[0]) {
                Some(id) => ResolveResult::Found(id),
                None => ResolveResult::NotFound,
            };
        }

        // Qualified: absolute descent from the root first.
        if let Some(id) = self.descend("", &token.segments) {
            return ResolveResult::Found(id);
        }

        // Then relative: anchor the first segment via unqualified
        // lookup from the origin and descend the rest from there.
        if !token.rooted {
            if let Some(first) = self.resolve_unqualified(&token.segments[0]) {
                let anchor = self.index.symbol(first).qualified_name.clone();
                if let Some(id) = self.descend(&anchor, &token.segments[1..]) {
                    return ResolveResult::Found(id);
                }
            }
        }

        trace!(token = %token.raw, origin = %self.origin, "reference did not resolve");
        ResolveResult::NotFound
    }

    /// Walk from the origin scope outward to the root.
    fn resolve_unqualified(&self, name: &str) -> Option<SymbolId> {
        let mut scope: &str = &self.origin;
        loop {
            if let Some(id) = self.lookup_in_scope(scope, name) {
                trace!(%name, %scope, "resolved via scope walk");
                return Some(id);
            }
            if scope.is_empty() {
                return None;
            }
            scope = parent_scope(scope).unwrap_or("");
        }
    }

    /// Direct members of a scope, plus the enumerators that unscoped
    /// member enums leak into it.
    fn lookup_in_scope(&self, scope: &str, name: &str) -> Option<SymbolId> {
        if let Some(symbol) = self.index.member_named(scope, name) {
            return Some(symbol.seq);
        }
        for &idx in self.index.members_of(scope) {
            let member = self.index.symbol(idx as SymbolId);
            if member.kind != SymbolKind::Enum || member.is_scoped {
                continue;
            }
            if let Some(enumerator) = self.index.member_named(&member.qualified_name, name) {
                return Some(enumerator.seq);
            }
        }
        None
    }

    /// Resolve segments left-to-right starting inside `from`, failing
    /// if any segment does not exist. An enumerator suffix falls out of
    /// the last step: the enum resolves as a scope, then the member is
    /// looked up in its enumerator list.
    fn descend(&self, from: &str, segments: &[Arc<str>]) -> Option<SymbolId> {
        let mut scope: Arc<str> = Arc::from(from);
        let mut current = None;
        for segment in segments {
            let id = self.lookup_in_scope(&scope, segment)?;
            scope = self.index.symbol(id).qualified_name.clone();
            current = Some(id);
        }
        current
    }
}

/// Resolution stage entry point: fill every cross-reference slot in the
/// included symbols' doc blocks.
///
/// `docs` is indexed by registration sequence, parallel to the arena.
/// Returns the unresolved-reference warnings, tagged with the
/// originating symbol's qualified name. Running this twice over the
/// same completed index yields identical targets — already-resolved
/// slots are left untouched.
pub fn resolve_docs(index: &SymbolIndex, docs: &mut [Option<DocBlock>]) -> Vec<Warning> {
    let mut warnings = Vec::new();

    for id in 0..index.len() {
        let seq = id as SymbolId;
        if !index.is_included(seq) {
            continue;
        }
        let Some(block) = docs.get_mut(id).and_then(Option::as_mut) else {
            continue;
        };

        let symbol = index.symbol(seq);
        // A scope symbol's own members are the first lookup ring; other
        // symbols start in their enclosing scope.
        let origin = if symbol.is_scope() {
            symbol.qualified_name.clone()
        } else {
            symbol.scope.clone()
        };
        let qualified_name = symbol.qualified_name.clone();
        let resolver = Resolver::new(index).with_scope(origin);

        block.for_each_ref_mut(|doc_ref| {
            if doc_ref.resolved.is_some() {
                return;
            }
            let outcome = RefToken::parse(&doc_ref.token)
                .map(|token| resolver.resolve(&token))
                .unwrap_or(ResolveResult::NotFound);
            match outcome {
                ResolveResult::Found(target) => {
                    let target_name = index.symbol(target).qualified_name.clone();
                    doc_ref.resolved = Some(if index.is_included(target) {
                        RefTarget::Linked(target_name)
                    } else {
                        RefTarget::Hidden(target_name)
                    });
                }
                ResolveResult::NotFound => {
                    warnings.push(Warning::unresolved_reference(
                        qualified_name.clone(),
                        doc_ref.token.clone(),
                    ));
                }
            }
        });
    }

    warnings
}
