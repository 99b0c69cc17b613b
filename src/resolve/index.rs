//! Workspace-wide symbol index for name resolution.
//!
//! Symbols are stored in a single arena vector and referenced by index
//! from all other maps; the arena position equals the registration
//! sequence number, so iteration order is always declaration order.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::model::symbol::{Symbol, SymbolId};

use super::resolver::{RefToken, Resolver};

/// Index over the complete symbol set, inclusion flags included.
///
/// Built once after filtering and grouping; the only mutation after
/// construction is [`SymbolIndex::resolve_relations`], which fills the
/// `resolved_target` slots on base and friend relations.
#[derive(Clone, Debug, Default)]
pub struct SymbolIndex {
    /// The single source of truth for all symbols.
    symbols: Vec<Symbol>,
    /// Per-symbol inclusion flags from the visibility filter.
    included: Vec<bool>,
    /// Qualified name -> arena id. First registration wins, so an
    /// overload set's shared name maps to its first declaration.
    by_qualified_name: IndexMap<Arc<str>, usize>,
    /// Scope qualified name -> member arena ids, in declaration order.
    by_scope: FxHashMap<Arc<str>, Vec<usize>>,
}

impl SymbolIndex {
    /// Build the index from the arena and the filter's flags.
    pub fn build(symbols: Vec<Symbol>, included: Vec<bool>) -> Self {
        debug_assert_eq!(symbols.len(), included.len());

        let mut by_qualified_name = IndexMap::with_capacity(symbols.len());
        let mut by_scope: FxHashMap<Arc<str>, Vec<usize>> = FxHashMap::default();

        for (idx, symbol) in symbols.iter().enumerate() {
            by_qualified_name
                .entry(symbol.qualified_name.clone())
                .or_insert(idx);
            by_scope
                .entry(symbol.scope.clone())
                .or_default()
                .push(idx);
        }

        debug!(symbols = symbols.len(), "built symbol index");
        Self {
            symbols,
            included,
            by_qualified_name,
            by_scope,
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id as usize]
    }

    /// Whether the filter kept this symbol.
    pub fn is_included(&self, id: SymbolId) -> bool {
        self.included[id as usize]
    }

    /// All symbols in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Exact qualified-name lookup.
    pub fn lookup_qualified(&self, qualified_name: &str) -> Option<&Symbol> {
        self.by_qualified_name
            .get(qualified_name)
            .map(|&idx| &self.symbols[idx])
    }

    /// Arena ids of a scope's direct members, in declaration order.
    pub fn members_of(&self, scope: &str) -> &[usize] {
        self.by_scope.get(scope).map_or(&[], Vec::as_slice)
    }

    /// First direct member of `scope` with the given simple name.
    pub fn member_named(&self, scope: &str, name: &str) -> Option<&Symbol> {
        self.members_of(scope)
            .iter()
            .map(|&idx| &self.symbols[idx])
            .find(|s| s.name.as_ref() == name)
    }

    /// Root-namespace symbols, in declaration order.
    pub fn roots(&self) -> impl Iterator<Item = &Symbol> {
        self.members_of("").iter().map(|&idx| &self.symbols[idx])
    }

    /// Resolve every base and friend relation target against the index,
    /// filling the `resolved_target` slots in place.
    ///
    /// Targets that do not resolve stay textual without a warning: the
    /// extraction layer never claimed they were internal symbols (a
    /// base class may well come from an external library).
    pub fn resolve_relations(&mut self) {
        // Two phases to keep the resolver's shared borrow away from the
        // mutation: collect resolved names first, then write them back.
        let mut updates: Vec<(usize, Vec<Option<Arc<str>>>, Vec<Option<Arc<str>>>)> = Vec::new();

        for (idx, symbol) in self.symbols.iter().enumerate() {
            if symbol.bases.is_empty() && symbol.friends.is_empty() {
                continue;
            }
            let resolver = Resolver::new(self).with_scope(symbol.scope.clone());
            let resolve_one = |target: &Arc<str>| {
                let token = RefToken::parse(target)?;
                resolver
                    .resolve(&token)
                    .symbol_id()
                    .map(|id| self.symbols[id as usize].qualified_name.clone())
            };

            let bases = symbol.bases.iter().map(|b| resolve_one(&b.target)).collect();
            let friends = symbol
                .friends
                .iter()
                .map(|f| resolve_one(&f.target))
                .collect();
            updates.push((idx, bases, friends));
        }

        for (idx, bases, friends) in updates {
            let symbol = &mut self.symbols[idx];
            for (relation, resolved) in symbol.bases.iter_mut().zip(bases) {
                relation.resolved_target = resolved;
            }
            for (relation, resolved) in symbol.friends.iter_mut().zip(friends) {
                relation.resolved_target = resolved;
            }
        }
    }
}
