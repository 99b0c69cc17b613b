//! Visibility & configuration filter.
//!
//! [`visible`] is a pure function of the symbol's kind, its visibility,
//! and the configuration; calling it twice with identical inputs always
//! yields identical output. Excluded symbols are pruned from the tree
//! assembler's input entirely, but stay registered in the resolver's
//! index so references to them resolve as "present but hidden".

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::config::Config;
use crate::model::symbol::{FriendRelation, Symbol, SymbolKind, Visibility};

/// Decide whether a symbol is included in the output tree.
///
/// Rules, in order: namespaces are always included; public and
/// unspecified visibility are always included; protected requires
/// `show_protected`; private requires `show_private`.
pub fn visible(symbol: &Symbol, config: &Config) -> bool {
    match (symbol.kind, symbol.visibility) {
        (SymbolKind::Namespace, _) => true,
        (_, Visibility::Public | Visibility::Unspecified) => true,
        (_, Visibility::Protected) => config.show_protected(),
        (_, Visibility::Private) => config.show_private,
    }
}

/// Decide whether a friend relation is kept.
///
/// Controlled solely by `show_friends`, judged against nothing at all —
/// friendship has no visibility of its own, and the declaring access
/// label is already captured on the relation as annotation data. Base
/// relations have no counterpart to this: they are structural facts and
/// always kept.
pub fn friend_included(_relation: &FriendRelation, config: &Config) -> bool {
    config.show_friends()
}

/// Compute the per-symbol inclusion flags for the whole arena, indexed
/// by registration sequence.
///
/// A symbol is included only if it passes [`visible`] and every
/// enclosing scope does too: members of a hidden class are hidden with
/// it, whatever their own access.
pub fn filter_symbols(symbols: &[Symbol], config: &Config) -> Vec<bool> {
    let mut included = Vec::with_capacity(symbols.len());
    // Parents always precede members in the arena, so a scope's flag is
    // already computed when a member of it is reached.
    let mut scope_included: FxHashMap<Arc<str>, bool> = FxHashMap::default();
    for symbol in symbols {
        let parent_ok = symbol.scope.is_empty()
            || scope_included.get(&symbol.scope).copied().unwrap_or(false);
        let inc = parent_ok && visible(symbol, config);
        if symbol.is_scope() {
            scope_included.insert(symbol.qualified_name.clone(), inc);
        }
        included.push(inc);
    }

    debug!(
        total = symbols.len(),
        included = included.iter().filter(|&&i| i).count(),
        "applied visibility filter"
    );
    included
}
