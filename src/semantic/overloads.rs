//! Overload grouping — same-named functions in one scope become one
//! documented entry.
//!
//! Grouping runs over the *included* function symbols only, after the
//! filter, and preserves original declaration order of signatures. Two
//! declarations are the same overload only if their parameter-list
//! text and template arity are both identical; exact duplicates merge
//! keeping the first declaration's doc, with a non-fatal warning.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::diagnostics::Warning;
use crate::error::ModelError;
use crate::model::symbol::{Symbol, SymbolId, SymbolKind};

/// The grouped documentation unit for one function name in one scope.
///
/// Immutable once grouping has run. Always holds at least one member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverloadSet {
    pub name: Arc<str>,
    /// Owning scope's qualified name.
    pub scope: Arc<str>,
    /// Shared qualified name of the grouped entry.
    pub qualified_name: Arc<str>,
    /// Arena ids of the member signatures, in first-seen declaration
    /// order, duplicates removed.
    members: Vec<SymbolId>,
}

impl OverloadSet {
    /// Build a set from the function symbols sharing one (scope, name).
    ///
    /// Constructing from zero declarations is an error, never an empty
    /// result.
    pub fn new(
        name: Arc<str>,
        scope: Arc<str>,
        qualified_name: Arc<str>,
        members: Vec<SymbolId>,
    ) -> Result<Self, ModelError> {
        if members.is_empty() {
            return Err(ModelError::EmptyOverloadSet { name });
        }
        Ok(Self {
            name,
            scope,
            qualified_name,
            members,
        })
    }

    pub fn members(&self) -> &[SymbolId] {
        &self.members
    }

    /// Arena id of the first declaration; used as the set's anchor for
    /// declaration-order placement and reference targets.
    pub fn first(&self) -> SymbolId {
        self.members[0]
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        // Invariant: never empty after construction.
        self.members.is_empty()
    }
}

/// Group all included function symbols into overload sets.
///
/// Returns the sets in first-seen order. Duplicate signatures produce
/// a [`Warning`] and keep the first declaration.
pub fn group_overloads(
    symbols: &[Symbol],
    included: &[bool],
    warnings: &mut Vec<Warning>,
) -> Result<Vec<OverloadSet>, ModelError> {
    // (scope, name) -> member ids, insertion-ordered so the sets come
    // out in declaration order of their first member.
    let mut groups: IndexMap<(Arc<str>, Arc<str>), Vec<SymbolId>> = IndexMap::new();

    for symbol in symbols {
        if symbol.kind != SymbolKind::Function || !included[symbol.seq as usize] {
            continue;
        }
        groups
            .entry((symbol.scope.clone(), symbol.name.clone()))
            .or_default()
            .push(symbol.seq);
    }

    let mut sets = Vec::with_capacity(groups.len());
    for ((scope, name), candidates) in groups {
        let mut members: Vec<SymbolId> = Vec::with_capacity(candidates.len());
        for id in candidates {
            let candidate = &symbols[id as usize];
            let duplicate = members.iter().any(|&kept| {
                signatures_match(&symbols[kept as usize], candidate)
            });
            if duplicate {
                let shown = candidate
                    .signature
                    .as_ref()
                    .map_or_else(|| "()".to_string(), |s| s.param_list());
                warnings.push(Warning::duplicate_signature(
                    candidate.qualified_name.clone(),
                    shown.into(),
                ));
                continue;
            }
            members.push(id);
        }

        let Some(&first) = members.first() else {
            return Err(ModelError::EmptyOverloadSet { name });
        };
        let qualified_name = symbols[first as usize].qualified_name.clone();
        sets.push(OverloadSet::new(name, scope, qualified_name, members)?);
    }

    debug!(sets = sets.len(), "grouped overload sets");
    Ok(sets)
}

/// Textual identity: parameter-list text and template arity. No
/// semantic type matching.
fn signatures_match(a: &Symbol, b: &Symbol) -> bool {
    match (&a.signature, &b.signature) {
        (Some(a), Some(b)) => a.identity() == b.identity(),
        (None, None) => true,
        _ => false,
    }
}
