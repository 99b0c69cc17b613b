//! Ingestion — raw declaration records to the normalized symbol arena.
//!
//! Records arrive in declaration order, parents before members; the
//! arena index of each symbol doubles as its registration sequence
//! number, which later stages use as the stable declaration-order key.
//!
//! This stage owns all structural validation of the extraction input.
//! A malformed record is fatal and aborts the run with the record's
//! identity; documentation-level problems are not detected here.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::error::ModelError;
use crate::model::record::{DeclRecord, RecordKind};
use crate::model::symbol::{
    BaseRelation, FriendRelation, Param, Signature, Symbol, SymbolKind, Visibility,
};

/// Running state while records are folded into the arena.
#[derive(Default)]
struct Ingestor {
    symbols: Vec<Symbol>,
    /// Qualified name of every registered scope symbol -> its kind.
    scopes: FxHashMap<Arc<str>, SymbolKind>,
    /// Non-function (scope, name, kind) triples seen so far.
    seen: FxHashSet<(Arc<str>, Arc<str>, SymbolKind)>,
}

/// Normalize records into the symbol arena.
///
/// Validation, in order per record: the parent scope must already be
/// registered and be a scope-kind symbol; enumerators must live in an
/// enum; non-function duplicates of a (name, kind) in one scope are
/// rejected; relation targets must not name their own subject.
pub fn ingest(records: Vec<DeclRecord>) -> Result<Vec<Symbol>, ModelError> {
    let mut state = Ingestor::default();
    for record in records {
        state.push(record)?;
    }

    debug!(
        symbols = state.symbols.len(),
        scopes = state.scopes.len(),
        "ingested symbol arena"
    );
    Ok(state.symbols)
}

impl Ingestor {
    fn push(&mut self, record: DeclRecord) -> Result<(), ModelError> {
        let symbol = self.normalize(record)?;
        if symbol.kind.is_scope() {
            self.scopes
                .insert(symbol.qualified_name.clone(), symbol.kind);
        }
        if symbol.kind != SymbolKind::Function {
            self.seen
                .insert((symbol.scope.clone(), symbol.name.clone(), symbol.kind));
        }
        self.symbols.push(symbol);
        Ok(())
    }

    fn normalize(&self, record: DeclRecord) -> Result<Symbol, ModelError> {
        if record.name.is_empty() {
            return Err(ModelError::invalid_record(
                record.scope.qualified(),
                "declaration has no name",
            ));
        }

        let kind = symbol_kind(&record);
        let scope = record.scope.qualified();

        // Parent must exist (root scope excepted) and be able to own members.
        let parent_kind = if scope.is_empty() {
            None
        } else {
            match self.scopes.get(&scope) {
                None => {
                    return Err(ModelError::unknown_scope(
                        record.name.clone(),
                        scope,
                        kind.display(),
                    ));
                }
                Some(parent_kind) => Some(*parent_kind),
            }
        };

        if kind == SymbolKind::Enumerator && parent_kind != Some(SymbolKind::Enum) {
            return Err(ModelError::EnumeratorOutsideEnum {
                name: record.name.clone(),
                scope,
            });
        }

        // Uniqueness per (name, kind, scope); functions may repeat (overloads).
        if kind != SymbolKind::Function
            && self
                .seen
                .contains(&(scope.clone(), record.name.clone(), kind))
        {
            return Err(ModelError::duplicate_symbol(record.name.clone(), scope));
        }

        if kind != SymbolKind::Function && !record.params.is_empty() {
            return Err(ModelError::invalid_record(
                record.name.clone(),
                format!("{kind} carries a parameter list"),
            ));
        }

        let qualified_name = record.scope.member(&record.name);

        let signature = (kind == SymbolKind::Function).then(|| Signature {
            return_type: record.return_type.clone(),
            params: record
                .params
                .iter()
                .map(|p| Param::new(p.name.clone(), p.ty.clone()))
                .collect(),
            template_params: record.template_params.clone(),
        });

        let bases = normalize_bases(&record, &qualified_name)?;
        let friends = normalize_friends(&record, &qualified_name)?;

        // Enumerators inherit their enum's visibility unless the
        // extraction tagged them explicitly.
        let visibility = if kind == SymbolKind::Enumerator
            && record.visibility == Visibility::Unspecified
        {
            self.symbols
                .iter()
                .rev()
                .find(|s| s.kind == SymbolKind::Enum && s.qualified_name == scope)
                .map_or(Visibility::Unspecified, |e| e.visibility)
        } else {
            record.visibility
        };

        Ok(Symbol {
            name: record.name,
            qualified_name,
            scope,
            kind,
            visibility,
            template_params: record.template_params,
            signature,
            bases,
            friends,
            is_scoped: record.is_scoped,
            aliased: record.aliased,
            var_type: record.var_type,
            extraction_id: record.id,
            doc: record.doc,
            seq: self.symbols.len() as u32,
        })
    }
}

/// Map the record tag to the normalized kind. Type aliases with
/// template parameters become template aliases.
fn symbol_kind(record: &DeclRecord) -> SymbolKind {
    match record.kind {
        RecordKind::Namespace => SymbolKind::Namespace,
        RecordKind::Class => SymbolKind::Class,
        RecordKind::Struct => SymbolKind::Struct,
        RecordKind::Enum => SymbolKind::Enum,
        RecordKind::Enumerator => SymbolKind::Enumerator,
        RecordKind::TypeAlias if record.template_params.is_empty() => SymbolKind::TypeAlias,
        RecordKind::TypeAlias => SymbolKind::TemplateAlias,
        RecordKind::Variable => SymbolKind::Variable,
        RecordKind::Function => SymbolKind::Function,
    }
}

fn normalize_bases(
    record: &DeclRecord,
    qualified_name: &Arc<str>,
) -> Result<Vec<BaseRelation>, ModelError> {
    let mut bases = Vec::with_capacity(record.bases.len());
    for base in &record.bases {
        if base.target.is_empty() {
            return Err(ModelError::invalid_record(
                record.name.clone(),
                "base relation has no target",
            ));
        }
        if base.target == *qualified_name || base.target == record.name {
            return Err(ModelError::invalid_record(
                record.name.clone(),
                "base relation targets its own subject",
            ));
        }
        bases.push(BaseRelation {
            target: base.target.clone(),
            resolved_target: None,
            access: base.access,
            is_virtual: base.is_virtual,
        });
    }
    Ok(bases)
}

fn normalize_friends(
    record: &DeclRecord,
    qualified_name: &Arc<str>,
) -> Result<Vec<FriendRelation>, ModelError> {
    let mut friends = Vec::new();
    for friend in &record.friends {
        // Friend classes carry no documentation of their own; drop them.
        if friend.is_class {
            continue;
        }
        if friend.target.is_empty() {
            return Err(ModelError::invalid_record(
                record.name.clone(),
                "friend relation has no target",
            ));
        }
        if friend.target == *qualified_name || friend.target == record.name {
            return Err(ModelError::invalid_record(
                record.name.clone(),
                "friend relation targets its own subject",
            ));
        }
        friends.push(FriendRelation {
            target: friend.target.clone(),
            resolved_target: None,
            declared_access: friend.declared_access,
        });
    }
    Ok(friends)
}
