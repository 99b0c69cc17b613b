//! Tree assembly — the final pipeline stage.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::comment::DocBlock;
use crate::config::Config;
use crate::model::symbol::{Symbol, SymbolId, SymbolKind};
use crate::resolve::SymbolIndex;
use crate::semantic::filter::friend_included;
use crate::semantic::overloads::OverloadSet;

use super::node::{DocNode, DocTree, NodeKind, SignatureEntry};

/// Compose the included, grouped, resolved symbols into the output
/// tree.
///
/// `docs` is indexed by registration sequence, parallel to the arena.
/// Within a scope, members appear by registration sequence; a function
/// member appears once, as an overload-set node anchored at its first
/// declaration.
pub fn assemble(
    index: &SymbolIndex,
    docs: &[Option<DocBlock>],
    sets: &[OverloadSet],
    config: &Config,
) -> DocTree {
    // Anchor id (first member) -> its overload set.
    let sets_by_anchor: FxHashMap<SymbolId, &OverloadSet> =
        sets.iter().map(|s| (s.first(), s)).collect();

    let assembler = Assembler {
        index,
        docs,
        sets_by_anchor,
        config,
    };

    let mut roots = Vec::new();
    for symbol in index.roots() {
        if !index.is_included(symbol.seq) || !config.root_allowed(&symbol.name) {
            continue;
        }
        if let Some(node) = assembler.build(symbol) {
            roots.push(node);
        }
    }

    let tree = DocTree { roots };
    debug!(nodes = tree.size(), "assembled documentation tree");
    tree
}

struct Assembler<'a> {
    index: &'a SymbolIndex,
    docs: &'a [Option<DocBlock>],
    sets_by_anchor: FxHashMap<SymbolId, &'a OverloadSet>,
    config: &'a Config,
}

impl Assembler<'_> {
    /// Build the node for one symbol, or `None` for function symbols
    /// that are grouped under another declaration's anchor.
    fn build(&self, symbol: &Symbol) -> Option<DocNode> {
        if symbol.kind == SymbolKind::Function {
            let set = self.sets_by_anchor.get(&symbol.seq)?;
            return Some(self.build_overload_node(symbol, set));
        }

        let mut node = self.plain_node(symbol, node_kind(symbol.kind));
        if symbol.is_scope() {
            node.children = self.build_children(&symbol.qualified_name);
        }
        Some(node)
    }

    fn build_children(&self, scope: &str) -> Vec<DocNode> {
        let mut children = Vec::new();
        for &idx in self.index.members_of(scope) {
            let member = self.index.symbol(idx as SymbolId);
            if !self.index.is_included(member.seq) {
                continue;
            }
            if let Some(node) = self.build(member) {
                children.push(node);
            }
        }
        children
    }

    fn build_overload_node(&self, anchor: &Symbol, set: &OverloadSet) -> DocNode {
        let mut node = self.plain_node(anchor, NodeKind::OverloadSet);
        node.signatures = set
            .members()
            .iter()
            .filter_map(|&id| {
                let member = self.index.symbol(id);
                member.signature.clone().map(|signature| SignatureEntry {
                    signature,
                    visibility: member.visibility,
                    doc: self.doc_for(id),
                    extraction_id: member.extraction_id.clone(),
                })
            })
            .collect();
        // Each signature carries its own doc; the grouped entry has
        // none of its own.
        node.doc = None;
        node
    }

    fn plain_node(&self, symbol: &Symbol, kind: NodeKind) -> DocNode {
        DocNode {
            name: symbol.name.clone(),
            qualified_name: symbol.qualified_name.clone(),
            kind,
            visibility: symbol.visibility,
            template_params: symbol.template_params.clone(),
            extraction_id: symbol.extraction_id.clone(),
            doc: self.doc_for(symbol.seq),
            bases: symbol.bases.clone(),
            friends: symbol
                .friends
                .iter()
                .filter(|f| friend_included(f, self.config))
                .cloned()
                .collect(),
            signatures: Vec::new(),
            is_scoped: symbol.is_scoped,
            aliased: symbol.aliased.clone(),
            var_type: symbol.var_type.clone(),
            children: Vec::new(),
        }
    }

    /// The parsed doc for a symbol; `None` when nothing was parsed, so
    /// empty comments produce no description section at all.
    fn doc_for(&self, id: SymbolId) -> Option<DocBlock> {
        self.docs
            .get(id as usize)
            .and_then(Option::as_ref)
            .filter(|block| !block.is_empty())
            .cloned()
    }
}

fn node_kind(kind: SymbolKind) -> NodeKind {
    match kind {
        SymbolKind::Namespace => NodeKind::Namespace,
        SymbolKind::Class => NodeKind::Class,
        SymbolKind::Struct => NodeKind::Struct,
        SymbolKind::Enum => NodeKind::Enum,
        SymbolKind::Enumerator => NodeKind::Enumerator,
        SymbolKind::TypeAlias => NodeKind::TypeAlias,
        SymbolKind::TemplateAlias => NodeKind::TemplateAlias,
        SymbolKind::Variable => NodeKind::Variable,
        // Function symbols are grouped before assembly; an ungrouped
        // one cannot reach here.
        SymbolKind::Function => NodeKind::OverloadSet,
    }
}
