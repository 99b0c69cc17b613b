//! Assertion helpers over pipeline output.
#![allow(dead_code)]

use docsym::{DocModel, DocNode, NodeKind, ResolveResult, Resolver, SymbolIndex, WarningKind};

/// Assert a node exists in the tree and return it.
pub fn get_node<'a>(model: &'a DocModel, qualified_name: &str) -> &'a DocNode {
    model
        .tree
        .find(qualified_name)
        .unwrap_or_else(|| panic!("expected node '{qualified_name}' in tree"))
}

/// Assert a node is absent from the tree.
pub fn assert_no_node(model: &DocModel, qualified_name: &str) {
    assert!(
        model.tree.find(qualified_name).is_none(),
        "expected no node '{qualified_name}' in tree"
    );
}

/// Assert a node exists with the given kind.
pub fn assert_node_kind(model: &DocModel, qualified_name: &str, kind: NodeKind) {
    let node = get_node(model, qualified_name);
    assert_eq!(
        node.kind, kind,
        "expected '{qualified_name}' to be {kind:?}, got {:?}",
        node.kind
    );
}

/// Assert the run flagged this token as unresolved for this symbol.
pub fn assert_unresolved(model: &DocModel, symbol: &str, token: &str) {
    let hit = model.unresolved_references().any(|w| {
        w.symbol.as_ref() == symbol
            && matches!(&w.kind, WarningKind::UnresolvedReference { token: t } if t.as_ref() == token)
    });
    assert!(
        hit,
        "expected unresolved-reference warning for '{token}' on '{symbol}', got {:?}",
        model.warnings
    );
}

/// Resolve a token from a scope and assert it lands on a symbol.
pub fn assert_resolves(index: &SymbolIndex, scope: &str, token: &str) -> String {
    let parsed = docsym::RefToken::parse(token)
        .unwrap_or_else(|| panic!("token '{token}' should be well-formed"));
    match Resolver::new(index).with_scope(scope).resolve(&parsed) {
        ResolveResult::Found(id) => index.symbol(id).qualified_name.to_string(),
        ResolveResult::NotFound => panic!("expected '{token}' to resolve from scope '{scope}'"),
    }
}

/// Resolve a token from a scope and assert it does not resolve.
pub fn assert_not_found(index: &SymbolIndex, scope: &str, token: &str) {
    let Some(parsed) = docsym::RefToken::parse(token) else {
        return; // malformed tokens never resolve
    };
    let result = Resolver::new(index).with_scope(scope).resolve(&parsed);
    assert_eq!(
        result,
        ResolveResult::NotFound,
        "expected '{token}' to be unresolved from scope '{scope}'"
    );
}
