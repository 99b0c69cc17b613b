//! Cross-reference outcomes in the assembled tree: linked, hidden,
//! unresolved.

use docsym::{DocNode, RefTarget, Visibility};

use crate::helpers::assertions::*;
use crate::helpers::fixtures::*;

/// First cross-reference in a node's own doc.
fn first_ref(node: &DocNode) -> &docsym::DocRef {
    node.doc
        .as_ref()
        .and_then(|doc| doc.refs().into_iter().next())
        .expect("expected a cross-reference in the doc")
}

#[test]
fn test_reference_to_included_symbol_links() {
    let records = vec![
        namespace("ns"),
        class_in("ns", "target"),
        class_in("ns", "source").with_doc("Works with @ref target instances."),
    ];
    let model = run(records);

    let source = get_node(&model, "ns::source");
    let doc_ref = first_ref(source);
    assert_eq!(
        doc_ref.resolved,
        Some(RefTarget::Linked("ns::target".into()))
    );
    assert!(model.warnings.is_empty());
}

#[test]
fn test_reference_to_hidden_symbol_is_plain_text() {
    // An inline reference to an excluded private symbol still resolves,
    // but as "present and hidden": rendered plain, never a dangling
    // link, and never an unresolved warning.
    let records = vec![
        namespace("ns"),
        class_in("ns", "widget"),
        member_function("ns::widget", "detail", Visibility::Private),
        member_function("ns::widget", "api", Visibility::Public)
            .with_doc("Wraps @ref detail internally."),
    ];
    let model = run(records);

    let api = get_node(&model, "ns::widget")
        .children
        .iter()
        .find(|c| c.name.as_ref() == "api")
        .expect("api node");
    let doc_ref = api.signatures[0]
        .doc
        .as_ref()
        .and_then(|d| d.refs().into_iter().next())
        .expect("ref in signature doc");

    match &doc_ref.resolved {
        Some(RefTarget::Hidden(qname)) => {
            assert_eq!(qname.as_ref(), "ns::widget::detail");
        }
        other => panic!("expected hidden target, got {other:?}"),
    }
    assert_eq!(model.unresolved_references().count(), 0);
}

#[test]
fn test_unresolved_reference_warns_and_stays_plain() {
    let records = vec![
        namespace("ns"),
        class_in("ns", "source").with_doc("See @ref no::such::thing for more."),
    ];
    let model = run(records);

    let doc_ref = first_ref(get_node(&model, "ns::source"));
    assert!(doc_ref.resolved.is_none());
    assert_unresolved(&model, "ns::source", "no::such::thing");
}

#[test]
fn test_enum_round_trip_through_pipeline() {
    // From outside the namespace, `example::enum_t::one` lands on the
    // enumerator.
    let mut records = example_enum_records();
    records.push(namespace("client"));
    records.push(
        class_in("client", "consumer").with_doc("Defaults to @ref example::enum_t::one mode."),
    );
    let model = run(records);

    let doc_ref = first_ref(get_node(&model, "client::consumer"));
    assert_eq!(
        doc_ref.resolved,
        Some(RefTarget::Linked("example::enum_t::one".into()))
    );
}

#[test]
fn test_see_also_references_resolve() {
    let records = vec![
        namespace("ns"),
        class_in("ns", "other"),
        class_in("ns", "source").with_doc("Brief.\n@see other missing_one"),
    ];
    let model = run(records);

    let source = get_node(&model, "ns::source");
    let doc = source.doc.as_ref().expect("doc");
    assert_eq!(doc.see_also.len(), 2);
    assert_eq!(
        doc.see_also[0].resolved,
        Some(RefTarget::Linked("ns::other".into()))
    );
    assert!(doc.see_also[1].resolved.is_none());
    assert_unresolved(&model, "ns::source", "missing_one");
}

#[test]
fn test_forward_reference_resolves_through_pipeline() {
    // The referenced class is declared after the referencing one.
    let records = vec![
        namespace("ns"),
        class_in("ns", "early").with_doc("Pairs with @ref late."),
        class_in("ns", "late"),
    ];
    let model = run(records);

    let doc_ref = first_ref(get_node(&model, "ns::early"));
    assert_eq!(doc_ref.resolved, Some(RefTarget::Linked("ns::late".into())));
}
