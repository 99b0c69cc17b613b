//! Tree shape: scope nesting, declaration order, overload-set nodes,
//! root filtering.

use docsym::{Config, NodeKind, Visibility};

use crate::helpers::assertions::*;
use crate::helpers::fixtures::*;

#[test]
fn test_tree_mirrors_scope_nesting() {
    let model = run(vec![
        namespace("outer"),
        namespace_in("outer", "inner"),
        class_in("outer::inner", "widget"),
    ]);

    let outer = get_node(&model, "outer");
    assert_eq!(outer.kind, NodeKind::Namespace);
    let inner = &outer.children[0];
    assert_eq!(inner.qualified_name.as_ref(), "outer::inner");
    assert_eq!(inner.children[0].qualified_name.as_ref(), "outer::inner::widget");
}

#[test]
fn test_members_keep_declaration_order_not_name_order() {
    let model = run(vec![
        namespace("ns"),
        class_in("ns", "zebra"),
        class_in("ns", "aardvark"),
        variable_in("ns", "middle"),
    ]);

    let ns = get_node(&model, "ns");
    let names: Vec<&str> = ns.children.iter().map(|c| c.name.as_ref()).collect();
    assert_eq!(names, vec!["zebra", "aardvark", "middle"]);
}

#[test]
fn test_enum_node_owns_enumerator_children() {
    let model = run(example_enum_records());

    let enum_node = get_node(&model, "example::enum_t");
    assert_eq!(enum_node.kind, NodeKind::Enum);
    assert!(!enum_node.is_scoped);
    let names: Vec<&str> = enum_node.children.iter().map(|c| c.name.as_ref()).collect();
    assert_eq!(names, vec!["zero", "one", "two"]);
    assert!(enum_node
        .children
        .iter()
        .all(|c| c.kind == NodeKind::Enumerator));
}

#[test]
fn test_overloads_collapse_to_one_node() {
    let model = run(vec![
        namespace("ns"),
        function_in("ns", "f", &["int"]).with_doc("Takes one."),
        class_in("ns", "between"),
        function_in("ns", "f", &["int", "int"]).with_doc("Takes two."),
    ]);

    let ns = get_node(&model, "ns");
    // One node for f, placed at its first declaration.
    let names: Vec<&str> = ns.children.iter().map(|c| c.name.as_ref()).collect();
    assert_eq!(names, vec!["f", "between"]);

    let f = &ns.children[0];
    assert_eq!(f.kind, NodeKind::OverloadSet);
    assert_eq!(f.signatures.len(), 2);
    assert_eq!(f.signatures[0].signature.param_list(), "(int)");
    assert_eq!(f.signatures[1].signature.param_list(), "(int, int)");
    // Each signature carries its own doc.
    assert!(f.signatures[0].doc.is_some());
    assert!(f.signatures[1].doc.is_some());
    assert!(f.doc.is_none());
}

#[test]
fn test_empty_comment_yields_no_doc() {
    let model = run(vec![namespace("ns"), class_in("ns", "bare")]);
    let node = get_node(&model, "ns::bare");
    assert!(node.doc.is_none());
}

#[test]
fn test_root_filter_restricts_top_level_scopes() {
    let config = Config::new().with_root_filter(["kept"]);
    let model = run_with(
        vec![
            namespace("kept"),
            class_in("kept", "widget"),
            namespace("dropped"),
            class_in("dropped", "other"),
        ],
        &config,
    );

    assert!(model.tree.find("kept").is_some());
    assert_no_node(&model, "dropped");
    assert_no_node(&model, "dropped::other");
}

#[test]
fn test_private_members_pruned_by_default() {
    let model = run(vec![
        namespace("ns"),
        class_in("ns", "widget"),
        member_function("ns::widget", "api", Visibility::Public),
        member_function("ns::widget", "detail", Visibility::Private),
    ]);

    let widget = get_node(&model, "ns::widget");
    let names: Vec<&str> = widget.children.iter().map(|c| c.name.as_ref()).collect();
    assert_eq!(names, vec!["api"]);
}

#[test]
fn test_show_private_reveals_private_members() {
    let config = Config::new().with_show_private(true);
    let model = run_with(
        vec![
            namespace("ns"),
            class_in("ns", "widget"),
            member_function("ns::widget", "detail", Visibility::Private),
        ],
        &config,
    );

    let widget = get_node(&model, "ns::widget");
    assert_eq!(widget.children.len(), 1);
    assert_eq!(widget.children[0].name.as_ref(), "detail");
}

#[test]
fn test_protected_members_follow_show_protected() {
    let records = || {
        vec![
            namespace("ns"),
            class_in("ns", "widget"),
            member_function("ns::widget", "hook", Visibility::Protected),
        ]
    };

    // Included by default.
    let model = run(records());
    assert_eq!(get_node(&model, "ns::widget").children.len(), 1);

    // Excluded when switched off.
    let config = Config::new().with_show_protected(false);
    let model = run_with(records(), &config);
    assert!(get_node(&model, "ns::widget").children.is_empty());
}

#[test]
fn test_template_params_carried_on_nodes() {
    let model = run(vec![
        namespace("ns"),
        class_in("ns", "holder").with_template_params(["T", "N"]),
    ]);

    let holder = get_node(&model, "ns::holder");
    let params: Vec<&str> = holder.template_params.iter().map(|p| p.as_ref()).collect();
    assert_eq!(params, vec!["T", "N"]);
}

#[test]
fn test_extraction_ids_pass_through() {
    let model = run(vec![
        namespace("ns"),
        class_in("ns", "widget").with_id("classns_1_1widget"),
    ]);
    let widget = get_node(&model, "ns::widget");
    assert_eq!(widget.extraction_id.as_deref(), Some("classns_1_1widget"));
}
