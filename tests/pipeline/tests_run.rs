//! Whole-run behavior: config validation, fatal structural errors,
//! and the warning side-channels.

use docsym::{Config, ConfigError, ModelError, Visibility, WarningKind, build_docs};

use crate::helpers::fixtures::*;

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn test_config_from_pairs() {
    let config = Config::from_pairs([
        ("show_private", "true"),
        ("show_protected", "false"),
        ("root_filter", "example, detail"),
    ])
    .expect("valid options");

    assert!(config.show_private);
    assert!(!config.show_protected());
    // show_friends defaults from show_private.
    assert!(config.show_friends());
    assert!(config.root_allowed("example"));
    assert!(!config.root_allowed("other"));
}

#[test]
fn test_unknown_option_is_fatal() {
    let err = Config::from_pairs([("show_everything", "true")]).unwrap_err();
    assert_eq!(err, ConfigError::UnknownOption("show_everything".into()));
}

#[test]
fn test_invalid_boolean_is_fatal() {
    let err = Config::from_pairs([("show_private", "yes")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBool { .. }));
}

// =============================================================================
// FATAL STRUCTURAL ERRORS
// =============================================================================

#[test]
fn test_unknown_scope_aborts_run() {
    let err = build_docs(vec![class_in("ghost", "widget")], &Config::new()).unwrap_err();
    let ModelError::UnknownScope { name, scope, .. } = err else {
        panic!("expected UnknownScope");
    };
    assert_eq!(name.as_ref(), "widget");
    assert_eq!(scope.as_ref(), "ghost");
}

#[test]
fn test_duplicate_symbol_aborts_run() {
    let records = vec![
        namespace("ns"),
        variable_in("ns", "x"),
        variable_in("ns", "x"),
    ];
    let err = build_docs(records, &Config::new()).unwrap_err();
    assert!(matches!(err, ModelError::DuplicateSymbol { .. }));
}

// =============================================================================
// WARNING SIDE-CHANNELS
// =============================================================================

#[test]
fn test_undocumented_parameter_warning_is_tagged() {
    let records = vec![
        namespace("ns"),
        function_in("ns", "f", &["int"]).with_doc("Documented, but not its parameter."),
    ];
    let model = run(records);

    let warning = model
        .undocumented_parameters()
        .next()
        .expect("expected an undocumented-parameter warning");
    assert_eq!(warning.symbol.as_ref(), "ns::f");
    assert!(matches!(
        &warning.kind,
        WarningKind::UndocumentedParameter { parameter, .. } if parameter.as_ref() == "arg0"
    ));
}

#[test]
fn test_fully_undocumented_function_produces_no_param_warnings() {
    let records = vec![namespace("ns"), function_in("ns", "f", &["int"])];
    let model = run(records);
    assert_eq!(model.undocumented_parameters().count(), 0);
}

#[test]
fn test_duplicate_signature_warning_survives_to_output() {
    let records = vec![
        namespace("ns"),
        function_in("ns", "f", &["int"]),
        function_in("ns", "f", &["int"]),
    ];
    let model = run(records);

    assert!(model
        .warnings
        .iter()
        .any(|w| matches!(&w.kind, WarningKind::DuplicateSignature { .. })));
}

#[test]
fn test_warnings_from_pruned_symbols_are_pruned() {
    // The private function's missing parameter doc would warn, but the
    // symbol never reaches the output, so neither does its warning.
    let records = vec![
        namespace("ns"),
        class_in("ns", "widget"),
        function_in("ns::widget", "detail", &["int"])
            .with_visibility(Visibility::Private)
            .with_doc("Hidden and half-documented."),
    ];
    let model = run(records);
    assert_eq!(model.undocumented_parameters().count(), 0);
}

#[test]
fn test_clean_run_has_no_warnings() {
    let records = vec![
        namespace("ns"),
        function_in("ns", "f", &["int"]).with_doc("Brief.\n@param arg0 the input"),
    ];
    let model = run(records);
    assert!(model.warnings.is_empty(), "got {:?}", model.warnings);
}
