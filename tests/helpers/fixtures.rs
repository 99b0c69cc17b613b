//! Record builders and canonical fixture sets for integration tests.
#![allow(dead_code)]

use docsym::base::ScopePath;
use docsym::model::record::{DeclRecord, ParamRecord, RecordKind};
use docsym::{Config, DocModel, Visibility, build_docs};

pub fn namespace(name: &str) -> DeclRecord {
    DeclRecord::new(RecordKind::Namespace, name, ScopePath::root())
}

pub fn namespace_in(scope: &str, name: &str) -> DeclRecord {
    DeclRecord::new(RecordKind::Namespace, name, ScopePath::parse(scope))
}

pub fn class_in(scope: &str, name: &str) -> DeclRecord {
    DeclRecord::new(RecordKind::Class, name, ScopePath::parse(scope))
}

pub fn struct_in(scope: &str, name: &str) -> DeclRecord {
    DeclRecord::new(RecordKind::Struct, name, ScopePath::parse(scope))
}

pub fn enum_in(scope: &str, name: &str) -> DeclRecord {
    DeclRecord::new(RecordKind::Enum, name, ScopePath::parse(scope))
}

pub fn scoped_enum_in(scope: &str, name: &str) -> DeclRecord {
    enum_in(scope, name).scoped_enum()
}

pub fn enumerator_in(scope: &str, name: &str) -> DeclRecord {
    DeclRecord::new(RecordKind::Enumerator, name, ScopePath::parse(scope))
}

pub fn alias_in(scope: &str, name: &str, aliased: &str) -> DeclRecord {
    DeclRecord::new(RecordKind::TypeAlias, name, ScopePath::parse(scope)).with_aliased(aliased)
}

pub fn variable_in(scope: &str, name: &str) -> DeclRecord {
    DeclRecord::new(RecordKind::Variable, name, ScopePath::parse(scope)).with_var_type("int")
}

pub fn function_in(scope: &str, name: &str, param_types: &[&str]) -> DeclRecord {
    DeclRecord::new(RecordKind::Function, name, ScopePath::parse(scope))
        .with_return_type("void")
        .with_params(
            param_types
                .iter()
                .enumerate()
                .map(|(i, ty)| ParamRecord::new(format!("arg{i}"), *ty)),
        )
}

pub fn member_function(scope: &str, name: &str, visibility: Visibility) -> DeclRecord {
    function_in(scope, name, &[]).with_visibility(visibility)
}

/// `namespace example { enum enum_t { zero, one, two }; }`, unscoped.
pub fn example_enum_records() -> Vec<DeclRecord> {
    vec![
        namespace("example"),
        enum_in("example", "enum_t").with_doc("An enumeration. With three values."),
        enumerator_in("example::enum_t", "zero"),
        enumerator_in("example::enum_t", "one"),
        enumerator_in("example::enum_t", "two"),
    ]
}

pub fn run(records: Vec<DeclRecord>) -> DocModel {
    run_with(records, &Config::new())
}

pub fn run_with(records: Vec<DeclRecord>, config: &Config) -> DocModel {
    build_docs(records, config).expect("pipeline should succeed on this fixture")
}
