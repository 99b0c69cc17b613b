//! Shared record builders for the semantic-stage tests.

use crate::base::ScopePath;
use crate::model::record::{DeclRecord, ParamRecord, RecordKind};
use crate::model::symbol::Visibility;

pub fn namespace(name: &str) -> DeclRecord {
    DeclRecord::new(RecordKind::Namespace, name, ScopePath::root())
}

pub fn class_in(scope: &str, name: &str) -> DeclRecord {
    DeclRecord::new(RecordKind::Class, name, ScopePath::parse(scope))
}

pub fn enum_in(scope: &str, name: &str) -> DeclRecord {
    DeclRecord::new(RecordKind::Enum, name, ScopePath::parse(scope))
}

pub fn enumerator_in(scope: &str, name: &str) -> DeclRecord {
    DeclRecord::new(RecordKind::Enumerator, name, ScopePath::parse(scope))
}

pub fn variable_in(scope: &str, name: &str, visibility: Visibility) -> DeclRecord {
    DeclRecord::new(RecordKind::Variable, name, ScopePath::parse(scope))
        .with_visibility(visibility)
        .with_var_type("int")
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
