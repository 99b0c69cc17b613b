//! Enumerator lookup: suffix resolution through the enum, and the
//! enclosing-scope leak for unscoped enums.

use docsym::model::record::DeclRecord;
use docsym::semantic::{filter_symbols, ingest};
use docsym::{Config, SymbolIndex, SymbolKind};

use crate::helpers::assertions::{assert_not_found, assert_resolves};
use crate::helpers::fixtures::*;

fn index_of(records: Vec<DeclRecord>) -> SymbolIndex {
    let symbols = ingest(records).expect("fixture records should ingest");
    let included = filter_symbols(&symbols, &Config::new());
    SymbolIndex::build(symbols, included)
}

#[test]
fn test_enumerator_suffix_resolves_through_enum() {
    // The round trip from outside the namespace: `example::enum_t::one`
    // must land on the enumerator symbol, not report unresolved.
    let index = index_of(example_enum_records());

    let qname = assert_resolves(&index, "", "example::enum_t::one");
    assert_eq!(qname, "example::enum_t::one");
    let symbol = index
        .lookup_qualified(&qname)
        .expect("resolved name is registered");
    assert_eq!(symbol.kind, SymbolKind::Enumerator);
}

#[test]
fn test_unscoped_enumerator_leaks_into_enclosing_scope() {
    let index = index_of(example_enum_records());

    // C++ semantics: unscoped enumerators are visible in the scope the
    // enum lives in, both unqualified and as `example::one`.
    assert_eq!(
        assert_resolves(&index, "example", "one"),
        "example::enum_t::one"
    );
    assert_eq!(
        assert_resolves(&index, "", "example::one"),
        "example::enum_t::one"
    );
}

#[test]
fn test_scoped_enumerator_requires_enum_qualifier() {
    let index = index_of(vec![
        namespace("example"),
        scoped_enum_in("example", "color"),
        enumerator_in("example::color", "red"),
    ]);

    assert_eq!(
        assert_resolves(&index, "", "example::color::red"),
        "example::color::red"
    );
    // No leak into the enclosing scope for `enum class`.
    assert_not_found(&index, "example", "red");
    assert_not_found(&index, "", "example::red");
}

#[test]
fn test_unknown_enumerator_fails() {
    let index = index_of(example_enum_records());
    assert_not_found(&index, "", "example::enum_t::three");
}
