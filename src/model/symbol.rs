//! Normalized symbols and their relations.
//!
//! A [`Symbol`] is the universal documentable entity: one entry per
//! declaration, owned by exactly one enclosing scope (or a root
//! namespace). Relations carry a `resolved_target` slot that stays
//! `None` until the resolution stage fills it.

use std::fmt;
use std::sync::Arc;

/// Index of a symbol in the arena. Doubles as the registration
/// sequence number, which is the stable sort key for declaration order.
pub type SymbolId = u32;

/// What kind of entity a symbol is.
///
/// Closed set with exhaustive matching in every stage, so adding a kind
/// is a compile-time-checked change everywhere it matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "snake_case"))]
pub enum SymbolKind {
    Namespace,
    Class,
    Struct,
    Enum,
    Enumerator,
    TypeAlias,
    TemplateAlias,
    Variable,
    Function,
}

impl SymbolKind {
    /// True for kinds that own member symbols.
    pub fn is_scope(&self) -> bool {
        matches!(
            self,
            SymbolKind::Namespace | SymbolKind::Class | SymbolKind::Struct | SymbolKind::Enum
        )
    }

    /// Display label.
    pub fn display(&self) -> &'static str {
        match self {
            SymbolKind::Namespace => "namespace",
            SymbolKind::Class => "class",
            SymbolKind::Struct => "struct",
            SymbolKind::Enum => "enum",
            SymbolKind::Enumerator => "enumerator",
            SymbolKind::TypeAlias => "type alias",
            SymbolKind::TemplateAlias => "template alias",
            SymbolKind::Variable => "variable",
            SymbolKind::Function => "function",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// Declared visibility of a symbol, or of the access label under which
/// a relation was written.
///
/// `Unspecified` covers entities without an access specifier (namespace
/// members, free functions) and is always included by the filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "snake_case"))]
pub enum Visibility {
    Public,
    Protected,
    Private,
    #[default]
    Unspecified,
}

impl Visibility {
    pub fn display(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
            Visibility::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// One function parameter: name plus type text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Param {
    pub name: Arc<str>,
    pub ty: Arc<str>,
}

impl Param {
    pub fn new(name: impl Into<Arc<str>>, ty: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A single function signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Signature {
    /// Return type text; empty for constructors and destructors.
    pub return_type: Arc<str>,
    /// Parameters in declaration order.
    pub params: Vec<Param>,
    /// Template parameter names, in order.
    pub template_params: Vec<Arc<str>>,
}

impl Signature {
    /// Identity for duplicate detection: parameter-list text plus
    /// template arity. Textual identity only, no semantic type matching.
    pub fn identity(&self) -> (Vec<&str>, usize) {
        (
            self.params.iter().map(|p| p.ty.as_ref()).collect(),
            self.template_params.len(),
        )
    }

    /// Render the parameter list, e.g. `(int, char const*)`.
    pub fn param_list(&self) -> String {
        let mut out = String::from("(");
        for (i, p) in self.params.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&p.ty);
        }
        out.push(')');
        out
    }
}

/// An inheritance edge on a class-kind symbol.
///
/// Always present in the output regardless of the access specifier; the
/// specifier is annotation data, not a filter input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct BaseRelation {
    /// The base-class name as written in source.
    pub target: Arc<str>,
    /// The resolved qualified name, filled by the resolution stage.
    pub resolved_target: Option<Arc<str>>,
    /// Access specifier on the inheritance (`public Base`, ...).
    pub access: Visibility,
    pub is_virtual: bool,
}

impl BaseRelation {
    pub fn new(target: impl Into<Arc<str>>, access: Visibility) -> Self {
        Self {
            target: target.into(),
            resolved_target: None,
            access,
            is_virtual: false,
        }
    }
}

/// A friend declaration on a class-kind symbol.
///
/// Friendship itself has no visibility; the filter judges the relation
/// by the access label it was declared under, so that field is first
/// class here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct FriendRelation {
    /// The befriended name as written in source.
    pub target: Arc<str>,
    /// The resolved qualified name, filled by the resolution stage.
    pub resolved_target: Option<Arc<str>>,
    /// Access label the friend declaration appeared under.
    pub declared_access: Visibility,
}

impl FriendRelation {
    pub fn new(target: impl Into<Arc<str>>, declared_access: Visibility) -> Self {
        Self {
            target: target.into(),
            resolved_target: None,
            declared_access,
        }
    }
}

/// A normalized documentable entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    /// The simple name.
    pub name: Arc<str>,
    /// The fully qualified name.
    pub qualified_name: Arc<str>,
    /// Qualified name of the owning scope; `""` for root namespaces.
    pub scope: Arc<str>,
    pub kind: SymbolKind,
    pub visibility: Visibility,
    /// Template parameter names, possibly empty.
    pub template_params: Vec<Arc<str>>,
    /// Function signature; present iff `kind` is `Function`.
    pub signature: Option<Signature>,
    /// Base relations; class kinds only.
    pub bases: Vec<BaseRelation>,
    /// Friend relations; class kinds only.
    pub friends: Vec<FriendRelation>,
    /// Whether an enum is scoped (`enum class`). Unscoped enums leak
    /// their enumerators into the enclosing scope for lookup.
    pub is_scoped: bool,
    /// Aliased type text for alias kinds.
    pub aliased: Option<Arc<str>>,
    /// Type text for variables and enumerators.
    pub var_type: Option<Arc<str>>,
    /// Stable id assigned by the extraction layer, passed through for
    /// renderer linking.
    pub extraction_id: Option<Arc<str>>,
    /// Raw doc-comment text, parsed by the comment stage.
    pub doc: Arc<str>,
    /// Registration sequence number; equals the arena index.
    pub seq: SymbolId,
}

impl Symbol {
    /// True if this symbol may own members.
    pub fn is_scope(&self) -> bool {
        self.kind.is_scope()
    }

    /// True for root-namespace symbols.
    pub fn is_root(&self) -> bool {
        self.scope.is_empty()
    }
}
