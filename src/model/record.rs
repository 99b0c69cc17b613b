//! Raw declaration records — the input boundary.
//!
//! The extraction collaborator (a Doxygen-style symbol dump reader)
//! produces one [`DeclRecord`] per declaration, in declaration order.
//! The ingest stage normalizes these into [`Symbol`](super::Symbol)s and
//! is the only consumer; nothing downstream sees records.
//!
//! Declaration shape is trusted: the record model validates
//! documentation semantics and structure, never language grammar.

use std::sync::Arc;

use crate::base::ScopePath;

use super::symbol::Visibility;

/// Kind tag on a raw declaration record.
///
/// Template aliases are not a separate tag: a `TypeAlias` record with a
/// non-empty template-parameter list normalizes to a template alias.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Namespace,
    Class,
    Struct,
    Enum,
    Enumerator,
    TypeAlias,
    Variable,
    Function,
}

/// One function parameter as extracted: name plus type text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamRecord {
    pub name: Arc<str>,
    pub ty: Arc<str>,
}

impl ParamRecord {
    pub fn new(name: impl Into<Arc<str>>, ty: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// One base-class entry on a class-kind record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseRecord {
    pub target: Arc<str>,
    pub access: Visibility,
    pub is_virtual: bool,
}

impl BaseRecord {
    pub fn new(target: impl Into<Arc<str>>, access: Visibility) -> Self {
        Self {
            target: target.into(),
            access,
            is_virtual: false,
        }
    }

    pub fn virtual_base(target: impl Into<Arc<str>>, access: Visibility) -> Self {
        Self {
            target: target.into(),
            access,
            is_virtual: true,
        }
    }
}

/// One friend entry on a class-kind record.
///
/// `declared_access` is the access label the friend declaration was
/// written under. Friend *classes* (`is_class`) are dropped at ingest;
/// only friend functions become documented relations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FriendRecord {
    pub target: Arc<str>,
    pub declared_access: Visibility,
    pub is_class: bool,
}

impl FriendRecord {
    pub fn new(target: impl Into<Arc<str>>, declared_access: Visibility) -> Self {
        Self {
            target: target.into(),
            declared_access,
            is_class: false,
        }
    }

    pub fn class(target: impl Into<Arc<str>>, declared_access: Visibility) -> Self {
        Self {
            target: target.into(),
            declared_access,
            is_class: true,
        }
    }
}

/// A raw declaration record from the extraction layer.
///
/// Constructed with [`DeclRecord::new`] plus `with_*` builders; only the
/// fields relevant to the record's kind need to be set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclRecord {
    pub kind: RecordKind,
    pub name: Arc<str>,
    pub scope: ScopePath,
    pub visibility: Visibility,
    /// Stable extraction id (e.g. a Doxygen refid), if the extraction
    /// layer provides one.
    pub id: Option<Arc<str>>,
    pub template_params: Vec<Arc<str>>,
    /// Return type text; functions only. Empty for constructors.
    pub return_type: Arc<str>,
    /// Parameters; functions only.
    pub params: Vec<ParamRecord>,
    /// Base-class list; class kinds only.
    pub bases: Vec<BaseRecord>,
    /// Friend list; class kinds only.
    pub friends: Vec<FriendRecord>,
    /// `enum class` flag; enums only.
    pub is_scoped: bool,
    /// Aliased type text; aliases only.
    pub aliased: Option<Arc<str>>,
    /// Type text; variables and enumerators.
    pub var_type: Option<Arc<str>>,
    /// Raw doc-comment text.
    pub doc: Arc<str>,
}

impl DeclRecord {
    pub fn new(kind: RecordKind, name: impl Into<Arc<str>>, scope: ScopePath) -> Self {
        Self {
            kind,
            name: name.into(),
            scope,
            visibility: Visibility::Unspecified,
            id: None,
            template_params: Vec::new(),
            return_type: Arc::from(""),
            params: Vec::new(),
            bases: Vec::new(),
            friends: Vec::new(),
            is_scoped: false,
            aliased: None,
            var_type: None,
            doc: Arc::from(""),
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_id(mut self, id: impl Into<Arc<str>>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_doc(mut self, doc: impl Into<Arc<str>>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn with_template_params(
        mut self,
        params: impl IntoIterator<Item = impl Into<Arc<str>>>,
    ) -> Self {
        self.template_params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_return_type(mut self, ty: impl Into<Arc<str>>) -> Self {
        self.return_type = ty.into();
        self
    }

    pub fn with_params(mut self, params: impl IntoIterator<Item = ParamRecord>) -> Self {
        self.params = params.into_iter().collect();
        self
    }

    pub fn with_bases(mut self, bases: impl IntoIterator<Item = BaseRecord>) -> Self {
        self.bases = bases.into_iter().collect();
        self
    }

    pub fn with_friends(mut self, friends: impl IntoIterator<Item = FriendRecord>) -> Self {
        self.friends = friends.into_iter().collect();
        self
    }

    pub fn scoped_enum(mut self) -> Self {
        self.is_scoped = true;
        self
    }

    pub fn with_aliased(mut self, ty: impl Into<Arc<str>>) -> Self {
        self.aliased = Some(ty.into());
        self
    }

    pub fn with_var_type(mut self, ty: impl Into<Arc<str>>) -> Self {
        self.var_type = Some(ty.into());
        self
    }

    /// Qualified name this record will register under.
    pub fn qualified_name(&self) -> Arc<str> {
        self.scope.member(&self.name)
    }
}
