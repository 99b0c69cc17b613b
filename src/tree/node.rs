//! Tree node types.

use std::sync::Arc;

use crate::comment::DocBlock;
use crate::model::symbol::{BaseRelation, FriendRelation, Signature, Visibility};

/// Kind of a documentation node.
///
/// Mirrors the symbol kinds, except that function symbols surface as
/// one `OverloadSet` node per name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "snake_case"))]
pub enum NodeKind {
    Namespace,
    Class,
    Struct,
    Enum,
    Enumerator,
    TypeAlias,
    TemplateAlias,
    Variable,
    OverloadSet,
}

/// One signature inside an overload-set node, with its own doc.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct SignatureEntry {
    pub signature: Signature,
    pub visibility: Visibility,
    pub doc: Option<DocBlock>,
    pub extraction_id: Option<Arc<str>>,
}

/// One node of the documentation tree.
///
/// Children appear in original declaration order (registration
/// sequence, never name order); inheritance lists keep declaration
/// order with each base's access specifier attached.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct DocNode {
    pub name: Arc<str>,
    pub qualified_name: Arc<str>,
    pub kind: NodeKind,
    pub visibility: Visibility,
    pub template_params: Vec<Arc<str>>,
    /// Stable extraction id for renderer linking, if provided.
    pub extraction_id: Option<Arc<str>>,
    /// Parsed, resolved documentation; `None` when the comment was
    /// empty, so renderers can skip the description heading entirely.
    pub doc: Option<DocBlock>,
    /// Inheritance list; class kinds only. Always complete regardless
    /// of filter configuration.
    pub bases: Vec<BaseRelation>,
    /// Friend relations that survived the filter.
    pub friends: Vec<FriendRelation>,
    /// Signatures of an overload-set node, in first-seen order.
    pub signatures: Vec<SignatureEntry>,
    /// `enum class` flag; enum nodes only.
    pub is_scoped: bool,
    /// Aliased type text; alias nodes only.
    pub aliased: Option<Arc<str>>,
    /// Type text; variable and enumerator nodes.
    pub var_type: Option<Arc<str>>,
    pub children: Vec<DocNode>,
}

impl DocNode {
    /// Depth-first search by qualified name.
    pub fn find(&self, qualified_name: &str) -> Option<&DocNode> {
        if self.qualified_name.as_ref() == qualified_name {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find(qualified_name))
    }

    /// Total node count of this subtree, self included.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(DocNode::size).sum::<usize>()
    }
}

/// The assembled documentation tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct DocTree {
    /// Root-namespace nodes, in declaration order.
    pub roots: Vec<DocNode>,
}

impl DocTree {
    /// Depth-first search across all roots.
    pub fn find(&self, qualified_name: &str) -> Option<&DocNode> {
        self.roots
            .iter()
            .find_map(|root| root.find(qualified_name))
    }

    /// Total node count.
    pub fn size(&self) -> usize {
        self.roots.iter().map(DocNode::size).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

#[cfg(feature = "interchange")]
impl DocTree {
    /// Serialize the tree for a renderer that consumes JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
