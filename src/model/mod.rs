//! Symbol record model — typed representation of every documentable entity.
//!
//! [`record`] holds the raw declaration records consumed from the
//! extraction collaborator; [`symbol`] holds the normalized [`Symbol`]
//! form the rest of the pipeline operates on.

pub mod record;
pub mod symbol;

pub use record::{BaseRecord, DeclRecord, FriendRecord, ParamRecord, RecordKind};
pub use symbol::{
    BaseRelation, FriendRelation, Param, Signature, Symbol, SymbolId, SymbolKind, Visibility,
};
