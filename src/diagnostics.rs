//! Semantic warnings — non-fatal findings collected across the run.
//!
//! Warnings never stop the pipeline; they are gathered and attached to
//! the final [`DocModel`](crate::pipeline::DocModel) so one run
//! produces one complete report. Fatal conditions live in
//! [`error`](crate::error) instead.

use std::fmt;
use std::sync::Arc;

/// What a warning is about.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "snake_case"))]
pub enum WarningKind {
    /// A reference token that matched no symbol.
    UnresolvedReference { token: Arc<str> },
    /// A declared parameter with no doc entry.
    UndocumentedParameter {
        parameter: Arc<str>,
        is_template: bool,
    },
    /// A doc entry naming a parameter absent from the declaration.
    UnknownParameter { parameter: Arc<str> },
    /// Two function declarations with textually identical signatures.
    DuplicateSignature { signature: Arc<str> },
}

/// One non-fatal finding, tagged with the originating symbol's
/// qualified name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Warning {
    pub symbol: Arc<str>,
    pub kind: WarningKind,
}

impl Warning {
    pub fn unresolved_reference(symbol: Arc<str>, token: Arc<str>) -> Self {
        Self {
            symbol,
            kind: WarningKind::UnresolvedReference { token },
        }
    }

    pub fn undocumented_parameter(symbol: Arc<str>, parameter: Arc<str>, is_template: bool) -> Self {
        Self {
            symbol,
            kind: WarningKind::UndocumentedParameter {
                parameter,
                is_template,
            },
        }
    }

    pub fn unknown_parameter(symbol: Arc<str>, parameter: Arc<str>) -> Self {
        Self {
            symbol,
            kind: WarningKind::UnknownParameter { parameter },
        }
    }

    pub fn duplicate_signature(symbol: Arc<str>, signature: Arc<str>) -> Self {
        Self {
            symbol,
            kind: WarningKind::DuplicateSignature { signature },
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WarningKind::UnresolvedReference { token } => {
                write!(f, "{}: unresolved reference '{token}'", self.symbol)
            }
            WarningKind::UndocumentedParameter {
                parameter,
                is_template,
            } => {
                let what = if *is_template {
                    "template parameter"
                } else {
                    "parameter"
                };
                write!(f, "{}: undocumented {what} '{parameter}'", self.symbol)
            }
            WarningKind::UnknownParameter { parameter } => {
                write!(
                    f,
                    "{}: documented parameter '{parameter}' is not declared",
                    self.symbol
                )
            }
            WarningKind::DuplicateSignature { signature } => {
                write!(f, "{}: duplicate signature {signature}", self.symbol)
            }
        }
    }
}
