//! Error types for the pdfgraph object model.

use crate::model::objects::{ObjectKind, PDFObjRef};
use thiserror::Error;

/// Primary error type for object graph operations.
#[derive(Error, Debug)]
pub enum PdfError {
    /// A raw value cannot be shaped into the sub-object a field requires.
    #[error("format error: {0}")]
    Format(String),

    /// A later definition of an indirect object has a different kind than the
    /// value already held by its slot.
    #[error("cannot substitute {incoming} into {objref} holding {existing}")]
    IncompatibleSubstitution {
        objref: SlotLabel,
        existing: ObjectKind,
        incoming: ObjectKind,
    },

    #[error("type error: expected {expected}, got {got}")]
    TypeError {
        expected: &'static str,
        got: &'static str,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Identity of the slot named in a substitution error.
///
/// Slots created outside a store may not carry an identity yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotLabel(pub Option<PDFObjRef>);

impl std::fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(objref) => write!(f, "{} {} R", objref.objid, objref.genno),
            None => f.write_str("unnumbered object"),
        }
    }
}

/// Convenience Result type alias for PdfError.
pub type Result<T> = std::result::Result<T, PdfError>;
