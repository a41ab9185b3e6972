//! Indirect object slots.
//!
//! A slot is the single place an indirect object's value lives. Everything
//! else in the graph points at it through a [`PDFObjRef`], so a later
//! definition of the same identity is merged into the slot instead of
//! replacing it.

use crate::document::store::ObjectResolver;
use crate::error::{PdfError, Result, SlotLabel};
use crate::model::objects::{PDFDict, PDFObjRef, PDFObject};
use crate::model::visitor::PDFVisitor;
use std::fmt;

/// An indirect object: identity plus the value currently known for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndirectObject {
    objid: Option<u32>,
    genno: Option<u32>,
    referent: Option<PDFObject>,
}

impl IndirectObject {
    /// Create a slot with no identity and no value.
    pub const fn new() -> Self {
        Self {
            objid: None,
            genno: None,
            referent: None,
        }
    }

    /// Create an empty slot for `objid genno R`.
    pub const fn with_id(objid: u32, genno: u32) -> Self {
        Self {
            objid: Some(objid),
            genno: Some(genno),
            referent: None,
        }
    }

    /// Create an unnumbered slot already holding `value`.
    pub const fn from_object(value: PDFObject) -> Self {
        Self {
            objid: None,
            genno: None,
            referent: Some(value),
        }
    }

    pub const fn objid(&self) -> Option<u32> {
        self.objid
    }

    pub const fn set_objid(&mut self, objid: u32) {
        self.objid = Some(objid);
    }

    pub const fn genno(&self) -> Option<u32> {
        self.genno
    }

    pub const fn set_genno(&mut self, genno: u32) {
        self.genno = Some(genno);
    }

    /// Full identity, when both parts are known.
    pub const fn objref(&self) -> Option<PDFObjRef> {
        match (self.objid, self.genno) {
            (Some(objid), Some(genno)) => Some(PDFObjRef::new(objid, genno)),
            _ => None,
        }
    }

    pub const fn is_resolved(&self) -> bool {
        self.referent.is_some()
    }

    /// The value currently held. Never triggers loading.
    pub const fn resolve(&self) -> Option<&PDFObject> {
        self.referent.as_ref()
    }

    /// Held dictionary, for editing in place.
    pub fn referent_dict_mut(&mut self) -> Option<&mut PDFDict> {
        match self.referent.as_mut()? {
            PDFObject::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    /// Raw entry for `key` when the value is dictionary-like.
    ///
    /// The entry is returned as stored, so it may itself be a reference.
    pub fn get_item(&self, key: &str) -> Option<&PDFObject> {
        self.referent.as_ref()?.dict_get(key)
    }

    /// Entry for `key` with any chain of references followed to a concrete
    /// value.
    pub fn get_dictionary_object<'a, R>(
        &'a self,
        key: &str,
        resolver: &'a R,
    ) -> Option<&'a PDFObject>
    where
        R: ObjectResolver + ?Sized,
    {
        self.get_item(key).and_then(|raw| resolver.resolve(raw))
    }

    /// Install a definition for this identity.
    ///
    /// An empty slot adopts `value`. A filled slot merges `value` into the
    /// existing content when both have the same kind; otherwise the slot is
    /// left untouched and [`PdfError::IncompatibleSubstitution`] is returned.
    pub fn substitute(&mut self, value: PDFObject) -> Result<()> {
        let label = SlotLabel(self.objref());
        let Some(current) = self.referent.as_mut() else {
            tracing::debug!(slot = %label, kind = %value.kind(), "adopting definition");
            self.referent = Some(value);
            return Ok(());
        };

        if current.kind() != value.kind() {
            tracing::warn!(
                slot = %label,
                existing = %current.kind(),
                incoming = %value.kind(),
                "rejecting substitution"
            );
            return Err(PdfError::IncompatibleSubstitution {
                objref: label,
                existing: current.kind(),
                incoming: value.kind(),
            });
        }

        tracing::debug!(slot = %label, kind = %value.kind(), "merging redefinition");
        match (current, value) {
            (PDFObject::Dict(old), PDFObject::Dict(new)) => {
                old.clear();
                old.extend(new);
            }
            (PDFObject::Array(old), PDFObject::Array(new)) => {
                old.clear();
                old.extend(new);
            }
            (PDFObject::Stream(old), PDFObject::Stream(new)) => old.replace_with(*new),
            (current, value) => *current = value,
        }
        Ok(())
    }

    /// Dispatch to the held value, or to null when nothing is held yet.
    pub fn accept<V: PDFVisitor + ?Sized>(&self, visitor: &mut V) -> Result<V::Output> {
        match &self.referent {
            Some(obj) => obj.accept(visitor),
            None => PDFObject::Null.accept(visitor),
        }
    }
}

impl fmt::Display for IndirectObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IndirectObject{")?;
        match self.objid {
            Some(objid) => write!(f, "{objid}")?,
            None => f.write_str("unknown")?,
        }
        f.write_str(", ")?;
        match self.genno {
            Some(genno) => write!(f, "{genno}")?,
            None => f.write_str("unknown")?,
        }
        f.write_str("}")
    }
}
