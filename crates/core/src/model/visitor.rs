//! Double dispatch over the object kinds.
//!
//! Traversal code hands a [`PDFVisitor`] to [`PDFObject::accept`]; the value's
//! own kind picks the `visit_*` method that runs.

use crate::error::Result;
use crate::model::objects::{PDFDict, PDFObjRef, PDFObject, PDFStream};

/// One method per object kind.
///
/// References are handed over as-is; a visitor that wants to follow them
/// does its own lookup.
pub trait PDFVisitor {
    type Output;

    fn visit_null(&mut self) -> Result<Self::Output>;
    fn visit_bool(&mut self, value: bool) -> Result<Self::Output>;
    fn visit_int(&mut self, value: i64) -> Result<Self::Output>;
    fn visit_real(&mut self, value: f64) -> Result<Self::Output>;
    fn visit_name(&mut self, name: &str) -> Result<Self::Output>;
    fn visit_string(&mut self, bytes: &[u8]) -> Result<Self::Output>;
    fn visit_array(&mut self, items: &[PDFObject]) -> Result<Self::Output>;
    fn visit_dict(&mut self, dict: &PDFDict) -> Result<Self::Output>;
    fn visit_stream(&mut self, stream: &PDFStream) -> Result<Self::Output>;
    fn visit_ref(&mut self, objref: PDFObjRef) -> Result<Self::Output>;
}

impl PDFObject {
    /// Dispatch to the visitor method matching this object's kind.
    pub fn accept<V: PDFVisitor + ?Sized>(&self, visitor: &mut V) -> Result<V::Output> {
        match self {
            Self::Null => visitor.visit_null(),
            Self::Bool(b) => visitor.visit_bool(*b),
            Self::Int(n) => visitor.visit_int(*n),
            Self::Real(n) => visitor.visit_real(*n),
            Self::Name(name) => visitor.visit_name(name),
            Self::String(s) => visitor.visit_string(s),
            Self::Array(arr) => visitor.visit_array(arr),
            Self::Dict(dict) => visitor.visit_dict(dict),
            Self::Stream(stream) => visitor.visit_stream(stream),
            Self::Ref(objref) => visitor.visit_ref(*objref),
        }
    }
}

/// Collects every reference found inside a value, in document order.
///
/// Nested arrays, dictionaries and stream attributes are walked; references
/// themselves are not followed.
#[derive(Debug, Default)]
pub struct RefCollector {
    refs: Vec<PDFObjRef>,
}

impl RefCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_refs(self) -> Vec<PDFObjRef> {
        self.refs
    }
}

impl PDFVisitor for RefCollector {
    type Output = ();

    fn visit_null(&mut self) -> Result<()> {
        Ok(())
    }

    fn visit_bool(&mut self, _value: bool) -> Result<()> {
        Ok(())
    }

    fn visit_int(&mut self, _value: i64) -> Result<()> {
        Ok(())
    }

    fn visit_real(&mut self, _value: f64) -> Result<()> {
        Ok(())
    }

    fn visit_name(&mut self, _name: &str) -> Result<()> {
        Ok(())
    }

    fn visit_string(&mut self, _bytes: &[u8]) -> Result<()> {
        Ok(())
    }

    fn visit_array(&mut self, items: &[PDFObject]) -> Result<()> {
        for item in items {
            item.accept(self)?;
        }
        Ok(())
    }

    fn visit_dict(&mut self, dict: &PDFDict) -> Result<()> {
        for value in dict.values() {
            value.accept(self)?;
        }
        Ok(())
    }

    fn visit_stream(&mut self, stream: &PDFStream) -> Result<()> {
        self.visit_dict(&stream.attrs)
    }

    fn visit_ref(&mut self, objref: PDFObjRef) -> Result<()> {
        self.refs.push(objref);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_collector_walks_containers() {
        let mut inner = PDFDict::new();
        inner.insert("Parent".into(), PDFObject::Ref(PDFObjRef::new(2, 0)));
        let obj = PDFObject::Array(vec![
            PDFObject::Ref(PDFObjRef::new(1, 0)),
            PDFObject::Int(7),
            PDFObject::Dict(inner),
            PDFObject::Array(vec![PDFObject::Ref(PDFObjRef::new(3, 1))]),
        ]);

        let mut collector = RefCollector::new();
        obj.accept(&mut collector).unwrap();
        assert_eq!(
            collector.into_refs(),
            vec![
                PDFObjRef::new(1, 0),
                PDFObjRef::new(2, 0),
                PDFObjRef::new(3, 1)
            ]
        );
    }
}
