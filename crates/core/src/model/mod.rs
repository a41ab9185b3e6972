//! PDF model types - objects, indirect slots and visitors.
//!
//! This module contains the core PDF data model types:
//! - `objects` - PDF object types (PDFObject, PDFStream, PDFObjRef)
//! - `indirect` - Indirect object slots (IndirectObject)
//! - `visitor` - Double dispatch over object kinds (PDFVisitor)
//! - `dump` - XML dump visitor (XmlDumper)

pub mod dump;
pub mod indirect;
pub mod objects;
pub mod visitor;

// Re-export main types for convenience
pub use dump::XmlDumper;
pub use indirect::IndirectObject;
pub use objects::{ObjectKind, PDFDict, PDFObjRef, PDFObject, PDFStream};
pub use visitor::{PDFVisitor, RefCollector};
