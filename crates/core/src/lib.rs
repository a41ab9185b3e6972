//! pdfgraph - the indirect object model of a PDF document graph.
//!
//! Objects are stored once per identity in an [`ObjectStore`](document::ObjectStore)
//! and referenced everywhere else by [`PDFObjRef`](model::PDFObjRef). Typed views in
//! [`interactive`] read and write action dictionaries without copying them.

pub mod casting;
pub mod document;
pub mod error;
pub mod interactive;
pub mod model;

pub use error::{PdfError, Result};
