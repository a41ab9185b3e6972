//! File specifications.
//!
//! A file specification is either a plain string naming the file or a
//! dictionary carrying the name in several platform flavours. Locating or
//! opening the file is left to the caller.

use crate::casting::{safe_bool, safe_name, safe_string};
use crate::error::{PdfError, Result};
use crate::model::objects::{PDFDict, PDFObject};
use std::borrow::{Borrow, BorrowMut, Cow};

const TYPE_FILESPEC: &str = "Filespec";

/// A file specification, borrowed from the dictionary it was read from or
/// built from scratch.
#[derive(Debug, Clone, PartialEq)]
pub enum PDFileSpecification<'a> {
    /// A file specification string.
    Simple(Cow<'a, [u8]>),
    /// A file specification dictionary.
    Complex(PDComplexFileSpecification<Cow<'a, PDFDict>>),
}

impl<'a> PDFileSpecification<'a> {
    /// Build a file specification from an already dereferenced raw value.
    ///
    /// Absent and null values give `Ok(None)`. Strings are simple
    /// specifications; dictionaries and streams (through their attribute
    /// dictionary) are complex ones. Every other kind is a format error.
    pub fn create_fs(raw: Option<&'a PDFObject>) -> Result<Option<Self>> {
        let dict = match raw {
            None | Some(PDFObject::Null) => return Ok(None),
            Some(PDFObject::String(bytes)) => {
                return Ok(Some(Self::Simple(Cow::Borrowed(bytes.as_slice()))));
            }
            Some(PDFObject::Dict(dict)) => dict,
            Some(PDFObject::Stream(stream)) => &stream.attrs,
            Some(other) => {
                return Err(PdfError::Format(format!(
                    "file specification must be a string or dictionary, got {}",
                    other.kind()
                )));
            }
        };
        Ok(Some(Self::Complex(PDComplexFileSpecification::wrap(
            Cow::Borrowed(dict),
        ))))
    }

    /// A simple file specification naming `file`.
    pub fn simple(file: impl Into<Vec<u8>>) -> PDFileSpecification<'static> {
        PDFileSpecification::Simple(Cow::Owned(file.into()))
    }

    /// A complex file specification owning `spec`'s dictionary.
    pub fn complex(spec: PDComplexFileSpecification<PDFDict>) -> PDFileSpecification<'static> {
        PDFileSpecification::Complex(PDComplexFileSpecification::wrap(Cow::Owned(
            spec.into_inner(),
        )))
    }

    /// The file name, preferring the most portable entry.
    pub fn file_name(&self) -> Option<&[u8]> {
        match self {
            Self::Simple(file) => Some(&**file),
            Self::Complex(spec) => spec.file_name(),
        }
    }

    /// Raw form of this specification, for storing in a dictionary.
    ///
    /// Owned content moves over; only a borrowed specification is copied.
    pub fn into_object(self) -> PDFObject {
        match self {
            Self::Simple(file) => PDFObject::String(file.into_owned()),
            Self::Complex(spec) => PDFObject::Dict(spec.into_inner().into_owned()),
        }
    }
}

/// File specification dictionary (`/Type /Filespec`).
///
/// Like the action views, the dictionary handle decides access: `&PDFDict`
/// reads, `&mut PDFDict` writes through to the wrapped dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct PDComplexFileSpecification<D> {
    fs: D,
}

impl Default for PDComplexFileSpecification<PDFDict> {
    fn default() -> Self {
        Self::new()
    }
}

impl PDComplexFileSpecification<PDFDict> {
    /// An empty file specification dictionary.
    pub fn new() -> Self {
        let mut fs = PDFDict::new();
        fs.insert("Type".into(), PDFObject::name(TYPE_FILESPEC));
        Self { fs }
    }

    pub fn into_object(self) -> PDFObject {
        PDFObject::Dict(self.fs)
    }
}

impl<D: Borrow<PDFDict>> PDComplexFileSpecification<D> {
    pub const fn wrap(fs: D) -> Self {
        Self { fs }
    }

    pub fn dict(&self) -> &PDFDict {
        self.fs.borrow()
    }

    pub fn into_inner(self) -> D {
        self.fs
    }

    fn string_entry(&self, key: &str) -> Option<&[u8]> {
        self.dict().get(key).and_then(safe_string)
    }

    /// Preferred file name: `/UF`, then `/F`, then the platform entries.
    pub fn file_name(&self) -> Option<&[u8]> {
        ["UF", "F", "Unix", "Mac", "DOS"]
            .into_iter()
            .find_map(|key| self.string_entry(key))
    }

    pub fn file(&self) -> Option<&[u8]> {
        self.string_entry("F")
    }

    pub fn file_unicode(&self) -> Option<&[u8]> {
        self.string_entry("UF")
    }

    pub fn file_unix(&self) -> Option<&[u8]> {
        self.string_entry("Unix")
    }

    pub fn file_mac(&self) -> Option<&[u8]> {
        self.string_entry("Mac")
    }

    pub fn file_dos(&self) -> Option<&[u8]> {
        self.string_entry("DOS")
    }

    pub fn file_description(&self) -> Option<&[u8]> {
        self.string_entry("Desc")
    }

    /// Name of the file system the names are interpreted in (`/FS`).
    pub fn file_system(&self) -> Option<&str> {
        self.dict().get("FS").and_then(safe_name)
    }

    /// Whether the file is volatile (`/V`); defaults to false.
    pub fn is_volatile(&self) -> bool {
        self.dict().get("V").and_then(safe_bool).unwrap_or(false)
    }
}

impl<D: BorrowMut<PDFDict>> PDComplexFileSpecification<D> {
    pub fn dict_mut(&mut self) -> &mut PDFDict {
        self.fs.borrow_mut()
    }

    fn set_string_entry(&mut self, key: &str, value: Option<&[u8]>) {
        let fs = self.dict_mut();
        match value {
            Some(bytes) => {
                fs.insert(key.to_string(), PDFObject::String(bytes.to_vec()));
            }
            None => {
                fs.shift_remove(key);
            }
        }
    }

    pub fn set_file(&mut self, file: Option<&[u8]>) {
        self.set_string_entry("F", file);
    }

    pub fn set_file_unicode(&mut self, file: Option<&[u8]>) {
        self.set_string_entry("UF", file);
    }

    pub fn set_file_description(&mut self, desc: Option<&[u8]>) {
        self.set_string_entry("Desc", desc);
    }

    pub fn set_volatile(&mut self, volatile: bool) {
        self.dict_mut().insert("V".into(), PDFObject::Bool(volatile));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::objects::PDFStream;

    #[test]
    fn test_create_fs_from_string() {
        let raw = PDFObject::String(b"other.pdf".to_vec());
        let fs = PDFileSpecification::create_fs(Some(&raw)).unwrap().unwrap();
        assert_eq!(fs.file_name(), Some(&b"other.pdf"[..]));
        assert_eq!(fs.into_object(), raw);
    }

    #[test]
    fn test_create_fs_absent_or_null() {
        assert!(PDFileSpecification::create_fs(None).unwrap().is_none());
        assert!(
            PDFileSpecification::create_fs(Some(&PDFObject::Null))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_create_fs_rejects_other_kinds() {
        let err = PDFileSpecification::create_fs(Some(&PDFObject::Int(3))).unwrap_err();
        assert!(matches!(err, PdfError::Format(_)));
    }

    #[test]
    fn test_complex_file_name_precedence() {
        let mut dict = PDFDict::new();
        dict.insert("DOS".into(), PDFObject::String(b"OTHER.PDF".to_vec()));
        dict.insert("F".into(), PDFObject::String(b"other.pdf".to_vec()));
        let spec = PDComplexFileSpecification::wrap(&dict);
        assert_eq!(spec.file_name(), Some(&b"other.pdf"[..]));
        assert_eq!(spec.file_dos(), Some(&b"OTHER.PDF"[..]));
        assert!(!spec.is_volatile());
    }

    #[test]
    fn test_create_fs_from_stream_uses_attributes() {
        let mut attrs = PDFDict::new();
        attrs.insert("F".into(), PDFObject::String(b"data.bin".to_vec()));
        let raw = PDFObject::Stream(Box::new(PDFStream::new(attrs, Vec::<u8>::new())));
        let fs = PDFileSpecification::create_fs(Some(&raw)).unwrap().unwrap();
        assert!(matches!(fs, PDFileSpecification::Complex(_)));
        assert_eq!(fs.file_name(), Some(&b"data.bin"[..]));
    }

    #[test]
    fn test_complex_setters_write_through() {
        let mut dict = PDFDict::new();
        let mut spec = PDComplexFileSpecification::wrap(&mut dict);
        spec.set_file_unicode(Some("r\u{e9}sum\u{e9}.pdf".as_bytes()));
        spec.set_volatile(true);
        assert_eq!(spec.file_name(), Some("r\u{e9}sum\u{e9}.pdf".as_bytes()));

        assert_eq!(
            dict.get("UF"),
            Some(&PDFObject::String("r\u{e9}sum\u{e9}.pdf".as_bytes().to_vec()))
        );
        assert_eq!(dict.get("V"), Some(&PDFObject::Bool(true)));

        let mut spec = PDComplexFileSpecification::wrap(&mut dict);
        spec.set_file_unicode(None);
        assert_eq!(spec.file_name(), None);
        assert!(!dict.contains_key("UF"));
    }
}
