//! Action dictionaries.
//!
//! Views here wrap an action dictionary without copying it. The dictionary
//! type parameter decides what a view may do: `&PDFDict` gives read access,
//! `&mut PDFDict` adds the setters, and an owned `PDFDict` is what the
//! from-scratch constructors return.
//!
//! Wrapping never validates. Every getter checks the kind of the stored value
//! and falls back to the field default when it does not fit; only nested
//! sub-objects that cannot be built report an error.

use super::filespec::{PDComplexFileSpecification, PDFileSpecification};
use crate::casting::{safe_bool, safe_int, safe_name, safe_name_str};
use crate::document::store::ObjectResolver;
use crate::error::Result;
use crate::model::objects::{PDFDict, PDFObjRef, PDFObject};
use std::borrow::{Borrow, BorrowMut};

const KEY_TYPE: &str = "Type";
const KEY_SUBTYPE: &str = "S";
const KEY_NEXT: &str = "Next";
const KEY_FILE: &str = "F";
const KEY_DEST: &str = "D";
const KEY_NEW_WINDOW: &str = "NewWindow";

/// Value of `/Type` in action dictionaries.
pub const TYPE_ACTION: &str = "Action";

/// Subtype of remote go-to actions.
pub const SUBTYPE_REMOTE_GOTO: &str = "GoToR";

/// Write `value` under `key`, or remove the key for `None`.
fn set_or_remove(dict: &mut PDFDict, key: &str, value: Option<PDFObject>) {
    match value {
        Some(value) => {
            dict.insert(key.to_string(), value);
        }
        None => {
            dict.shift_remove(key);
        }
    }
}

/// Any action dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct PDAction<D> {
    action: D,
}

impl PDAction<PDFDict> {
    /// A fresh action dictionary of the given subtype.
    pub fn new_with_subtype(subtype: &str) -> Self {
        let mut action = PDFDict::new();
        action.insert(KEY_TYPE.into(), PDFObject::name(TYPE_ACTION));
        action.insert(KEY_SUBTYPE.into(), PDFObject::name(subtype));
        Self { action }
    }
}

impl<D: Borrow<PDFDict>> PDAction<D> {
    pub const fn wrap(action: D) -> Self {
        Self { action }
    }

    pub fn dict(&self) -> &PDFDict {
        self.action.borrow()
    }

    pub fn into_inner(self) -> D {
        self.action
    }

    /// `/Type`; `Action` when present.
    pub fn action_type<'a, R>(&'a self, resolver: &'a R) -> Option<&'a str>
    where
        R: ObjectResolver + ?Sized,
    {
        self.get_dictionary_object(KEY_TYPE, resolver)
            .and_then(safe_name)
    }

    /// `/S`, the kind of action this dictionary describes.
    pub fn sub_type<'a, R>(&'a self, resolver: &'a R) -> Option<&'a str>
    where
        R: ObjectResolver + ?Sized,
    {
        self.get_dictionary_object(KEY_SUBTYPE, resolver)
            .and_then(safe_name_str)
    }

    /// `/Next`: a single action dictionary or an array of them, dereferenced.
    pub fn next<'a, R>(&'a self, resolver: &'a R) -> Option<&'a PDFObject>
    where
        R: ObjectResolver + ?Sized,
    {
        self.get_dictionary_object(KEY_NEXT, resolver)
    }

    /// Entry for `key` with references followed.
    pub fn get_dictionary_object<'a, R>(
        &'a self,
        key: &str,
        resolver: &'a R,
    ) -> Option<&'a PDFObject>
    where
        R: ObjectResolver + ?Sized,
    {
        self.dict().get(key).and_then(|raw| resolver.resolve(raw))
    }
}

impl<D: BorrowMut<PDFDict>> PDAction<D> {
    pub fn dict_mut(&mut self) -> &mut PDFDict {
        self.action.borrow_mut()
    }

    pub fn set_sub_type(&mut self, subtype: &str) {
        self.dict_mut()
            .insert(KEY_SUBTYPE.into(), PDFObject::name(subtype));
    }

    pub fn set_next(&mut self, next: Option<PDFObject>) {
        set_or_remove(self.dict_mut(), KEY_NEXT, next);
    }
}

/// Where a remote go-to action opens its target document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMode {
    /// No explicit choice; the viewer's preference applies.
    #[default]
    UserPreference,
    /// Replace the current document in the same window.
    SameWindow,
    /// Open in a new window.
    NewWindow,
}

/// Destination inside the remote document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemoteDestination<'a> {
    /// Named destination given as a name.
    Name(&'a str),
    /// Named destination given as a string.
    String(&'a [u8]),
    /// Explicit destination: `[page /View params...]`.
    Explicit(&'a [PDFObject]),
}

impl<'a> RemoteDestination<'a> {
    fn from_object(obj: &'a PDFObject) -> Option<Self> {
        match obj {
            PDFObject::Name(name) => Some(Self::Name(name)),
            PDFObject::String(bytes) => Some(Self::String(bytes)),
            PDFObject::Array(items) => Some(Self::Explicit(items)),
            _ => None,
        }
    }

    /// Zero-based page index in the remote document.
    ///
    /// Only explicit destinations carry one, as their first element; a
    /// reference there (valid only for local destinations) gives `None`.
    pub fn page_index(&self) -> Option<i64> {
        match *self {
            Self::Explicit(items) => items.first().and_then(safe_int),
            _ => None,
        }
    }

    /// Fit type of an explicit destination (`XYZ`, `Fit`, `FitH`, ...).
    pub fn view(&self) -> Option<&'a str> {
        match *self {
            Self::Explicit(items) => items.get(1).and_then(safe_name),
            _ => None,
        }
    }

    pub fn to_object(&self) -> PDFObject {
        match *self {
            Self::Name(name) => PDFObject::name(name),
            Self::String(bytes) => PDFObject::String(bytes.to_vec()),
            Self::Explicit(items) => PDFObject::Array(items.to_vec()),
        }
    }
}

/// Remote go-to action (`/S /GoToR`): jump to a destination in another file.
#[derive(Debug, Clone, PartialEq)]
pub struct PDActionRemoteGoTo<D> {
    action: PDAction<D>,
}

impl PDActionRemoteGoTo<PDFDict> {
    /// Value of `/S` for this action.
    pub const SUB_TYPE: &'static str = SUBTYPE_REMOTE_GOTO;

    /// A fresh remote go-to action; every field but the subtype is unset.
    pub fn new() -> Self {
        Self {
            action: PDAction::new_with_subtype(Self::SUB_TYPE),
        }
    }
}

impl Default for PDActionRemoteGoTo<PDFDict> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Borrow<PDFDict>> PDActionRemoteGoTo<D> {
    /// Wrap an existing action dictionary. `/S` is not checked.
    pub const fn wrap(action: D) -> Self {
        Self {
            action: PDAction::wrap(action),
        }
    }

    pub const fn as_action(&self) -> &PDAction<D> {
        &self.action
    }

    pub fn dict(&self) -> &PDFDict {
        self.action.dict()
    }

    pub fn into_inner(self) -> D {
        self.action.into_inner()
    }

    pub fn sub_type<'a, R>(&'a self, resolver: &'a R) -> Option<&'a str>
    where
        R: ObjectResolver + ?Sized,
    {
        self.action.sub_type(resolver)
    }

    /// Same entry as [`sub_type`](Self::sub_type).
    #[deprecated(note = "use sub_type")]
    pub fn s<'a, R>(&'a self, resolver: &'a R) -> Option<&'a str>
    where
        R: ObjectResolver + ?Sized,
    {
        self.sub_type(resolver)
    }

    /// The file in which the destination is located (`/F`).
    ///
    /// A value that is neither a string nor a dictionary is a format error.
    pub fn file<'a, R>(
        &'a self,
        resolver: &'a R,
    ) -> Result<Option<PDFileSpecification<'a>>>
    where
        R: ObjectResolver + ?Sized,
    {
        PDFileSpecification::create_fs(self.action.get_dictionary_object(KEY_FILE, resolver))
    }

    /// The raw destination (`/D`), references followed.
    pub fn d<'a, R>(&'a self, resolver: &'a R) -> Option<&'a PDFObject>
    where
        R: ObjectResolver + ?Sized,
    {
        self.action.get_dictionary_object(KEY_DEST, resolver)
    }

    /// The destination to jump to, if `/D` holds a name, string or array.
    pub fn destination<'a, R>(&'a self, resolver: &'a R) -> Option<RemoteDestination<'a>>
    where
        R: ObjectResolver + ?Sized,
    {
        self.d(resolver).and_then(RemoteDestination::from_object)
    }

    fn new_window_flag<R>(&self, resolver: &R) -> Option<bool>
    where
        R: ObjectResolver + ?Sized,
    {
        self.action
            .get_dictionary_object(KEY_NEW_WINDOW, resolver)
            .and_then(safe_bool)
    }

    /// Whether to open the destination document in a new window.
    ///
    /// Absent or non-boolean entries read as `true`.
    #[deprecated(note = "use open_in_new_window")]
    pub fn should_open_in_new_window<R>(&self, resolver: &R) -> bool
    where
        R: ObjectResolver + ?Sized,
    {
        self.new_window_flag(resolver).unwrap_or(true)
    }

    /// How to open the destination document.
    pub fn open_in_new_window<R>(&self, resolver: &R) -> OpenMode
    where
        R: ObjectResolver + ?Sized,
    {
        match self.new_window_flag(resolver) {
            Some(true) => OpenMode::NewWindow,
            Some(false) => OpenMode::SameWindow,
            None => OpenMode::UserPreference,
        }
    }
}

impl<D: BorrowMut<PDFDict>> PDActionRemoteGoTo<D> {
    pub fn as_action_mut(&mut self) -> &mut PDAction<D> {
        &mut self.action
    }

    pub fn dict_mut(&mut self) -> &mut PDFDict {
        self.action.dict_mut()
    }

    pub fn set_sub_type(&mut self, subtype: &str) {
        self.action.set_sub_type(subtype);
    }

    /// Same entry as [`set_sub_type`](Self::set_sub_type).
    #[deprecated(note = "use set_sub_type")]
    pub fn set_s(&mut self, s: &str) {
        self.set_sub_type(s);
    }

    /// Store `fs` as `/F`. An owned specification is moved in as is; to
    /// share one file specification between actions, define it in the store
    /// and set `/F` to its reference with [`set_file_ref`](Self::set_file_ref).
    pub fn set_file(&mut self, fs: Option<PDFileSpecification<'_>>) {
        set_or_remove(
            self.dict_mut(),
            KEY_FILE,
            fs.map(PDFileSpecification::into_object),
        );
    }

    pub fn set_file_ref(&mut self, objref: PDFObjRef) {
        self.dict_mut()
            .insert(KEY_FILE.into(), PDFObject::Ref(objref));
    }

    /// Writable view of a file specification dictionary held directly in
    /// `/F`. A reference there is edited through the store instead.
    pub fn file_dict_mut(&mut self) -> Option<PDComplexFileSpecification<&mut PDFDict>> {
        match self.dict_mut().get_mut(KEY_FILE) {
            Some(PDFObject::Dict(fs)) => Some(PDComplexFileSpecification::wrap(fs)),
            Some(PDFObject::Stream(stream)) => {
                Some(PDComplexFileSpecification::wrap(&mut stream.attrs))
            }
            _ => None,
        }
    }

    /// Set the raw destination. For an array, the first element must be a
    /// page index in the remote document, the first page being 0.
    pub fn set_d(&mut self, d: Option<PDFObject>) {
        set_or_remove(self.dict_mut(), KEY_DEST, d);
    }

    pub fn set_destination(&mut self, dest: Option<RemoteDestination<'_>>) {
        self.set_d(dest.map(|dest| dest.to_object()));
    }

    #[deprecated(note = "use set_open_in_new_window")]
    pub fn set_open_in_new_window_flag(&mut self, value: bool) {
        self.dict_mut()
            .insert(KEY_NEW_WINDOW.into(), PDFObject::Bool(value));
    }

    /// Set how to open the destination document.
    ///
    /// `None` and [`OpenMode::UserPreference`] remove the entry.
    pub fn set_open_in_new_window(&mut self, mode: Option<OpenMode>) {
        let value = match mode.unwrap_or_default() {
            OpenMode::UserPreference => None,
            OpenMode::SameWindow => Some(PDFObject::Bool(false)),
            OpenMode::NewWindow => Some(PDFObject::Bool(true)),
        };
        set_or_remove(self.dict_mut(), KEY_NEW_WINDOW, value);
    }
}

/// Typed view picked from an action dictionary's `/S`.
#[derive(Debug, Clone, PartialEq)]
pub enum PDActionKind<D> {
    RemoteGoTo(PDActionRemoteGoTo<D>),
    /// Subtypes without a dedicated view, or no subtype at all.
    Other(PDAction<D>),
}

/// Wrap `action` in the view matching its subtype.
pub fn create_action<D, R>(action: D, resolver: &R) -> PDActionKind<D>
where
    D: Borrow<PDFDict>,
    R: ObjectResolver + ?Sized,
{
    let dict: &PDFDict = action.borrow();
    let is_remote = dict
        .get(KEY_SUBTYPE)
        .and_then(|raw| resolver.resolve(raw))
        .and_then(safe_name_str)
        == Some(SUBTYPE_REMOTE_GOTO);
    if is_remote {
        PDActionKind::RemoteGoTo(PDActionRemoteGoTo::wrap(action))
    } else {
        PDActionKind::Other(PDAction::wrap(action))
    }
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;
    use crate::document::store::NoResolver;

    #[test]
    fn test_new_sets_type_and_subtype_only() {
        let action = PDActionRemoteGoTo::new();
        assert_eq!(action.dict().len(), 2);
        assert_eq!(action.as_action().action_type(&NoResolver), Some(TYPE_ACTION));
        assert_eq!(action.sub_type(&NoResolver), Some("GoToR"));
        assert_eq!(action.open_in_new_window(&NoResolver), OpenMode::UserPreference);
        assert!(action.file(&NoResolver).unwrap().is_none());
        assert!(action.destination(&NoResolver).is_none());
    }

    #[test]
    fn test_legacy_and_modern_subtype_share_key() {
        let mut dict = PDFDict::new();
        let mut action = PDActionRemoteGoTo::wrap(&mut dict);
        action.set_s("GoToR");
        assert_eq!(action.sub_type(&NoResolver), Some("GoToR"));
        action.set_sub_type("GoToE");
        assert_eq!(action.s(&NoResolver), Some("GoToE"));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_subtype_accepts_string_encoding() {
        let mut dict = PDFDict::new();
        dict.insert("S".into(), PDFObject::String(b"GoToR".to_vec()));
        assert_eq!(PDAction::wrap(&dict).sub_type(&NoResolver), Some("GoToR"));
        assert!(matches!(
            create_action(&dict, &NoResolver),
            PDActionKind::RemoteGoTo(_)
        ));
    }

    #[test]
    fn test_non_boolean_new_window_reads_as_default() {
        let mut dict = PDFDict::new();
        dict.insert("NewWindow".into(), PDFObject::Int(0));
        let action = PDActionRemoteGoTo::wrap(&dict);
        assert_eq!(action.open_in_new_window(&NoResolver), OpenMode::UserPreference);
        assert!(action.should_open_in_new_window(&NoResolver));
    }

    #[test]
    fn test_file_dict_mut_edits_direct_spec() {
        let mut fs = PDComplexFileSpecification::new();
        fs.set_file(Some(&b"a.pdf"[..]));
        let mut action = PDActionRemoteGoTo::new();
        action.set_file(Some(PDFileSpecification::complex(fs)));

        if let Some(mut fs) = action.file_dict_mut() {
            fs.set_file(Some(&b"b.pdf"[..]));
        }
        let file = action.file(&NoResolver).unwrap().unwrap();
        assert_eq!(file.file_name(), Some(&b"b.pdf"[..]));

        action.set_file(Some(PDFileSpecification::simple("c.pdf")));
        assert!(action.file_dict_mut().is_none());
    }

    #[test]
    fn test_destination_kinds() {
        let mut dict = PDFDict::new();
        dict.insert("D".into(), PDFObject::Int(7));
        assert!(PDActionRemoteGoTo::wrap(&dict).destination(&NoResolver).is_none());

        dict.insert(
            "D".into(),
            PDFObject::Array(vec![PDFObject::Int(2), PDFObject::name("Fit")]),
        );
        let action = PDActionRemoteGoTo::wrap(&dict);
        let dest = action.destination(&NoResolver).unwrap();
        assert_eq!(dest.page_index(), Some(2));
        assert_eq!(dest.view(), Some("Fit"));
    }
}
