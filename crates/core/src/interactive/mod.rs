//! Interactive features - typed views over action and file specification
//! dictionaries.

pub mod action;
pub mod filespec;

pub use action::{
    OpenMode, PDAction, PDActionKind, PDActionRemoteGoTo, RemoteDestination, SUBTYPE_REMOTE_GOTO,
    TYPE_ACTION, create_action,
};
pub use filespec::{PDComplexFileSpecification, PDFileSpecification};
