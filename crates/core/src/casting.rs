//! Lenient conversions from raw PDFObjects.
//!
//! Each helper returns `None` when the value has the wrong kind, so callers
//! can fall back to a field default instead of failing on malformed input.

use crate::model::objects::PDFObject;

/// Safely convert a PDFObject to a boolean.
pub const fn safe_bool(obj: &PDFObject) -> Option<bool> {
    match obj {
        PDFObject::Bool(b) => Some(*b),
        _ => None,
    }
}

/// Safely convert a PDFObject to an integer.
///
/// Returns `Some(i64)` if the object is an Int, `None` otherwise.
pub const fn safe_int(obj: &PDFObject) -> Option<i64> {
    match obj {
        PDFObject::Int(n) => Some(*n),
        _ => None,
    }
}

/// Safely get the name of a Name object.
pub fn safe_name(obj: &PDFObject) -> Option<&str> {
    match obj {
        PDFObject::Name(name) => Some(name),
        _ => None,
    }
}

/// Name, or a String holding valid UTF-8, as text.
pub fn safe_name_str(obj: &PDFObject) -> Option<&str> {
    match obj {
        PDFObject::Name(name) => Some(name),
        PDFObject::String(bytes) => std::str::from_utf8(bytes).ok(),
        _ => None,
    }
}

/// Safely get the bytes of a String object.
pub fn safe_string(obj: &PDFObject) -> Option<&[u8]> {
    match obj {
        PDFObject::String(bytes) => Some(bytes),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_bool_rejects_other_kinds() {
        assert_eq!(safe_bool(&PDFObject::Bool(false)), Some(false));
        assert_eq!(safe_bool(&PDFObject::Int(0)), None);
        assert_eq!(safe_bool(&PDFObject::name("true")), None);
    }

    #[test]
    fn test_safe_name_str_accepts_utf8_strings() {
        assert_eq!(safe_name_str(&PDFObject::name("GoToR")), Some("GoToR"));
        assert_eq!(
            safe_name_str(&PDFObject::String(b"GoToR".to_vec())),
            Some("GoToR")
        );
        assert_eq!(safe_name_str(&PDFObject::String(vec![0xff, 0xfe])), None);
        assert_eq!(safe_name(&PDFObject::String(b"GoToR".to_vec())), None);
    }
}
