//! XML dump of object values, in the layout used by dumppdf.

use crate::error::Result;
use crate::model::objects::{PDFDict, PDFObjRef, PDFObject, PDFStream};
use crate::model::visitor::PDFVisitor;
use std::io::Write;

/// Escape special characters for XML output.
fn escape(s: &[u8]) -> String {
    let mut result = String::with_capacity(s.len());
    for &byte in s {
        match byte {
            b'&' => result.push_str("&amp;"),
            b'<' => result.push_str("&lt;"),
            b'>' => result.push_str("&gt;"),
            b'"' => result.push_str("&quot;"),
            b'\'' => result.push_str("&#39;"),
            b'\\' => result.push_str("&#92;"),
            0..=31 | 127..=255 => {
                result.push_str(&format!("&#{byte};"));
            }
            _ => result.push(byte as char),
        }
    }
    result
}

/// Visitor that writes each value it is dispatched on as XML.
///
/// Stream bodies are written when `with_data` is set; otherwise only the
/// attribute dictionary appears.
pub struct XmlDumper<W: Write> {
    out: W,
    with_data: bool,
}

impl<W: Write> XmlDumper<W> {
    pub const fn new(out: W) -> Self {
        Self {
            out,
            with_data: false,
        }
    }

    /// Include raw stream data in `<data>` elements.
    pub const fn with_data(mut self, with_data: bool) -> Self {
        self.with_data = with_data;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PDFVisitor for XmlDumper<W> {
    type Output = ();

    fn visit_null(&mut self) -> Result<()> {
        write!(self.out, "<null />")?;
        Ok(())
    }

    fn visit_bool(&mut self, value: bool) -> Result<()> {
        write!(
            self.out,
            "<boolean>{}</boolean>",
            if value { "true" } else { "false" }
        )?;
        Ok(())
    }

    fn visit_int(&mut self, value: i64) -> Result<()> {
        write!(self.out, "<number>{value}</number>")?;
        Ok(())
    }

    fn visit_real(&mut self, value: f64) -> Result<()> {
        write!(self.out, "<number>{value}</number>")?;
        Ok(())
    }

    fn visit_name(&mut self, name: &str) -> Result<()> {
        write!(self.out, "<literal>{}</literal>", escape(name.as_bytes()))?;
        Ok(())
    }

    fn visit_string(&mut self, bytes: &[u8]) -> Result<()> {
        write!(
            self.out,
            r#"<string size="{}">{}</string>"#,
            bytes.len(),
            escape(bytes)
        )?;
        Ok(())
    }

    fn visit_array(&mut self, items: &[PDFObject]) -> Result<()> {
        writeln!(self.out, r#"<list size="{}">"#, items.len())?;
        for item in items {
            item.accept(self)?;
            writeln!(self.out)?;
        }
        write!(self.out, "</list>")?;
        Ok(())
    }

    fn visit_dict(&mut self, dict: &PDFDict) -> Result<()> {
        writeln!(self.out, r#"<dict size="{}">"#, dict.len())?;
        for (k, v) in dict {
            writeln!(self.out, "<key>{}</key>", escape(k.as_bytes()))?;
            write!(self.out, "<value>")?;
            v.accept(self)?;
            writeln!(self.out, "</value>")?;
        }
        write!(self.out, "</dict>")?;
        Ok(())
    }

    fn visit_stream(&mut self, stream: &PDFStream) -> Result<()> {
        writeln!(self.out, "<stream>")?;
        writeln!(self.out, "<props>")?;
        self.visit_dict(&stream.attrs)?;
        writeln!(self.out)?;
        writeln!(self.out, "</props>")?;
        if self.with_data {
            let data = stream.get_rawdata();
            writeln!(
                self.out,
                r#"<data size="{}">{}</data>"#,
                data.len(),
                escape(data)
            )?;
        }
        write!(self.out, "</stream>")?;
        Ok(())
    }

    fn visit_ref(&mut self, objref: PDFObjRef) -> Result<()> {
        write!(self.out, r#"<ref id="{}" />"#, objref.objid)?;
        Ok(())
    }
}

/// Dump a single value to a string.
pub fn dump_to_string(obj: &PDFObject) -> Result<String> {
    let mut dumper = XmlDumper::new(Vec::new());
    obj.accept(&mut dumper)?;
    Ok(String::from_utf8_lossy(&dumper.into_inner()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_control_and_markup() {
        assert_eq!(escape(b"a<b>&\n"), "a&lt;b&gt;&amp;&#10;");
    }

    #[test]
    fn test_dump_scalars() {
        assert_eq!(dump_to_string(&PDFObject::Null).unwrap(), "<null />");
        assert_eq!(
            dump_to_string(&PDFObject::Bool(false)).unwrap(),
            "<boolean>false</boolean>"
        );
        assert_eq!(
            dump_to_string(&PDFObject::Ref(PDFObjRef::new(12, 0))).unwrap(),
            r#"<ref id="12" />"#
        );
    }
}
