//! Tests for the object store and graph traversal.

use pdfgraph_core::document::{ObjectResolver, ObjectStore, StoreParams};
use pdfgraph_core::model::dump::{XmlDumper, dump_to_string};
use pdfgraph_core::model::{IndirectObject, PDFDict, PDFObjRef, PDFObject, PDFStream};

fn r(objid: u32) -> PDFObjRef {
    PDFObjRef::new(objid, 0)
}

fn dict(entries: &[(&str, PDFObject)]) -> PDFDict {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// Catalog -> Pages -> [Page, Page], each page pointing back at Pages.
fn page_tree() -> ObjectStore {
    let mut store = ObjectStore::with_params(StoreParams::new(16, 8));
    store
        .define(
            r(1),
            PDFObject::Dict(dict(&[
                ("Type", PDFObject::name("Catalog")),
                ("Pages", PDFObject::Ref(r(2))),
            ])),
        )
        .unwrap();
    store
        .define(
            r(2),
            PDFObject::Dict(dict(&[
                ("Type", PDFObject::name("Pages")),
                (
                    "Kids",
                    PDFObject::Array(vec![PDFObject::Ref(r(3)), PDFObject::Ref(r(4))]),
                ),
                ("Count", PDFObject::Int(2)),
            ])),
        )
        .unwrap();
    for page in [3, 4] {
        store
            .define(
                r(page),
                PDFObject::Dict(dict(&[
                    ("Type", PDFObject::name("Page")),
                    ("Parent", PDFObject::Ref(r(2))),
                    ("Contents", PDFObject::Ref(r(page + 10))),
                ])),
            )
            .unwrap();
    }
    store
        .define(
            r(13),
            PDFObject::Stream(Box::new(PDFStream::new(
                dict(&[("Length", PDFObject::Int(0))]),
                Vec::new(),
            ))),
        )
        .unwrap();
    store
}

#[test]
fn test_define_and_lookup() {
    let store = page_tree();
    assert_eq!(store.len(), 5);
    assert!(!store.is_empty());
    let slot = store.get(r(2)).unwrap();
    assert_eq!(slot.objref(), Some(r(2)));
    assert_eq!(slot.get_item("Count"), Some(&PDFObject::Int(2)));
    assert!(store.get(r(99)).is_none());
    assert!(store.lookup(r(14)).is_none());
}

#[test]
fn test_reachable_handles_cycles_and_dangling_refs() {
    let store = page_tree();
    let reached = store.reachable(&PDFObject::Ref(r(1))).unwrap();
    assert_eq!(reached, vec![r(1), r(2), r(3), r(4), r(13), r(14)]);
}

#[test]
fn test_reachable_from_direct_value() {
    let store = page_tree();
    let root = PDFObject::Array(vec![PDFObject::Ref(r(4)), PDFObject::Int(1)]);
    let reached = store.reachable(&root).unwrap();
    assert_eq!(reached, vec![r(4), r(2), r(14), r(3), r(13)]);
}

#[test]
fn test_slots_iterate_in_creation_order() {
    let mut store = ObjectStore::new();
    store.reserve(r(7));
    store.define(r(2), PDFObject::Int(1)).unwrap();
    let ids: Vec<_> = store.iter().map(IndirectObject::objref).collect();
    assert_eq!(ids, vec![Some(r(7)), Some(r(2))]);
    let id = store.slot_id(r(7)).unwrap();
    assert_eq!(id.index(), 0);
    store.slot_mut(id).substitute(PDFObject::Bool(true)).unwrap();
    assert_eq!(store.lookup(r(7)), Some(&PDFObject::Bool(true)));
}

#[test]
fn test_get_dict_only_for_dictionaries() {
    let store = page_tree();
    assert!(store.get_dict(r(1)).is_some());
    assert!(store.get_dict(r(13)).is_none());
    assert!(store.get_dict(r(99)).is_none());
}

#[test]
fn test_dump_dictionary() {
    let obj = PDFObject::Dict(dict(&[
        ("Type", PDFObject::name("Pages")),
        ("Count", PDFObject::Int(2)),
        ("Kids", PDFObject::Array(vec![PDFObject::Ref(r(3))])),
    ]));
    let expected = concat!(
        "<dict size=\"3\">\n",
        "<key>Type</key>\n",
        "<value><literal>Pages</literal></value>\n",
        "<key>Count</key>\n",
        "<value><number>2</number></value>\n",
        "<key>Kids</key>\n",
        "<value><list size=\"1\">\n",
        "<ref id=\"3\" />\n",
        "</list></value>\n",
        "</dict>",
    );
    assert_eq!(dump_to_string(&obj).unwrap(), expected);
}

#[test]
fn test_dump_slot_through_visitor() {
    let store = page_tree();
    let mut dumper = XmlDumper::new(Vec::new()).with_data(true);
    store.get(r(13)).unwrap().accept(&mut dumper).unwrap();
    let out = String::from_utf8(dumper.into_inner()).unwrap();
    assert!(out.starts_with("<stream>\n<props>\n<dict size=\"1\">"));
    assert!(out.contains("<data size=\"0\"></data>"));
    assert!(out.ends_with("</stream>"));

    let mut dumper = XmlDumper::new(Vec::new());
    IndirectObject::with_id(50, 0).accept(&mut dumper).unwrap();
    assert_eq!(dumper.into_inner(), b"<null />");
}
