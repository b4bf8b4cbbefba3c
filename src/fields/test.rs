use crate::fields::{CopyError, FieldId, HeaderField, HeaderSection, Iter};

const fn is_send_sync<T: Send + Sync>() {}
const _: () = {
    is_send_sync::<HeaderSection>();
    is_send_sync::<HeaderField>();
    is_send_sync::<FieldId>();
    is_send_sync::<Iter<'static>>();
    is_send_sync::<CopyError>();
};

#[test]
fn add_then_enumerate_in_order() {
    let mut section = HeaderSection::new();
    section.add(HeaderField::from_static("Host", "example.com"));
    section.add(HeaderField::from_static("Accept", "*/*"));

    let fields: Vec<_> = section.iter().map(|(_, f)| (f.name(), f.value())).collect();
    assert_eq!(fields, [("Host", "example.com"), ("Accept", "*/*")]);
    assert_eq!(section.len(), 2);
}

#[test]
fn remove_by_identity() {
    let mut section = HeaderSection::new();
    let host = section.add(HeaderField::from_static("Host", "example.com"));
    section.add(HeaderField::from_static("Accept", "*/*"));

    assert!(section.remove(host));
    assert_eq!(section.len(), 1);

    let names: Vec<_> = section.iter().map(|(_, f)| f.name()).collect();
    assert_eq!(names, ["Accept"]);

    // same id again
    assert!(!section.remove(host));
    assert_eq!(section.len(), 1);
}

#[test]
fn duplicate_fields_are_distinct_entries() {
    let mut section = HeaderSection::new();
    let first = section.add(HeaderField::from_static("Set-Cookie", "a=1"));
    let second = section.add(HeaderField::from_static("Set-Cookie", "a=1"));

    assert_ne!(first, second);
    assert!(section.remove(first));
    assert!(section.contains(second));
    assert!(!section.contains(first));
    assert_eq!(section.len(), 1);
}

#[test]
fn lookup_is_case_insensitive() {
    let mut section = HeaderSection::new();
    let id = section.add(HeaderField::from_static("Content-Type", "text/html"));

    assert!(section.contains_name("CONTENT-TYPE"));
    assert!(section.contains_name("content-type"));
    assert!(!section.contains_name("content-length"));

    let (found, field) = section.find("content-type").unwrap();
    assert_eq!(found, id);
    assert_eq!(field.value(), "text/html");
    assert!(section.find("x-missing").is_none());
}

#[test]
fn find_returns_first_in_insertion_order() {
    let mut section = HeaderSection::new();
    let first = section.add(HeaderField::from_static("Via", "proxy-a"));
    section.add(HeaderField::from_static("VIA", "proxy-b"));

    let (id, field) = section.find("via").unwrap();
    assert_eq!(id, first);
    assert_eq!(field.value(), "proxy-a");
}

#[test]
fn order_survives_scattered_removals() {
    let mut section = HeaderSection::new();
    let ids: Vec<_> = ["A", "B", "C", "D", "E"]
        .into_iter()
        .map(|name| section.add(HeaderField::new(name, "x")))
        .collect();

    assert!(section.remove(ids[0]));
    assert!(section.remove(ids[2]));
    assert!(section.remove(ids[4]));

    let names: Vec<_> = section.iter().map(|(_, f)| f.name()).collect();
    assert_eq!(names, ["B", "D"]);

    // additions go back to the tail
    section.add(HeaderField::from_static("F", "x"));
    let names: Vec<_> = section.iter().map(|(_, f)| f.name()).collect();
    assert_eq!(names, ["B", "D", "F"]);
}

#[test]
fn len_tracks_every_mutation() {
    let mut section = HeaderSection::new();
    assert_eq!(section.len(), 0);
    assert!(section.is_empty());

    let a = section.add(HeaderField::from_static("A", "1"));
    section.add(HeaderField::from_static("B", "2"));
    assert_eq!(section.len(), 2);
    assert!(!section.is_empty());

    assert!(section.remove(a));
    assert_eq!(section.len(), 1);

    section.clear();
    assert_eq!(section.len(), 0);
    assert!(section.is_empty());
}

#[test]
fn clear_resets_to_fresh() {
    let mut section = HeaderSection::new();
    let stale = section.add(HeaderField::from_static("Host", "a"));
    section.add(HeaderField::from_static("Accept", "b"));
    section.add(HeaderField::from_static("Date", "c"));

    section.clear();
    assert_eq!(section.len(), 0);
    assert!(section.iter().next().is_none());
    assert!(!section.contains(stale));
    assert!(!section.remove(stale));

    let fresh = section.add(HeaderField::from_static("Host", "a"));
    assert_ne!(stale, fresh);

    let names: Vec<_> = section.iter().map(|(_, f)| f.name()).collect();
    assert_eq!(names, ["Host"]);
}

#[test]
fn get_reads_through_identity() {
    let mut section = HeaderSection::new();
    let id = section.add(HeaderField::from_static("Server", "fieldline"));

    assert_eq!(section.get(id).map(HeaderField::value), Some("fieldline"));
    assert!(section.remove(id));
    assert!(section.get(id).is_none());
}

#[test]
fn clone_preserves_entries_and_ids() {
    let mut section = HeaderSection::new();
    let id = section.add(HeaderField::from_static("Host", "a"));

    let mut copy = section.clone();
    assert!(copy.contains(id));

    assert!(copy.remove(id));
    assert!(section.contains(id));

    let later = copy.add(HeaderField::from_static("B", "2"));
    assert_ne!(later, id);
}

#[test]
fn copy_to_matches_enumeration() {
    let mut section = HeaderSection::new();
    section.add(HeaderField::from_static("Host", "example.com"));
    section.add(HeaderField::from_static("Accept", "*/*"));

    let mut dst = vec![HeaderField::default(); 2];
    section.copy_to(&mut dst, 0).unwrap();

    for ((_, field), copy) in section.iter().zip(&dst) {
        assert_eq!(field, copy);
    }
}

#[test]
fn copy_to_offset_and_failures() {
    let mut section = HeaderSection::new();
    section.add(HeaderField::from_static("A", "1"));
    section.add(HeaderField::from_static("B", "2"));

    let mut dst = vec![HeaderField::default(); 4];
    section.copy_to(&mut dst, 2).unwrap();
    assert_eq!(dst[2].name(), "A");
    assert_eq!(dst[3].name(), "B");
    assert_eq!(dst[0], HeaderField::default());

    assert_eq!(section.copy_to(&mut dst, 3), Err(CopyError::Capacity));
    assert_eq!(section.copy_to(&mut dst, 4), Err(CopyError::OutOfRange));

    // failed calls write nothing
    assert_eq!(dst[3].name(), "B");
}

#[test]
fn iterator_snapshot_restarts() {
    let mut section = HeaderSection::new();
    section.add(HeaderField::from_static("A", "1"));
    section.add(HeaderField::from_static("B", "2"));

    let mut iter = section.iter();
    assert!(iter.advance());
    iter.reset();
    assert!(iter.current().is_none());
    assert!(iter.advance());
    assert_eq!(iter.current().map(|(_, f)| f.name()), Some("A"));
}

#[test]
fn into_iterator_for_ref() {
    let mut section = HeaderSection::new();
    section.add(HeaderField::from_static("A", "1"));

    let mut names = Vec::new();
    for (_, field) in &section {
        names.push(field.name());
    }
    assert_eq!(names, ["A"]);
}

#[test]
fn fields_render_as_wire_lines() {
    let mut section = HeaderSection::new();
    section.add(HeaderField::from_static("Host", "example.com"));
    section.add(HeaderField::from_static("Accept", "*/*"));

    let mut wire = String::new();
    for (_, field) in &section {
        wire.push_str(&field.to_string());
        wire.push_str("\r\n");
    }
    assert_eq!(wire, "Host: example.com\r\nAccept: */*\r\n");
}
