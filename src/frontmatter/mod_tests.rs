use super::*;

const DOC: &str = "---\ntitle: Hello\ntags:\n  - news\n  - guide\nid: 42\ndraft: false\n---\n\nBody text.\n";

#[test]
fn split_separates_header_and_body() {
    let doc = split(DOC);
    assert!(doc.header.contains("title: Hello"));
    assert_eq!(doc.body, "Body text.");
}

#[test]
fn split_without_front_matter_yields_empty_header() {
    let doc = split("Just a body.\n");
    assert_eq!(doc.header, "");
    assert_eq!(doc.body, "Just a body.");
}

#[test]
fn split_unclosed_front_matter_is_all_body() {
    let doc = split("---\ntitle: Hello\n\nno closing line\n");
    assert_eq!(doc.header, "");
    assert!(doc.body.contains("title: Hello"));
}

#[test]
fn split_trims_body_whitespace() {
    let doc = split("---\ntitle: x\n---\n\n\n  Body.  \n\n");
    assert_eq!(doc.body, "Body.");
}

#[test]
fn parse_empty_header_is_null_root() {
    let root = parse("").unwrap();
    assert!(!contains(&root, "title"));
    assert_eq!(get_string(&root, "title"), None);
}

#[test]
fn get_string_reads_scalars() {
    let root = parse(split(DOC).header).unwrap();
    assert_eq!(get_string(&root, "title"), Some("Hello".to_string()));
    assert_eq!(get_string(&root, "id"), Some("42".to_string()));
    assert_eq!(get_string(&root, "draft"), Some("false".to_string()));
}

#[test]
fn get_string_is_none_for_missing_or_list() {
    let root = parse(split(DOC).header).unwrap();
    assert_eq!(get_string(&root, "missing"), None);
    assert_eq!(get_string(&root, "tags"), None);
}

#[test]
fn get_list_reads_sequences() {
    let root = parse(split(DOC).header).unwrap();
    assert_eq!(
        get_list(&root, "tags"),
        Some(vec!["news".to_string(), "guide".to_string()])
    );
}

#[test]
fn get_list_is_none_for_missing_or_scalar() {
    let root = parse(split(DOC).header).unwrap();
    assert_eq!(get_list(&root, "missing"), None);
    assert_eq!(get_list(&root, "title"), None);
}

#[test]
fn contains_reports_presence() {
    let root = parse(split(DOC).header).unwrap();
    assert!(contains(&root, "title"));
    assert!(contains(&root, "tags"));
    assert!(!contains(&root, "slug"));
}

#[test]
fn parse_rejects_malformed_yaml() {
    assert!(parse("title: [unclosed").is_err());
}
