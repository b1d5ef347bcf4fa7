use std::cell::RefCell;
use std::fs;

use tempfile::TempDir;

use super::*;

/// Reporter that records every message for assertions.
#[derive(Default)]
struct RecordingReporter {
    infos: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
}

impl Reporter for RecordingReporter {
    fn info(&self, msg: &str) {
        self.infos.borrow_mut().push(msg.to_string());
    }

    fn warn(&self, msg: &str) {
        self.warnings.borrow_mut().push(msg.to_string());
    }
}

fn rules_en_fr() -> RuleSet {
    toml::from_str(r#"languages = ["en", "fr"]"#).unwrap()
}

#[test]
fn language_of_plain_file_is_the_default() {
    let rules = rules_en_fr();
    let code = variant_language(Path::new("docs/about.md"), &rules).unwrap();
    assert_eq!(code, "en");
}

#[test]
fn language_of_suffixed_file_is_the_segment() {
    let rules = rules_en_fr();
    let code = variant_language(Path::new("docs/about.fr.md"), &rules).unwrap();
    assert_eq!(code, "fr");
}

#[test]
fn undeclared_language_segment_is_rejected_with_path_and_list() {
    let rules = rules_en_fr();
    let err = variant_language(Path::new("docs/about.zz.md"), &rules).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("about.zz.md"));
    assert!(msg.contains("en, fr"));
}

#[test]
fn root_of_default_language_file_is_itself() {
    let rules = rules_en_fr();
    let root = root_path(Path::new("docs/about.md"), &rules).unwrap();
    assert_eq!(root, Path::new("docs/about.md"));
}

#[test]
fn root_of_variant_matches_default_sibling() {
    let rules = rules_en_fr();
    let root = root_path(Path::new("docs/about.fr.md"), &rules).unwrap();
    assert_eq!(root, Path::new("docs/about.md"));
}

#[test]
fn root_resolution_is_idempotent() {
    let rules = rules_en_fr();
    let root = root_path(Path::new("docs/about.fr.md"), &rules).unwrap();
    assert_eq!(root_path(&root, &rules).unwrap(), root);
}

#[test]
fn build_folder_groups_variants_under_one_root() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("about.md"),
        "---\ntitle: About\n---\nEnglish body.\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("about.fr.md"),
        "---\ntitle: A propos\n---\nCorps francais.\n",
    )
    .unwrap();

    let reporter = RecordingReporter::default();
    let folder = build_folder(temp.path(), rules_en_fr(), &reporter).unwrap();

    assert_eq!(folder.documents.len(), 1);
    let doc = &folder.documents[&temp.path().join("about.md")];
    assert_eq!(doc.variants.len(), 2);
    assert_eq!(doc.variants["en"].body, "English body.");
    assert_eq!(doc.variants["fr"].body, "Corps francais.");
}

#[test]
fn build_folder_variant_without_default_sibling_keeps_default_root() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("only.fr.md"),
        "---\ntitle: Seul\n---\nCorps.\n",
    )
    .unwrap();

    let reporter = RecordingReporter::default();
    let folder = build_folder(temp.path(), rules_en_fr(), &reporter).unwrap();

    // The root identity exists even though only.md does not.
    assert!(folder.documents.contains_key(&temp.path().join("only.md")));
}

#[test]
fn build_folder_skips_and_reports_ignored_files() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("README.md"), "not content").unwrap();
    fs::write(
        temp.path().join("page.md"),
        "---\ntitle: Page\n---\nBody.\n",
    )
    .unwrap();

    let rules: RuleSet =
        toml::from_str("languages = [\"en\"]\nignore = [\"README.md\"]\n").unwrap();
    let reporter = RecordingReporter::default();
    let folder = build_folder(temp.path(), rules, &reporter).unwrap();

    assert_eq!(folder.documents.len(), 1);
    let infos = reporter.infos.borrow();
    assert!(infos.iter().any(|m| m.contains("README.md")));
}

#[test]
fn build_folder_rejects_file_with_bad_language_segment() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("page.zz.md"), "body").unwrap();

    let reporter = RecordingReporter::default();
    let err = build_folder(temp.path(), rules_en_fr(), &reporter).unwrap_err();
    assert!(err.to_string().contains("page.zz.md"));
}

#[test]
fn build_folder_rejects_malformed_front_matter() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("page.md"),
        "---\ntitle: [unclosed\n---\nBody.\n",
    )
    .unwrap();

    let reporter = RecordingReporter::default();
    let err = build_folder(temp.path(), rules_en_fr(), &reporter).unwrap_err();
    assert!(err.to_string().contains("page.md"));
}

#[test]
fn file_without_front_matter_has_empty_header() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("bare.md"), "Just a body.\n").unwrap();

    let reporter = RecordingReporter::default();
    let folder = build_folder(temp.path(), rules_en_fr(), &reporter).unwrap();

    let doc = &folder.documents[&temp.path().join("bare.md")];
    let variant = &doc.variants["en"];
    assert_eq!(variant.raw_header, "");
    assert!(!frontmatter::contains(&variant.header, "title"));
    assert_eq!(variant.body, "Just a body.");
}
