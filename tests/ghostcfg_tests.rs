//! End-to-end tests across the document model, option store, and file I/O.

use ghostcfg::config::{ConfigFile, Document};
use ghostcfg::ghostty::themes::parse_theme_text;
use ghostcfg::ghostty::{ProcessNotFound, ReloadGateway};
use ghostcfg::options::{OptionStore, StoreError};
use ghostcfg::preview::PreviewController;
use ghostcfg::schema::{Platform, SchemaRegistry};

struct OkGateway;

impl ReloadGateway for OkGateway {
    fn notify_reload(&self) -> Result<(), ProcessNotFound> {
        Ok(())
    }
}

const MESSY: &str = "\
# Ghostty config, hand-maintained
theme = catppuccin-mocha

font-family   =   JetBrains Mono
font-family = Menlo
palette = 0=#45475a
palette = 1=#f38ba8
background=#1e1e2e
  # indented comment
not a key value line at all
font-size = 12  # bumped for presentations
window-padding-x = 4
";

#[test]
fn roundtrip_is_byte_exact_for_untouched_input() {
    let schema = SchemaRegistry::new(Platform::Linux);
    let doc = Document::parse_with(MESSY, |k| schema.captures_trailing_comment(k));
    assert_eq!(doc.serialize(), MESSY);

    // Also without a trailing newline.
    let trimmed = MESSY.trim_end();
    let doc = Document::parse(trimmed);
    assert_eq!(doc.serialize(), trimmed);
}

#[test]
fn editing_one_option_touches_only_its_line() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config");
    std::fs::write(&path, MESSY).expect("seed");

    let schema = SchemaRegistry::new(Platform::Linux);
    let mut file = ConfigFile::new(path.clone());
    let mut doc = file
        .load(|k| schema.captures_trailing_comment(k))
        .expect("load");
    let mut store = OptionStore::load(&doc, &schema);

    store.set(&schema, "font-size", "14").expect("valid");
    store.commit(&schema, &mut doc);
    file.save(&doc).expect("save");

    let after = std::fs::read_to_string(&path).expect("read");
    let expected = MESSY.replace(
        "font-size = 12  # bumped for presentations",
        "font-size = 14 # bumped for presentations",
    );
    assert_eq!(after, expected);
}

#[test]
fn invalid_input_is_rejected_without_mutation() {
    let schema = SchemaRegistry::new(Platform::Linux);
    let doc = Document::parse("font-size = 12\n");
    let mut store = OptionStore::load(&doc, &schema);

    let err = store.set(&schema, "font-size", "abc").expect_err("invalid");
    match err {
        StoreError::Invalid { name, reason } => {
            assert_eq!(name, "font-size");
            assert_eq!(reason, "not an integer");
        }
        StoreError::UnknownOption(_) => panic!("wrong error variant"),
    }
    assert_eq!(store.raw_of("font-size"), Some("12"));
    assert!(!store.is_dirty("font-size"));
}

#[test]
fn foreign_platform_options_survive_load_and_save() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config");
    let text = "macos-titlebar-style = tabs\nfont-size = 12\n";
    std::fs::write(&path, text).expect("seed");

    let schema = SchemaRegistry::new(Platform::Linux);
    assert!(schema.lookup("macos-titlebar-style").is_none());

    let mut file = ConfigFile::new(path.clone());
    let mut doc = file
        .load(|k| schema.captures_trailing_comment(k))
        .expect("load");
    let mut store = OptionStore::load(&doc, &schema);

    store.set(&schema, "font-size", "15").expect("valid");
    store.commit(&schema, &mut doc);
    file.save(&doc).expect("save");

    let after = std::fs::read_to_string(&path).expect("read");
    assert_eq!(after, "macos-titlebar-style = tabs\nfont-size = 15\n");
}

#[test]
fn repeatable_occurrences_keep_their_positions() {
    let schema = SchemaRegistry::new(Platform::Linux);
    let mut doc = Document::parse(
        "palette = 0=#111111\ntheme = nord\npalette = 1=#222222\n",
    );
    let mut store = OptionStore::load(&doc, &schema);
    assert_eq!(store.raw_of("palette"), Some("0=#111111, 1=#222222"));

    store
        .set(&schema, "palette", "0=#aaaaaa, 1=#bbbbbb")
        .expect("valid");
    store.commit(&schema, &mut doc);
    // Existing occurrences rewritten in place, around the untouched line.
    assert_eq!(
        doc.serialize(),
        "palette = 0=#aaaaaa\ntheme = nord\npalette = 1=#bbbbbb\n"
    );
}

#[test]
fn theme_preview_pipeline_never_leaks_into_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config");
    let text = "theme = nord\nbackground = #2e3440\nfont-size = 12\n";
    std::fs::write(&path, text).expect("seed");

    let schema = SchemaRegistry::new(Platform::Linux);
    let mut file = ConfigFile::new(path.clone());
    let mut doc = file
        .load(|k| schema.captures_trailing_comment(k))
        .expect("load");
    let mut store = OptionStore::load(&doc, &schema);

    let candidate = parse_theme_text(
        "catppuccin-mocha",
        "background = #1e1e2e\nforeground = #cdd6f4\n",
    );
    let mut ctl = PreviewController::default();
    ctl.preview(&mut store, &schema, &OkGateway, &candidate)
        .expect("preview");
    ctl.revert(&mut store, &schema, &OkGateway).expect("revert");

    // A save after a reverted preview rewrites nothing.
    store.commit(&schema, &mut doc);
    file.save(&doc).expect("save");
    assert_eq!(std::fs::read_to_string(&path).expect("read"), text);
}

#[test]
fn confirmed_theme_reaches_the_file_on_save() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config");
    std::fs::write(&path, "theme = nord\nfont-size = 12\n").expect("seed");

    let schema = SchemaRegistry::new(Platform::Linux);
    let mut file = ConfigFile::new(path.clone());
    let mut doc = file
        .load(|k| schema.captures_trailing_comment(k))
        .expect("load");
    let mut store = OptionStore::load(&doc, &schema);

    let candidate = parse_theme_text("zenwritten-dark", "background = #191919\n");
    let mut ctl = PreviewController::default();
    ctl.preview(&mut store, &schema, &OkGateway, &candidate)
        .expect("preview");
    assert!(ctl.confirm(&mut store).is_some());

    store.commit(&schema, &mut doc);
    file.save(&doc).expect("save");
    let after = std::fs::read_to_string(&path).expect("read");
    assert_eq!(
        after,
        "theme = zenwritten-dark\nfont-size = 12\nbackground = #191919\n"
    );
}
