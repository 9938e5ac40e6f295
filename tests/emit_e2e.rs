// tests/emit_e2e.rs
//
// Full pipeline runs against a miniature index page that still covers
// every catalogue name, so the completeness check passes like it would
// on the real document.

use hs_scrape::catalogue::{Catalogue, SetKind};
use hs_scrape::error::Error;
use hs_scrape::params::{GenMode, Params};
use hs_scrape::runner;

const GLOBAL: &str = "<a href=\"#global\">HTML elements</a>";

fn erow(tag: &str, children: &str) -> String {
    format!(
        "<tr><th><code id=\"e-{tag}\"><a href=\"#{tag}\">{tag}</a></code></th>\
         <td>description</td><td>flow</td><td>flow</td><td>{children}</td><td></td></tr>"
    )
}

fn arow(name: &str, scope_cell: &str, value_cell: &str) -> String {
    format!(
        "<tr><th><code id=\"a-{name}\">{name}</code></th>\
         <td>{scope_cell}</td><td>Description</td><td>{value_cell}</td></tr>"
    )
}

/// A document with three well-formed tables; `skip` drops the generated
/// row for one attribute, `extra_base` and `trailing` splice in extra
/// rows / extra tables.
fn doc(skip: &str, extra_base: &str, trailing: &str) -> String {
    let mut elems = String::new();
    for (tag, children) in [
        ("a", "transparent"),
        ("br", "empty"),
        ("script", "script text"),
        ("style", "style text"),
        ("div", "flow"),
    ] {
        elems.push_str(&erow(tag, children));
    }

    let mut base = String::new();
    base.push_str(&arow(
        "dir",
        GLOBAL,
        "<code>ltr</code>; <code>rtl</code>; <code>auto</code>",
    ));
    base.push_str(&arow(
        "href",
        "<code><a href=\"#a\">a</a></code>; <code><a href=\"#area\">area</a></code>",
        "Valid URL potentially surrounded by spaces",
    ));
    let cat = Catalogue::builtin();
    for (kind, names) in cat.sets() {
        for name in *names {
            if *name == "dir" || *name == "href" || *name == skip {
                continue;
            }
            let value = match kind {
                SetKind::Enumerated => "<code>one</code>; <code>two</code>",
                _ => "Descriptive value text",
            };
            base.push_str(&arow(name, GLOBAL, value));
        }
    }
    base.push_str(extra_base);

    let events = format!(
        "{}{}",
        arow("onclick", GLOBAL, "Event handler content attribute"),
        arow("onload", GLOBAL, "Event handler content attribute"),
    );

    format!(
        "<!DOCTYPE html><html><body>\
         <table><caption>List of elements</caption><tbody>{elems}</tbody></table>\
         <table><caption>List of attributes</caption><tbody>{base}</tbody></table>\
         <table><caption>List of event handler content attributes</caption><tbody>{events}</tbody></table>\
         {trailing}</body></html>"
    )
}

fn run(doc_text: &str, mode: GenMode) -> (Result<(usize, usize), Error>, Vec<u8>) {
    let mut params = Params::new();
    params.mode = mode;
    let mut buf: Vec<u8> = Vec::new();
    let res = runner::run(doc_text, &params, &mut buf).map(|s| (s.elements, s.attributes));
    (res, buf)
}

#[test]
fn renders_the_documented_output_shape() {
    let (res, buf) = run(&doc("", "", ""), GenMode::Strict);
    let (elements, attributes) = res.unwrap();
    assert_eq!(elements, 5);
    // 122 catalogue names + onclick + onload
    assert_eq!(attributes, 124);

    let text = String::from_utf8(buf).unwrap();
    assert!(text.starts_with(
        "-- THIS FILE WAS AUTOMATICALLY GENERATED. DO NOT EDIT BY HAND --\n\nlocal M = {}\n"
    ));
    assert!(text.contains(
        "M.Elems = {\n\
         \x20 {'a','Normal'},\n\
         \x20 {'br','Void'},\n\
         \x20 {'script','Raw'},\n\
         \x20 {'style','Raw'},\n\
         \x20 {'div','Normal'},\n\
         }\n"
    ));
    // first two attribute records, with the enum list and the scoped set
    assert!(text.contains(
        "M.Attrs = {\n\
         \x20 {'dir',\n\
         \x20   {'Enum', {'ltr', 'rtl', 'auto'}},\n\
         \x20   true},\n\
         \x20 {'href',\n\
         \x20   {'URL'},\n\
         \x20   {'a', 'area'}},\n"
    ));
    // last attribute record and the footer
    assert!(text.ends_with(
        "\x20 {'onload',\n\
         \x20   {'Raw'},\n\
         \x20   true},\n\
         }\nreturn M\n"
    ));
}

#[test]
fn output_is_idempotent() {
    let doc_text = doc("", "", "");
    let (_, first) = run(&doc_text, GenMode::Strict);
    let (_, second) = run(&doc_text, GenMode::Strict);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn legacy_mode_labels_normal_content_flow() {
    let (res, buf) = run(&doc("", "", ""), GenMode::Legacy);
    res.unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("{'a','Flow'},"));
    assert!(text.contains("{'div','Flow'},"));
    assert!(text.contains("{'br','Void'},"));
    assert!(text.contains("{'script','Raw'},"));
}

#[test]
fn ambiguous_caption_writes_nothing() {
    let doc_text = doc(
        "",
        "",
        "<table><caption>List of attributes</caption><tbody></tbody></table>",
    );
    let (res, buf) = run(&doc_text, GenMode::Strict);
    match res {
        Err(Error::AmbiguousTable { count, .. }) => assert_eq!(count, 2),
        other => panic!("expected AmbiguousTable, got {other:?}"),
    }
    assert!(buf.is_empty());
}

#[test]
fn unknown_attribute_writes_nothing_in_strict_mode() {
    let doc_text = doc("", &arow("bogus", GLOBAL, "Mystery value"), "");
    let (res, buf) = run(&doc_text, GenMode::Strict);
    match res {
        Err(Error::UnknownAttribute(name)) => assert_eq!(name, "bogus"),
        other => panic!("expected UnknownAttribute, got {other:?}"),
    }
    assert!(buf.is_empty());
}

#[test]
fn missing_catalogue_name_writes_nothing() {
    // the abbr row never makes it into the document: the completeness
    // check must catch the orphaned override before anything is rendered
    let (res, buf) = run(&doc("abbr", "", ""), GenMode::Strict);
    match res {
        Err(Error::CatalogueTypo(name)) => assert_eq!(name, "abbr"),
        other => panic!("expected CatalogueTypo, got {other:?}"),
    }
    assert!(buf.is_empty());
}
