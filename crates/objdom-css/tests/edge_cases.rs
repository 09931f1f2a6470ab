//! Edge case tests for the objdom-css selector engine
//!
//! Malformed input, unusual whitespace, and matching against documents
//! with non-element clutter.

use objdom_css::{SelectorError, SelectorList, parse_selector};
use objdom_dom::Document;

// ============================================================================
// PARSING ODDITIES
// ============================================================================

#[test]
fn test_whitespace_around_list_parts() {
    let list = parse_selector("  div ,\t.item\n, #main  ").unwrap();
    let doc = Document::new();
    // parses to three compounds; matching the <html> element fails all three
    assert!(!list.matches(&doc, doc.document_element()));
}

#[test]
fn test_universal_with_class() {
    let mut doc = Document::new();
    let div = doc.append_element(doc.body(), "div").unwrap();
    doc.set_attr(div, "class", "boxed").unwrap();

    let list = parse_selector("*.boxed").unwrap();
    assert!(list.matches(&doc, div));
    assert!(!list.matches(&doc, doc.body()));
}

#[test]
fn test_unbalanced_brackets() {
    assert!(matches!(
        parse_selector("[href"),
        Err(SelectorError::Invalid { .. })
    ));
    assert!(matches!(
        parse_selector(":nth-child(2"),
        Err(SelectorError::Invalid { .. })
    ));
}

#[test]
fn test_commas_inside_brackets_do_not_split() {
    // one compound, not two
    let list = parse_selector("[title=\"a,b\"]").unwrap();
    let mut doc = Document::new();
    let div = doc.append_element(doc.body(), "div").unwrap();
    doc.set_attr(div, "title", "a,b").unwrap();
    assert!(list.matches(&doc, div));
}

#[test]
fn test_double_colon_reported_as_pseudo_element() {
    assert_eq!(
        parse_selector("div::first-line"),
        Err(SelectorError::UnsupportedPseudoElement {
            name: "first-line".to_string()
        })
    );
}

#[test]
fn test_sibling_combinator_rejected_outside_brackets() {
    assert_eq!(
        parse_selector("a~b"),
        Err(SelectorError::UnsupportedCombinator { combinator: '~' })
    );
    // but '~=' inside an attribute selector is fine
    assert!(parse_selector("[rel~=next]").is_ok());
}

// ============================================================================
// MATCHING AGAINST CLUTTERED DOCUMENTS
// ============================================================================

#[test]
fn test_nth_child_ignores_text_nodes() {
    let mut doc = Document::new();
    let body = doc.body();
    doc.append_text(body, "one").unwrap();
    let first = doc.append_element(body, "p").unwrap();
    doc.append_text(body, "two").unwrap();
    let second = doc.append_element(body, "p").unwrap();

    let odd = SelectorList::parse("p:nth-child(odd)").unwrap();
    assert!(odd.matches(&doc, first));
    assert!(!odd.matches(&doc, second));
}

#[test]
fn test_not_with_attribute() {
    let mut doc = Document::new();
    let body = doc.body();
    let plain = doc.append_element(body, "a").unwrap();
    let with_href = doc.append_element(body, "a").unwrap();
    doc.set_attr(with_href, "href", "#").unwrap();

    let list = SelectorList::parse("a:not([href])").unwrap();
    assert!(list.matches(&doc, plain));
    assert!(!list.matches(&doc, with_href));
}

#[test]
fn test_dash_match_and_includes() {
    let mut doc = Document::new();
    let div = doc.append_element(doc.body(), "div").unwrap();
    doc.set_attr(div, "lang", "en-US").unwrap();
    doc.set_attr(div, "rel", "prev next").unwrap();

    assert!(SelectorList::parse("[lang|=en]").unwrap().matches(&doc, div));
    assert!(!SelectorList::parse("[lang|=e]").unwrap().matches(&doc, div));
    assert!(SelectorList::parse("[rel~=next]").unwrap().matches(&doc, div));
    assert!(!SelectorList::parse("[rel~=nex]").unwrap().matches(&doc, div));
}
