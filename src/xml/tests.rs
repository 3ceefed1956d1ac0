//! Tests for the tree model and parser.

use super::*;

#[test]
fn parse_minimal_project() {
    let doc = parse_str("<Project></Project>").unwrap();
    assert_eq!(doc.root.name(), "Project");
    assert!(!doc.root.has_children());
    assert_eq!(doc.root.text(), "");
}

#[test]
fn parse_self_closing_root() {
    let doc = parse_str("<Project/>").unwrap();
    assert_eq!(doc.root.name(), "Project");
    assert!(!doc.root.has_children());
}

#[test]
fn parse_children_in_document_order() {
    let doc = parse_str(
        r#"<Project>
            <PropertyGroup/>
            <ItemGroup/>
            <Target Name="Build"/>
        </Project>"#,
    )
    .unwrap();

    let names: Vec<&str> = doc.root.children().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["PropertyGroup", "ItemGroup", "Target"]);
}

#[test]
fn parse_attributes() {
    let doc = parse_str(r#"<Project><Import Project="common.props"/></Project>"#).unwrap();
    let import = doc.root.children().first().unwrap();
    assert_eq!(import.attr("Project"), Some("common.props"));
    assert_eq!(import.attr("Condition"), None);
}

#[test]
fn parse_unescapes_attribute_values_and_text() {
    let doc = parse_str(r#"<Project><Message Text="a &amp; b">x &lt; y</Message></Project>"#)
        .unwrap();
    let message = doc.root.children().first().unwrap();
    assert_eq!(message.attr("Text"), Some("a & b"));
    assert_eq!(message.text(), "x < y");
}

#[test]
fn parse_strips_namespace_prefixes() {
    let doc = parse_str(
        r#"<msb:Project xmlns:msb="http://example.com/build">
            <msb:Target msb:Name="Build"/>
        </msb:Project>"#,
    )
    .unwrap();

    assert_eq!(doc.root.name(), "Project");
    let target = doc.root.children().first().unwrap();
    assert_eq!(target.name(), "Target");
    assert_eq!(target.attr("Name"), Some("Build"));
}

#[test]
fn parse_default_namespace_uses_local_names() {
    let doc = parse_str(
        r#"<Project xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
            <Target Name="Build"/>
        </Project>"#,
    )
    .unwrap();

    assert_eq!(doc.root.name(), "Project");
    assert_eq!(doc.root.children().first().unwrap().name(), "Target");
}

#[test]
fn parse_whitespace_only_text_is_dropped() {
    let doc = parse_str("<Project><Foo>   </Foo></Project>").unwrap();
    let foo = doc.root.children().first().unwrap();
    assert_eq!(foo.text(), "");
}

#[test]
fn parse_cdata_contributes_text() {
    let doc = parse_str("<Project><Foo><![CDATA[<raw>]]></Foo></Project>").unwrap();
    let foo = doc.root.children().first().unwrap();
    assert_eq!(foo.text(), "<raw>");
}

#[test]
fn parse_ignores_declaration_and_comments() {
    let doc = parse_str(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!-- build file -->
<Project><!-- inner --><Target Name="Build"/></Project>"#,
    )
    .unwrap();

    assert_eq!(doc.root.name(), "Project");
    assert_eq!(doc.root.children().len(), 1);
}

#[test]
fn parse_mismatched_end_tag_is_syntax_error() {
    let err = parse_str("<Project><Target></Project>").unwrap_err();
    assert!(err.line >= 1);
    assert!(err.column >= 1);
    assert!(!err.message.is_empty());
}

#[test]
fn parse_unclosed_element_is_syntax_error() {
    let err = parse_str("<Project><Target Name=\"Build\">").unwrap_err();
    assert!(err.message.contains("not closed"));
}

#[test]
fn parse_empty_input_is_syntax_error() {
    let err = parse_str("").unwrap_err();
    assert!(err.message.contains("no root element"));
}

#[test]
fn parse_second_root_is_syntax_error() {
    let err = parse_str("<Project/><Project/>").unwrap_err();
    assert!(err.message.contains("after the document root"));
}

#[test]
fn syntax_error_position_is_one_based() {
    // Error on line 2: the end tag does not match.
    let err = parse_str("<Project>\n</Wrong>").unwrap_err();
    assert_eq!(err.line, 2);
    assert!(err.column >= 1);
}

#[test]
fn element_builder_roundtrip() {
    let el = Element::new("Target")
        .with_attr("Name", "Build")
        .with_child(Element::new("Message").with_attr("Text", "hi"))
        .with_text("tail");

    assert_eq!(el.name(), "Target");
    assert_eq!(el.attr("Name"), Some("Build"));
    assert_eq!(el.children().len(), 1);
    assert_eq!(el.text(), "tail");
    assert!(el.has_children());
}

#[test]
fn children_named_filters_by_local_name() {
    let el = Element::new("Project")
        .with_child(Element::new("Target"))
        .with_child(Element::new("Import"))
        .with_child(Element::new("Target"));

    assert_eq!(el.children_named("Target").count(), 2);
    assert_eq!(el.children_named("Import").count(), 1);
    assert_eq!(el.children_named("Choose").count(), 0);
}
