use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_declaration_builder_defaults() {
    let decl = RawDeclaration::new("OrderId", RawAttribute::new(AttributeTarget::Type));

    assert!(decl.is_partial);
    assert!(!decl.is_record);
    assert!(decl.ancestors.is_empty());
    assert_eq!(decl.attribute.target, AttributeTarget::Type);
}

#[test]
fn test_ancestors_pushed_innermost_first() {
    let decl = RawDeclaration::new("Id", RawAttribute::default())
        .within(SyntaxAncestor::type_named(TypeKeyword::Class, "Inner"))
        .within(SyntaxAncestor::type_named(TypeKeyword::Class, "Outer"))
        .within(SyntaxAncestor::namespace("Shop"));

    assert_eq!(
        decl.ancestors,
        vec![
            SyntaxAncestor::type_named(TypeKeyword::Class, "Inner"),
            SyntaxAncestor::type_named(TypeKeyword::Class, "Outer"),
            SyntaxAncestor::namespace("Shop"),
        ]
    );
}

#[test]
fn test_attribute_builder_keeps_argument_order() {
    let attr = RawAttribute::new(AttributeTarget::Defaults)
        .with_positional(ArgumentValue::Int(4))
        .with_positional(ArgumentValue::Error)
        .with_named("math", ArgumentValue::Int(2))
        .with_span(Span::new(1, 9));

    assert_eq!(
        attr.positional,
        vec![ArgumentValue::Int(4), ArgumentValue::Error]
    );
    assert_eq!(attr.named[0].name, "math");
    assert_eq!(attr.span, Span::new(1, 9));
}

#[test]
fn test_keyword_spelling() {
    assert_eq!(TypeKeyword::Class.as_str(), "class");
    assert_eq!(TypeKeyword::Struct.as_str(), "struct");
    assert_eq!(TypeKeyword::Record.as_str(), "record");
    assert_eq!(TypeKeyword::Interface.as_str(), "interface");
}
