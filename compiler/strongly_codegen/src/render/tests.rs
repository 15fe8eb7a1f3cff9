use pretty_assertions::assert_eq;

use super::*;

fn slots(pairs: &[(&'static str, &str)]) -> SlotMap {
    let mut map = SlotMap::new();
    for (slot, value) in pairs {
        map.insert(slot, *value);
    }
    map
}

#[test]
fn test_replaces_known_slots() {
    let map = slots(&[("type_name", "OrderId"), ("base_type", "int")]);
    assert_eq!(
        render("public {{type_name}}({{base_type}} value)", &map),
        "public OrderId(int value)"
    );
}

#[test]
fn test_leaves_unknown_slots_verbatim() {
    let map = slots(&[("type_name", "OrderId")]);
    assert_eq!(
        render("{{type_name}} {{missing}}", &map),
        "OrderId {{missing}}"
    );
}

#[test]
fn test_values_are_not_rescanned() {
    let map = slots(&[("a", "{{b}}"), ("b", "boom")]);
    assert_eq!(render("[{{a}}]", &map), "[{{b}}]");
}

#[test]
fn test_single_braces_pass_through() {
    let map = slots(&[("type_name", "OrderId")]);
    let template = r#"[DebuggerDisplay("{Value}", Type = "{{type_name}}")]"#;
    assert_eq!(
        render(template, &map),
        r#"[DebuggerDisplay("{Value}", Type = "OrderId")]"#
    );
}

#[test]
fn test_unterminated_placeholder_is_literal() {
    let map = slots(&[("type_name", "OrderId")]);
    assert_eq!(render("{{type_name}} {{oops", &map), "OrderId {{oops");
}

#[test]
fn test_multi_line_values_follow_indentation() {
    let map = slots(&[("ctor_value", "Validate(value);\nValue = value;")]);
    let template = "public X(int value)\n{\n    {{ctor_value}}\n}";
    assert_eq!(
        render(template, &map),
        "public X(int value)\n{\n    Validate(value);\n    Value = value;\n}"
    );
}

#[test]
fn test_empty_lines_in_values_stay_empty() {
    let map = slots(&[("body", "a\n\nb")]);
    assert_eq!(render("  {{body}}", &map), "  a\n\n  b");
}

#[test]
fn test_render_into_appends() {
    let map = slots(&[("x", "1")]);
    let mut out = String::from("before ");
    render_into("{{x}}", &map, &mut out);
    assert_eq!(out, "before 1");
}

#[test]
fn test_insert_replaces() {
    let mut map = SlotMap::new();
    assert!(map.is_empty());
    map.insert("x", "1");
    map.insert("x", "2");
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("x"), Some("2"));
    assert!(map.contains("x"));
    assert!(!map.contains("y"));
}
