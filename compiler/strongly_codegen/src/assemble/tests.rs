use pretty_assertions::assert_eq;
use proptest::prelude::*;
use strongly_config::{BackingKind, Configuration};
use strongly_extract::ParentType;
use strongly_ir::TypeKeyword;

use super::*;

fn config(kind: BackingKind) -> Configuration {
    Configuration::baseline().with_backing(kind)
}

fn everything(kind: BackingKind) -> Configuration {
    config(kind)
        .with_converters(ConverterSet::all())
        .with_capabilities(CapabilitySet::all())
        .with_casts(CastSet::all())
        .with_math(MathSet::all())
}

fn generate(ctx: &DeclarationContext) -> String {
    assemble(ctx, &mut String::new()).unwrap()
}

fn braces_balanced(text: &str) -> bool {
    let mut depth = 0i64;
    for c in text.chars() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

fn position(text: &str, needle: &str) -> usize {
    text.find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not in output"))
}

#[test]
fn test_bare_int_wrapper() {
    let ctx = DeclarationContext::new(
        "Count",
        config(BackingKind::Int)
            .with_capabilities(CapabilitySet::empty())
            .with_converters(ConverterSet::empty()),
    );
    let expected = r#"//------------------------------------------------------------------------------
// <auto-generated>
//     This code was generated by the Strongly source generator
//
//     Changes to this file may cause incorrect behavior and will be lost if
//     the code is regenerated.
// </auto-generated>
//------------------------------------------------------------------------------

#pragma warning disable 1591 // publicly visible type or member must be documented

[System.Diagnostics.DebuggerDisplay("{Value}", Type = "Count")]
#if NET7_0_OR_GREATER
readonly partial struct Count
#else
readonly partial struct Count
#endif
{
    public int Value { get; }

    public Count(int value)
    {
        Value = value;
    }

    public static readonly Count Empty = new Count(0);

    public bool Equals(Count other) => this.Value.Equals(other.Value);
    public override bool Equals(object obj)
    {
        if (ReferenceEquals(null, obj)) return false;
        return obj is Count other && Equals(other);
    }

    public override int GetHashCode() => Value.GetHashCode();
    public static bool operator ==(Count a, Count b) => a.Equals(b);
    public static bool operator !=(Count a, Count b) => !(a == b);

    public override string ToString() => Value.ToString();
}
"#;
    assert_eq!(generate(&ctx), expected);
}

#[test]
fn test_guid_defaults_in_namespace() {
    let ctx = DeclarationContext::new("OrderId", Configuration::baseline()).with_namespace("Shop");
    let out = generate(&ctx);

    assert!(out.contains("namespace Shop\n{\n"));
    assert!(out.contains(
        "    readonly partial struct OrderId : System.IComparable<OrderId>, System.IEquatable<OrderId>, System.IFormattable, System.IParsable<OrderId>\n"
    ));
    assert!(out.contains(
        "    readonly partial struct OrderId : System.IComparable<OrderId>, System.IEquatable<OrderId>, System.IFormattable\n"
    ));
    assert!(out.contains("public static OrderId New() => new OrderId(System.Guid.NewGuid());"));
    assert!(out.contains("var value = System.Guid.NewGuid();"));
    assert!(out.contains("public static OrderId Parse(string value)"));
    assert!(out.contains("class OrderIdTypeConverter"));
    assert!(out.contains("class OrderIdSystemTextJsonConverter"));
    assert!(!out.contains("NewtonsoftJsonConverter"));
    assert!(!out.contains("#nullable enable"));
    assert!(!out.contains("{{"));
    assert!(braces_balanced(&out));

    assert!(
        position(&out, "JsonConverter(typeof(OrderIdSystemTextJsonConverter))")
            < position(&out, "TypeConverter(typeof(OrderIdTypeConverter))")
    );
}

#[test]
fn test_markers_and_fragments_in_order() {
    let out = generate(&DeclarationContext::new("Id", everything(BackingKind::Long)));

    let markers = [
        "[Newtonsoft.Json.JsonConverter(",
        "[System.Text.Json.Serialization.JsonConverter(",
        "[System.ComponentModel.TypeConverter(",
        "[Swashbuckle.AspNetCore.Annotations.SwaggerSchemaFilter(",
        "readonly partial struct Id",
    ];
    let fragments = [
        "public int CompareTo(Id other)",
        "public string ToString(string format",
        "public static Id Parse(string value)",
        "class EfValueConverter",
        "class DapperTypeHandler",
        "class IdTypeConverter",
        "class IdNewtonsoftJsonConverter",
        "class IdSystemTextJsonConverter",
        "class IdSchemaFilter",
        "public static explicit operator Id(long value)",
        "public static explicit operator long(Id value)",
        "public static implicit operator Id(long value)",
        "public static implicit operator long(Id value)",
        "AdditiveIdentity",
        "operator +(Id a, Id b)",
        "operator -(Id a, Id b)",
        "operator /(Id a, Id b)",
        "operator *(Id a, Id b)",
        "operator -(Id value)",
        "operator <(Id a, Id b)",
    ];
    for sequence in [&markers[..], &fragments[..]] {
        let positions: Vec<usize> = sequence.iter().map(|needle| position(&out, needle)).collect();
        assert!(
            positions.windows(2).all(|pair| pair[0] < pair[1]),
            "out of order: {sequence:?}"
        );
    }
}

#[test]
fn test_interface_lists_never_dangle() {
    let parsable_only = DeclarationContext::new(
        "Id",
        config(BackingKind::Int).with_capabilities(CapabilitySet::PARSABLE),
    );
    let out = generate(&parsable_only);
    assert!(out.contains("readonly partial struct Id : System.IParsable<Id>\n#else\n"));
    assert!(out.contains("#else\nreadonly partial struct Id\n#endif"));
    assert!(!out.contains(" : \n"));
    assert!(!out.contains(" :\n"));
}

#[test]
fn test_record_variant_drops_synthesized_members() {
    let ctx = DeclarationContext::new("OrderId", Configuration::baseline()).with_record(true);
    let out = generate(&ctx);

    assert!(out.contains(
        "readonly partial record struct OrderId(System.Guid Value) : System.IComparable<OrderId>, System.IFormattable, System.IParsable<OrderId>\n"
    ));
    assert!(out.contains(
        "readonly partial record struct OrderId(System.Guid Value) : System.IComparable<OrderId>, System.IFormattable\n"
    ));
    assert!(!out.contains("IEquatable"));
    assert!(!out.contains("public System.Guid Value { get; }"));
    assert!(!out.contains("public bool Equals("));
    assert!(!out.contains("public OrderId("));
    assert!(out.contains("public static OrderId New()"));
    assert!(out.contains("public int CompareTo(OrderId other)"));
    assert!(braces_balanced(&out));
}

#[test]
fn test_user_constructor_is_respected() {
    for spelling in ["System.Guid", "Guid"] {
        let mut ctx = DeclarationContext::new("OrderId", Configuration::baseline());
        ctx.user_constructors.push(spelling.to_owned());
        let out = generate(&ctx);
        assert!(!out.contains("public OrderId(System.Guid value)"), "{spelling}");
        assert!(out.contains("public OrderId()\n"), "{spelling}");
    }

    let mut ctx = DeclarationContext::new("OrderId", Configuration::baseline());
    ctx.user_constructors.push("string".to_owned());
    assert!(generate(&ctx).contains("public OrderId(System.Guid value)"));
}

#[test]
fn test_math_gated_by_kind_and_flags() {
    let double = DeclarationContext::new(
        "Price",
        config(BackingKind::Double).with_math(MathSet::ADDITION | MathSet::COMPARE),
    );
    let out = generate(&double);
    assert!(out.contains("AdditiveIdentity"));
    assert!(out.contains("operator +(Price a, Price b) => new Price((a.Value + b.Value));"));
    assert!(out.contains("operator <(Price a, Price b) => a.Value < b.Value;"));
    assert!(!out.contains("operator -("));
    assert!(!out.contains("operator *("));

    let guid_addition = DeclarationContext::new(
        "OrderId",
        Configuration::baseline().with_math(MathSet::ADDITION),
    );
    let out = generate(&guid_addition);
    assert!(!out.contains("operator +("));
    assert!(!out.contains("operator <("));

    let guid_compare = DeclarationContext::new(
        "OrderId",
        Configuration::baseline().with_math(MathSet::COMPARE),
    );
    let out = generate(&guid_compare);
    assert!(out.contains("operator <(OrderId a, OrderId b) => a.Value.CompareTo(b.Value) < 0;"));
    assert!(!out.contains("AdditiveIdentity"));
}

#[test]
fn test_unknown_math_bits_still_emit_constants() {
    let ctx = DeclarationContext::new(
        "Price",
        config(BackingKind::Double).with_math(MathSet::from_bits_retain(1 << 10)),
    );
    let out = generate(&ctx);
    assert!(out.contains("AdditiveIdentity"));
    assert!(!out.contains("operator +("));
    assert!(!out.contains("operator <("));
}

#[test]
fn test_reference_annotations_only_in_nullable_context() {
    for &kind in BackingKind::ALL {
        let out = generate(&DeclarationContext::new("Id", everything(kind)));
        let nullable_context = out.contains("#nullable enable");
        assert_eq!(nullable_context, kind.is_string(), "{kind}");
        if !nullable_context {
            for annotated in ["object? ", "string? ", "IFormatProvider? ", "Context? "] {
                assert!(!out.contains(annotated), "{kind}: `{annotated}` outside nullable context");
            }
        }
    }
}

#[test]
fn test_narrow_integers_cast_results() {
    let ctx = DeclarationContext::new(
        "Amount",
        config(BackingKind::Short).with_math(MathSet::ADDITION),
    );
    assert!(generate(&ctx).contains("new Amount((short)(a.Value + b.Value))"));
}

#[test]
fn test_string_kinds_have_no_casts() {
    let ctx = DeclarationContext::new(
        "Name",
        config(BackingKind::String).with_casts(CastSet::all()),
    );
    let out = generate(&ctx);
    assert!(!out.contains("operator Name(string value)"));
    assert!(!out.contains("operator string(Name value)"));
}

#[test]
fn test_nullable_annotations_for_strings() {
    let out = generate(&DeclarationContext::new("Name", config(BackingKind::String)));
    assert!(out.contains("\n#nullable enable\n"));
    assert!(out.contains("public string Value { get; }"));
    assert!(out.contains("public override string? ToString() => Value;"));
    assert!(out.contains("public override bool Equals(object? obj)"));
    assert!(out.contains("public override int GetHashCode() => Value?.GetHashCode() ?? 0;"));
    assert!(out.contains("Value = value ?? throw new System.ArgumentNullException(nameof(value));"));

    let out = generate(&DeclarationContext::new(
        "Note",
        config(BackingKind::NullableString),
    ));
    assert!(out.contains("\n#nullable enable\n"));
    assert!(out.contains("public string? Value { get; }"));
    assert!(out.contains("public override string? ToString() => Value;"));
    assert!(out.contains("public override int GetHashCode() => Value?.GetHashCode() ?? 0;"));
}

#[test]
fn test_nested_in_generic_parents() {
    let ctx = DeclarationContext::new("Id", config(BackingKind::Int))
        .with_namespace("Shop.Orders")
        .with_parent(ParentType {
            keyword: TypeKeyword::Class,
            name: "Outer<T>".into(),
            constraints: "where T : class".into(),
        })
        .with_parent(ParentType {
            keyword: TypeKeyword::Record,
            name: "Inner".into(),
            constraints: String::new(),
        });
    let out = generate(&ctx);

    assert!(out.contains(
        "namespace Shop.Orders\n{\n    partial class Outer<T> where T : class\n    {\n        partial record Inner\n        {\n            [System"
    ));
    assert!(out.contains("            readonly partial struct Id"));
    assert!(out.ends_with("            }\n        }\n    }\n}\n"));
    assert!(braces_balanced(&out));
}

#[test]
fn test_multi_line_slots_keep_indentation() {
    let ctx = DeclarationContext::new("OrderId", Configuration::baseline()).with_namespace("Shop");
    let out = generate(&ctx);
    assert!(out.contains(
        "        public OrderId(System.Guid value)\n        {\n            Validate(value);\n            Value = value;\n        }\n"
    ));
}

#[test]
fn test_invalid_inputs() {
    let mut scratch = String::from("kept");

    let unnamed = DeclarationContext::new("", Configuration::baseline());
    assert!(matches!(
        assemble(&unnamed, &mut scratch),
        Err(AssembleError::InvalidInput { .. })
    ));

    let mut unresolved = Configuration::baseline();
    unresolved.capabilities = Setting::Inherit;
    assert!(matches!(
        assemble(&DeclarationContext::new("Id", unresolved), &mut scratch),
        Err(AssembleError::InvalidInput { reason: "implementations are unresolved", .. })
    ));

    let mut unresolved = Configuration::baseline();
    unresolved.converters = Setting::Inherit;
    assert!(matches!(
        assemble(&DeclarationContext::new("Id", unresolved), &mut scratch),
        Err(AssembleError::InvalidInput { reason: "converters are unresolved", .. })
    ));

    let unknown = Configuration::baseline().with_backing_type(BackingType::Unknown(42));
    assert_eq!(
        assemble(&DeclarationContext::new("Id", unknown), &mut scratch),
        Err(AssembleError::UnsupportedBackingKind {
            name: "Id".into(),
            backing: "backing type 42".into(),
        })
    );

    assert_eq!(scratch, "kept");
}

#[test]
fn test_inherited_casts_and_math_emit_nothing() {
    let mut configuration = config(BackingKind::Int);
    configuration.casts = Setting::Inherit;
    configuration.math = Setting::Inherit;
    let out = generate(&DeclarationContext::new("Id", configuration));
    assert!(!out.contains("operator Id(int value)"));
    assert!(!out.contains("AdditiveIdentity"));
}

#[test]
fn test_output_is_appended_to_scratch() {
    let ctx = DeclarationContext::new("Id", config(BackingKind::Int));
    let fresh = generate(&ctx);

    let mut scratch = String::from("// prior\n");
    let out = assemble(&ctx, &mut scratch).unwrap();
    assert_eq!(out, scratch);
    assert_eq!(out, format!("// prior\n{fresh}"));
}

#[test]
fn test_every_kind_renders_completely() {
    for &kind in BackingKind::ALL {
        for is_record in [false, true] {
            let ctx = DeclarationContext::new("Id", everything(kind)).with_record(is_record);
            let out = generate(&ctx);
            assert!(!out.contains("{{"), "{kind} record={is_record}: unfilled slot");
            assert!(braces_balanced(&out), "{kind} record={is_record}: braces");
        }
    }
}

fn any_kind() -> impl Strategy<Value = BackingKind> {
    prop::sample::select(BackingKind::ALL.to_vec())
}

fn any_configuration() -> impl Strategy<Value = Configuration> {
    (any_kind(), 0u32..128, 0u32..32, 0u32..32, 0u32..128).prop_map(
        |(kind, converters, capabilities, casts, math)| {
            config(kind)
                .with_converters(ConverterSet::from_bits_retain(converters))
                .with_capabilities(CapabilitySet::from_bits_retain(capabilities))
                .with_casts(CastSet::from_bits_retain(casts))
                .with_math(MathSet::from_bits_retain(math))
        },
    )
}

proptest! {
    #[test]
    fn test_assembly_is_deterministic_and_balanced(
        configuration in any_configuration(),
        is_record in any::<bool>(),
    ) {
        let ctx = DeclarationContext::new("Id", configuration)
            .with_namespace("Shop")
            .with_record(is_record);
        let first = generate(&ctx);
        let second = generate(&ctx);
        prop_assert_eq!(&first, &second);
        prop_assert!(braces_balanced(&first));
        prop_assert!(!first.contains("{{"));
    }
}
