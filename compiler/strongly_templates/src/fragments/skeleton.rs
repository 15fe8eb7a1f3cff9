//! Type declaration and base members.
//!
//! Fragments are written at column 0 and without a trailing newline; the
//! engine indents them to their nesting depth.

pub const HEADER: &str = r"//------------------------------------------------------------------------------
// <auto-generated>
//     This code was generated by the Strongly source generator
//
//     Changes to this file may cause incorrect behavior and will be lost if
//     the code is regenerated.
// </auto-generated>
//------------------------------------------------------------------------------

#pragma warning disable 1591 // publicly visible type or member must be documented";

pub const DECLARATION: &str = r#"[System.Diagnostics.DebuggerDisplay("{Value}", Type = "{{type_name}}")]
#if NET7_0_OR_GREATER
readonly partial struct {{type_name}}{{interfaces_net7}}
#else
readonly partial struct {{type_name}}{{interfaces}}
#endif"#;

pub const RECORD_DECLARATION: &str = r#"[System.Diagnostics.DebuggerDisplay("{Value}", Type = "{{type_name}}")]
#if NET7_0_OR_GREATER
readonly partial record struct {{type_name}}({{record_parameter}}){{interfaces_net7}}
#else
readonly partial record struct {{type_name}}({{record_parameter}}){{interfaces}}
#endif"#;

pub const VALUE_PROPERTY: &str = "public {{base_type}} Value { get; }";

pub const CONSTRUCTOR: &str = r"public {{type_name}}({{base_type}} value)
{
    {{ctor_value}}
}";

pub const DEFAULT_CONSTRUCTOR: &str = r"public {{type_name}}()
{
    var value = {{new_value}};
    Validate(value);
    Value = value;
}";

pub const VALIDATE_HOOK: &str = "static partial void Validate({{base_type}} value);";

pub const NEW_FACTORY: &str =
    "public static {{type_name}} New() => new {{type_name}}({{new_value}});";

pub const EMPTY_VALUE: &str =
    "public static readonly {{type_name}} Empty = new {{type_name}}({{empty_value}});";

pub const EQUALITY: &str = r"public bool Equals({{type_name}} other) => this.Value.Equals(other.Value);
public override bool Equals(object{{nullable}} obj)
{
    if (ReferenceEquals(null, obj)) return false;
    return obj is {{type_name}} other && Equals(other);
}

public override int GetHashCode() => {{hash_code}};
public static bool operator ==({{type_name}} a, {{type_name}} b) => a.Equals(b);
public static bool operator !=({{type_name}} a, {{type_name}} b) => !(a == b);";

pub const EQUALITY_STRING: &str = r"public bool Equals({{type_name}} other)
{
    return (Value, other.Value) switch
    {
        (null, null) => true,
        (null, _) => false,
        (_, null) => false,
        (_, _) => string.Equals(Value, other.Value, System.StringComparison.Ordinal),
    };
}
public override bool Equals(object{{nullable}} obj)
{
    if (ReferenceEquals(null, obj)) return false;
    return obj is {{type_name}} other && Equals(other);
}

public override int GetHashCode() => {{hash_code}};
public static bool operator ==({{type_name}} a, {{type_name}} b) => a.Equals(b);
public static bool operator !=({{type_name}} a, {{type_name}} b) => !(a == b);";

pub const TO_STRING: &str = "public override string{{nullable}} ToString() => {{to_string}};";

/// Sequential GUIDs ordered the way SQL Server sorts `uniqueidentifier`.
pub const NEXT_COMB: &str = r"static System.Guid NextComb()
{
    long baseDateTicks = new System.DateTime(1900, 1, 1, 0, 0, 0, System.DateTimeKind.Utc).Ticks;
    byte[] guidArray = System.Guid.NewGuid().ToByteArray();
    System.DateTime now = System.DateTime.UtcNow;

    System.TimeSpan days = new System.TimeSpan(now.Ticks - baseDateTicks);
    System.TimeSpan msecs = now.TimeOfDay;

    // SQL Server datetime resolution is 1/300th of a second.
    byte[] daysArray = System.BitConverter.GetBytes(days.Days);
    byte[] msecsArray = System.BitConverter.GetBytes((long) (msecs.TotalMilliseconds / 3.333333));

    System.Array.Reverse(daysArray);
    System.Array.Reverse(msecsArray);

    System.Array.Copy(daysArray, daysArray.Length - 2, guidArray, guidArray.Length - 6, 2);
    System.Array.Copy(msecsArray, msecsArray.Length - 4, guidArray, guidArray.Length - 4, 4);

    return new System.Guid(guidArray);
}";
