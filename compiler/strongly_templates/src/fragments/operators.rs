//! Cast, arithmetic and comparison operators.

/// Conversion operators, one per cast flag.
#[derive(Copy, Clone, Debug)]
pub struct CastFragments {
    pub explicit_from: &'static str,
    pub explicit_to: &'static str,
    pub implicit_from: &'static str,
    pub implicit_to: &'static str,
}

/// Arithmetic operators, one per math flag, plus the identity constants
/// emitted ahead of any of them.
#[derive(Copy, Clone, Debug)]
pub struct MathFragments {
    pub constants: &'static str,
    pub addition: &'static str,
    pub subtraction: &'static str,
    pub multiplication: &'static str,
    pub division: &'static str,
    pub negation: &'static str,
    pub compare: &'static str,
}

impl MathFragments {
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}

pub const CASTS: CastFragments = CastFragments {
    explicit_from: "public static explicit operator {{type_name}}({{base_type}} value) => new {{type_name}}(value);",
    explicit_to: "public static explicit operator {{base_type}}({{type_name}} value) => value.Value;",
    implicit_from: "public static implicit operator {{type_name}}({{base_type}} value) => new {{type_name}}(value);",
    implicit_to: "public static implicit operator {{base_type}}({{type_name}} value) => value.Value;",
};

const NUMERIC_CONSTANTS: &str = r"public static {{type_name}} AdditiveIdentity => new {{type_name}}(0);
public static {{type_name}} MultiplicativeIdentity => new {{type_name}}(1);";

const NUMERIC_COMPARE: &str = r"public static bool operator <({{type_name}} a, {{type_name}} b) => a.Value < b.Value;
public static bool operator <=({{type_name}} a, {{type_name}} b) => a.Value <= b.Value;
public static bool operator >({{type_name}} a, {{type_name}} b) => a.Value > b.Value;
public static bool operator >=({{type_name}} a, {{type_name}} b) => a.Value >= b.Value;";

/// Operators over the primitive's own arithmetic. `math_cast` narrows the
/// result back for primitives that promote to `int`.
pub const NUMERIC_MATH: MathFragments = MathFragments {
    constants: NUMERIC_CONSTANTS,
    addition: "public static {{type_name}} operator +({{type_name}} a, {{type_name}} b) => new {{type_name}}({{math_cast}}(a.Value + b.Value));",
    subtraction: "public static {{type_name}} operator -({{type_name}} a, {{type_name}} b) => new {{type_name}}({{math_cast}}(a.Value - b.Value));",
    multiplication: "public static {{type_name}} operator *({{type_name}} a, {{type_name}} b) => new {{type_name}}({{math_cast}}(a.Value * b.Value));",
    division: "public static {{type_name}} operator /({{type_name}} a, {{type_name}} b) => new {{type_name}}({{math_cast}}(a.Value / b.Value));",
    negation: "public static {{type_name}} operator -({{type_name}} value) => new {{type_name}}({{math_cast}}(-value.Value));",
    compare: NUMERIC_COMPARE,
};

/// Non-numeric kinds carry no arithmetic.
pub const NO_MATH: MathFragments = MathFragments {
    constants: "",
    addition: "",
    subtraction: "",
    multiplication: "",
    division: "",
    negation: "",
    compare: "",
};

/// Relational operators through `IComparable`.
pub const COMPARE_OPERATORS: &str = r"public static bool operator <({{type_name}} a, {{type_name}} b) => a.Value.CompareTo(b.Value) < 0;
public static bool operator <=({{type_name}} a, {{type_name}} b) => a.Value.CompareTo(b.Value) <= 0;
public static bool operator >({{type_name}} a, {{type_name}} b) => a.Value.CompareTo(b.Value) > 0;
public static bool operator >=({{type_name}} a, {{type_name}} b) => a.Value.CompareTo(b.Value) >= 0;";

/// Relational operators with ordinal string comparison; null sorts first.
pub const COMPARE_OPERATORS_ORDINAL: &str = r"public static bool operator <({{type_name}} a, {{type_name}} b) => string.CompareOrdinal(a.Value, b.Value) < 0;
public static bool operator <=({{type_name}} a, {{type_name}} b) => string.CompareOrdinal(a.Value, b.Value) <= 0;
public static bool operator >({{type_name}} a, {{type_name}} b) => string.CompareOrdinal(a.Value, b.Value) > 0;
public static bool operator >=({{type_name}} a, {{type_name}} b) => string.CompareOrdinal(a.Value, b.Value) >= 0;";
