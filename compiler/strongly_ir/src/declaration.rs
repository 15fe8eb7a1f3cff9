//! Raw declaration feed.
//!
//! One [`RawDeclaration`] per annotated value type the host compiler found,
//! plus zero or more assembly-level [`RawAttribute`]s targeting
//! [`AttributeTarget::Defaults`]. Nothing here is validated: extraction
//! decides what is usable.

use crate::Span;

/// Keyword of an enclosing container.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TypeKeyword {
    Class,
    Struct,
    Record,
    Interface,
}

impl TypeKeyword {
    /// Source spelling of the keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeKeyword::Class => "class",
            TypeKeyword::Struct => "struct",
            TypeKeyword::Record => "record",
            TypeKeyword::Interface => "interface",
        }
    }
}

/// One step of the syntax chain above a declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum SyntaxAncestor {
    /// An enclosing type declaration.
    Type {
        keyword: TypeKeyword,
        /// Simple identifier without generic parameters.
        name: String,
        /// Generic parameter list including angle brackets, e.g. `<T, U>`.
        #[cfg_attr(feature = "serde", serde(default))]
        type_parameters: String,
        /// Constraint clauses, e.g. `where T : class`.
        #[cfg_attr(feature = "serde", serde(default))]
        constraints: String,
    },
    /// A namespace block. Dotted names (`a.b`) are kept as written.
    Namespace { name: String },
}

/// Which attribute produced the arguments.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum AttributeTarget {
    /// Per-type attribute on a value type.
    #[default]
    Type,
    /// Assembly-wide defaults attribute.
    Defaults,
}

/// Value of one attribute argument after host evaluation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum ArgumentValue {
    /// The evaluated integer behind the enum constant.
    Int(i32),
    /// The host compiler could not resolve the argument.
    Error,
}

/// A `key = value` attribute argument.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedArgument {
    pub name: String,
    pub value: ArgumentValue,
}

/// Attribute usage with its arguments in source order.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawAttribute {
    #[cfg_attr(feature = "serde", serde(default))]
    pub target: AttributeTarget,
    #[cfg_attr(feature = "serde", serde(default))]
    pub positional: Vec<ArgumentValue>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub named: Vec<NamedArgument>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Span,
}

impl RawAttribute {
    pub fn new(target: AttributeTarget) -> Self {
        RawAttribute {
            target,
            ..RawAttribute::default()
        }
    }

    #[must_use]
    pub fn with_positional(mut self, value: ArgumentValue) -> Self {
        self.positional.push(value);
        self
    }

    #[must_use]
    pub fn with_named(mut self, name: impl Into<String>, value: ArgumentValue) -> Self {
        self.named.push(NamedArgument {
            name: name.into(),
            value,
        });
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// A value type carrying the per-type attribute.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawDeclaration {
    /// Simple type name.
    pub name: String,
    /// Whether the declaration carries the `partial` modifier.
    #[cfg_attr(feature = "serde", serde(default = "default_partial"))]
    pub is_partial: bool,
    /// `record struct` instead of plain `struct`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_record: bool,
    /// Enclosing syntax, innermost first.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ancestors: Vec<SyntaxAncestor>,
    /// Parameter types of single-argument constructors the user already wrote.
    #[cfg_attr(feature = "serde", serde(default))]
    pub constructor_parameters: Vec<String>,
    pub attribute: RawAttribute,
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Span,
}

#[cfg(feature = "serde")]
fn default_partial() -> bool {
    true
}

impl RawDeclaration {
    /// A partial, non-record declaration at global scope.
    pub fn new(name: impl Into<String>, attribute: RawAttribute) -> Self {
        RawDeclaration {
            name: name.into(),
            is_partial: true,
            is_record: false,
            ancestors: Vec::new(),
            constructor_parameters: Vec::new(),
            attribute,
            span: Span::DUMMY,
        }
    }

    /// Push the next ancestor outward.
    #[must_use]
    pub fn within(mut self, ancestor: SyntaxAncestor) -> Self {
        self.ancestors.push(ancestor);
        self
    }

    #[must_use]
    pub fn with_partial(mut self, is_partial: bool) -> Self {
        self.is_partial = is_partial;
        self
    }

    #[must_use]
    pub fn with_record(mut self, is_record: bool) -> Self {
        self.is_record = is_record;
        self
    }

    #[must_use]
    pub fn with_constructor(mut self, parameter_type: impl Into<String>) -> Self {
        self.constructor_parameters.push(parameter_type.into());
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

impl SyntaxAncestor {
    pub fn namespace(name: impl Into<String>) -> Self {
        SyntaxAncestor::Namespace { name: name.into() }
    }

    /// A non-generic enclosing type.
    pub fn type_named(keyword: TypeKeyword, name: impl Into<String>) -> Self {
        SyntaxAncestor::Type {
            keyword,
            name: name.into(),
            type_parameters: String::new(),
            constraints: String::new(),
        }
    }

    /// A generic enclosing type.
    pub fn generic_type(
        keyword: TypeKeyword,
        name: impl Into<String>,
        type_parameters: impl Into<String>,
        constraints: impl Into<String>,
    ) -> Self {
        SyntaxAncestor::Type {
            keyword,
            name: name.into(),
            type_parameters: type_parameters.into(),
            constraints: constraints.into(),
        }
    }
}

#[cfg(test)]
mod tests;
