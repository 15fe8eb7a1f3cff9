//! Generation context for one declaration.

use strongly_config::Configuration;
use strongly_ir::{Span, SyntaxAncestor, TypeKeyword};

/// An enclosing type the generated code must be nested in.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParentType {
    pub keyword: TypeKeyword,
    /// Name with its generic parameter list, e.g. `Outer<T>`.
    pub name: String,
    /// Constraint clauses, possibly empty.
    pub constraints: String,
}

impl ParentType {
    /// `partial class Outer<T> where T : class`, without braces.
    pub fn header(&self) -> String {
        let mut header = format!("partial {} {}", self.keyword.as_str(), self.name);
        if !self.constraints.is_empty() {
            header.push(' ');
            header.push_str(&self.constraints);
        }
        header
    }
}

/// Everything assembly needs for one wrapper type.
///
/// Immutable once built. Structural equality and hashing let a driver reuse
/// output for an identical declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DeclarationContext {
    pub name: String,
    /// Dot-joined namespace, empty for the global namespace.
    pub namespace: String,
    /// Enclosing types, outermost first.
    pub parents: Vec<ParentType>,
    pub is_record: bool,
    pub is_partial: bool,
    /// Parameter types of single-argument constructors already written.
    pub user_constructors: Vec<String>,
    /// Merged configuration.
    pub configuration: Configuration,
    pub location: Span,
}

impl DeclarationContext {
    /// A global-namespace, non-record context with `configuration`.
    pub fn new(name: impl Into<String>, configuration: Configuration) -> Self {
        DeclarationContext {
            name: name.into(),
            namespace: String::new(),
            parents: Vec::new(),
            is_record: false,
            is_partial: true,
            user_constructors: Vec::new(),
            configuration,
            location: Span::DUMMY,
        }
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent: ParentType) -> Self {
        self.parents.push(parent);
        self
    }

    #[must_use]
    pub fn with_record(mut self, is_record: bool) -> Self {
        self.is_record = is_record;
        self
    }

    /// Whether the user already wrote a constructor taking `primitive`.
    pub fn has_constructor_for(&self, primitive: &str) -> bool {
        self.user_constructors.iter().any(|ty| ty == primitive)
    }
}

/// Enclosing types, outermost first.
///
/// Walks ancestors innermost-out and stops at the first one that is not a
/// class, struct or record (an interface or a namespace).
pub fn parent_types(ancestors: &[SyntaxAncestor]) -> Vec<ParentType> {
    let mut parents: Vec<ParentType> = ancestors
        .iter()
        .map_while(|ancestor| match ancestor {
            SyntaxAncestor::Type {
                keyword: keyword @ (TypeKeyword::Class | TypeKeyword::Struct | TypeKeyword::Record),
                name,
                type_parameters,
                constraints,
            } => Some(ParentType {
                keyword: *keyword,
                name: format!("{name}{type_parameters}"),
                constraints: constraints.clone(),
            }),
            _ => None,
        })
        .collect();
    parents.reverse();
    parents
}

/// Dot-joined namespace of every namespace ancestor, outermost first.
pub fn namespace_of(ancestors: &[SyntaxAncestor]) -> String {
    let mut segments: Vec<&str> = ancestors
        .iter()
        .filter_map(|ancestor| match ancestor {
            SyntaxAncestor::Namespace { name } => Some(name.as_str()),
            SyntaxAncestor::Type { .. } => None,
        })
        .collect();
    segments.reverse();
    segments.join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parents_outermost_first() {
        let ancestors = [
            SyntaxAncestor::type_named(TypeKeyword::Class, "Inner"),
            SyntaxAncestor::generic_type(TypeKeyword::Record, "Outer", "<T>", "where T : class"),
            SyntaxAncestor::namespace("Shop"),
        ];

        let parents = parent_types(&ancestors);
        assert_eq!(parents.len(), 2);
        assert_eq!(parents[0].header(), "partial record Outer<T> where T : class");
        assert_eq!(parents[1].header(), "partial class Inner");
    }

    #[test]
    fn test_parents_stop_at_interface() {
        let ancestors = [
            SyntaxAncestor::type_named(TypeKeyword::Struct, "Inner"),
            SyntaxAncestor::type_named(TypeKeyword::Interface, "IThing"),
            SyntaxAncestor::type_named(TypeKeyword::Class, "Outer"),
        ];

        let parents = parent_types(&ancestors);
        assert_eq!(parents.len(), 1);
        assert_eq!(parents[0].name, "Inner");
    }

    #[test]
    fn test_namespace_joins_nested_blocks() {
        let ancestors = [
            SyntaxAncestor::type_named(TypeKeyword::Class, "Outer"),
            SyntaxAncestor::namespace("Orders"),
            SyntaxAncestor::namespace("Shop.Core"),
        ];
        assert_eq!(namespace_of(&ancestors), "Shop.Core.Orders");
        assert_eq!(namespace_of(&[]), "");
    }

    #[test]
    fn test_has_constructor_for() {
        let mut ctx = DeclarationContext::new("OrderId", Configuration::baseline());
        ctx.user_constructors.push("System.Guid".to_string());
        assert!(ctx.has_constructor_for("System.Guid"));
        assert!(!ctx.has_constructor_for("int"));
    }
}
