//! Output file naming.

use strongly_extract::{DeclarationContext, ParentType};

/// Extension of every generated file.
pub const EXTENSION: &str = ".g.cs";

/// Unique, file-system safe key for a declaration:
/// `Namespace.Parent.Name`, with generic parameter lists flattened
/// (`Outer<T, U>` becomes `Outer__TU`). Empty segments are omitted.
pub fn source_name(namespace: &str, parents: &[ParentType], name: &str) -> String {
    let mut key = String::with_capacity(namespace.len() + name.len() + 16 * parents.len());
    if !namespace.is_empty() {
        key.push_str(namespace);
        key.push('.');
    }
    for parent in parents {
        push_sanitized(&mut key, &parent.name);
        key.push('.');
    }
    key.push_str(name);
    key
}

/// [`source_name`] of `ctx` plus [`EXTENSION`].
pub fn file_name(ctx: &DeclarationContext) -> String {
    let mut file = source_name(&ctx.namespace, &ctx.parents, &ctx.name);
    file.push_str(EXTENSION);
    file
}

fn push_sanitized(key: &mut String, name: &str) {
    for c in name.chars() {
        match c {
            ' ' | ',' | '>' => {}
            '<' => key.push_str("__"),
            c => key.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strongly_config::Configuration;
    use strongly_ir::TypeKeyword;

    fn parent(name: &str) -> ParentType {
        ParentType {
            keyword: TypeKeyword::Class,
            name: name.to_owned(),
            constraints: String::new(),
        }
    }

    #[test]
    fn test_global_namespace() {
        assert_eq!(source_name("", &[], "OrderId"), "OrderId");
    }

    #[test]
    fn test_namespace_and_parents() {
        let parents = [parent("Outer"), parent("Inner")];
        assert_eq!(
            source_name("Shop.Orders", &parents, "OrderId"),
            "Shop.Orders.Outer.Inner.OrderId"
        );
    }

    #[test]
    fn test_generic_parent_sanitized() {
        let parents = [parent("Outer<T, U>")];
        assert_eq!(source_name("Shop", &parents, "Id"), "Shop.Outer__TU.Id");
    }

    #[test]
    fn test_file_name() {
        let ctx = DeclarationContext::new("OrderId", Configuration::baseline())
            .with_namespace("Shop");
        assert_eq!(file_name(&ctx), "Shop.OrderId.g.cs");
    }
}
