//! Naming strategy for synthesized declarations.
//!
//! Resolvers run in order; the first non-`None` result wins. Every resolver is
//! pure over `(node, context)`. When the whole chain declines, the hoisting
//! plugin falls back to its own `Temp<N>` counter.

use std::rc::Rc;

use super::context::ConverterContext;
use crate::base::capitalize;
use crate::syntax::{NodeKind, NodeRef};

/// One naming strategy. `Rc` so a chain can be shared across several hoister
/// instances within a run.
pub type NameResolver = Rc<dyn Fn(NodeRef<'_>, &ConverterContext) -> Option<String>>;

/// Built-in resolver chain, in precedence order.
pub fn default_name_resolvers() -> Vec<NameResolver> {
    vec![
        Rc::new(resolve_type_alias_name),
        Rc::new(resolve_call_signature_parameter_name),
        Rc::new(resolve_parameter_name),
        Rc::new(resolve_property_name),
        Rc::new(resolve_variable_name),
    ]
}

/// Anonymous type in a type-alias right-hand side takes the alias name.
pub fn resolve_type_alias_name(node: NodeRef<'_>, _context: &ConverterContext) -> Option<String> {
    let alias = node.parent()?;
    if alias.kind() != NodeKind::TypeAliasDecl || alias.ty() != Some(node) {
        return None;
    }
    Some(capitalize(alias.name_text()?))
}

/// Parameter of a call signature inside an interface yields
/// `<InterfaceName><ParameterName>`, capitalized-concatenated.
pub fn resolve_call_signature_parameter_name(
    node: NodeRef<'_>,
    _context: &ConverterContext,
) -> Option<String> {
    let parameter = node.parent()?;
    if parameter.kind() != NodeKind::Parameter {
        return None;
    }
    let parameter_name = parameter.name_text()?;

    let signature = parameter.parent()?;
    if signature.kind() != NodeKind::CallSignature {
        return None;
    }
    let interface = signature.parent()?;
    if interface.kind() != NodeKind::InterfaceDecl {
        return None;
    }

    Some(format!(
        "{}{}",
        capitalize(interface.name_text()?),
        capitalize(parameter_name)
    ))
}

/// Parameter of a named function or method yields `<Owner><ParameterName>`.
pub fn resolve_parameter_name(node: NodeRef<'_>, _context: &ConverterContext) -> Option<String> {
    let parameter = node.parent()?;
    if parameter.kind() != NodeKind::Parameter {
        return None;
    }
    let parameter_name = parameter.name_text()?;

    let owner = parameter.parent()?;
    if !matches!(owner.kind(), NodeKind::FunctionDecl | NodeKind::MethodSignature) {
        return None;
    }

    Some(format!(
        "{}{}",
        capitalize(owner.name_text()?),
        capitalize(parameter_name)
    ))
}

/// Anonymous type of a property signature yields `<Owner><PropertyName>`.
pub fn resolve_property_name(node: NodeRef<'_>, _context: &ConverterContext) -> Option<String> {
    let property = node.parent()?;
    if property.kind() != NodeKind::PropertySignature || property.ty() != Some(node) {
        return None;
    }
    let property_name = property.name_text()?;

    let owner = property.ancestor(|ancestor| {
        matches!(
            ancestor.kind(),
            NodeKind::InterfaceDecl | NodeKind::TypeAliasDecl
        )
    })?;

    Some(format!(
        "{}{}",
        capitalize(owner.name_text()?),
        capitalize(property_name)
    ))
}

/// Anonymous type of a variable declaration takes the capitalized variable name.
pub fn resolve_variable_name(node: NodeRef<'_>, _context: &ConverterContext) -> Option<String> {
    let variable = node.parent()?;
    if variable.kind() != NodeKind::VariableDecl || variable.ty() != Some(node) {
        return None;
    }
    Some(capitalize(variable.name_text()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TreeBuilder;

    #[test]
    fn call_signature_parameter_concatenates_names() {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let interface = builder.named_node(NodeKind::InterfaceDecl, root, "fetcher");
        let signature = builder.node(NodeKind::CallSignature, interface);
        let parameter = builder.named_node(NodeKind::Parameter, signature, "init");
        let literal = builder.node(NodeKind::TypeLiteral, parameter);
        builder.set_type(parameter, literal);
        let tree = builder.finish();

        let context = ConverterContext::new();
        let name = resolve_call_signature_parameter_name(tree.node(literal), &context);
        assert_eq!(name.as_deref(), Some("FetcherInit"));
    }

    #[test]
    fn property_type_concatenates_owner_and_property() {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let alias = builder.named_node(NodeKind::TypeAliasDecl, root, "FetcherStates");
        let outer = builder.node(NodeKind::TypeLiteral, alias);
        builder.set_type(alias, outer);
        let property = builder.named_node(NodeKind::PropertySignature, outer, "Idle");
        let inner = builder.node(NodeKind::TypeLiteral, property);
        builder.set_type(property, inner);
        let tree = builder.finish();

        let context = ConverterContext::new();
        let name = resolve_property_name(tree.node(inner), &context);
        assert_eq!(name.as_deref(), Some("FetcherStatesIdle"));
    }

    #[test]
    fn resolvers_decline_unrelated_shapes() {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let interface = builder.named_node(NodeKind::InterfaceDecl, root, "Path");
        let tree = builder.finish();

        let context = ConverterContext::new();
        for resolver in default_name_resolvers() {
            assert!(resolver(tree.node(interface), &context).is_none());
        }
    }
}
