//! Top-level declaration conversion: interfaces, functions, variables,
//! type aliases, and namespaces.

use super::coverage::{cover, deep_cover};
use super::declaration_merging::DeclarationMergingService;
use super::inherited_type_literal::{convert_inherited_type_literal, is_inherited_type_literal};
use super::mapped_type::convert_mapped_type_body;
use super::namespace_info::NamespaceInfoService;
use super::parameters::{
    ParameterDeclarationsConfig, ParameterStrategy, convert_parameter_declarations,
};
use super::string_union::convert_string_union_declaration;
use super::type_literal::convert_type_literal_declaration;
use crate::base::escape_identifier;
use crate::config::NamespaceStrategy;
use crate::converter::context::ConverterContext;
use crate::converter::plugin::ConverterPlugin;
use crate::converter::render::{Render, if_present, render_nullable};
use crate::syntax::types::is_string_union;
use crate::syntax::{NodeFlags, NodeKind, NodeRef};

pub struct DeclarationPlugin;

impl ConverterPlugin for DeclarationPlugin {
    fn render(
        &self,
        node: NodeRef<'_>,
        context: &ConverterContext,
        next: &Render<'_>,
    ) -> Option<String> {
        match node.kind() {
            NodeKind::SourceFile => Some(convert_statements(node, context, next)),
            NodeKind::InterfaceDecl => Some(convert_interface(node, context, next)),
            NodeKind::FunctionDecl => Some(convert_function(node, context, next)),
            NodeKind::VariableDecl => Some(convert_variable(node, context, next)),
            NodeKind::TypeAliasDecl => Some(convert_type_alias(node, context, next)),
            NodeKind::ModuleDecl => Some(convert_module(node, context, next)),
            _ => None,
        }
    }
}

/// Child declarations joined with blank lines; empty renderings disappear.
fn convert_statements(
    node: NodeRef<'_>,
    context: &ConverterContext,
    render: &Render<'_>,
) -> String {
    cover(context, node);

    node.children()
        .map(|statement| render.render(statement))
        .filter(|statement| !statement.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Declarations nested in an object-strategy namespace drop the `external`
/// keyword; the enclosing object already carries it.
fn declare_prefix(node: NodeRef<'_>, context: &ConverterContext) -> &'static str {
    let inside_object = context
        .lookup_service::<NamespaceInfoService>()
        .is_some_and(|service| {
            node.ancestor(|ancestor| {
                ancestor.kind() == NodeKind::ModuleDecl
                    && service.strategy_of(ancestor.id()) == NamespaceStrategy::Object
            })
            .is_some()
        });

    if inside_object { "" } else { "external " }
}

fn convert_interface(node: NodeRef<'_>, context: &ConverterContext, render: &Render<'_>) -> String {
    cover(context, node);

    let merging = context.lookup_service::<DeclarationMergingService>();
    if let Some(service) = &merging {
        // Later occurrences of a merged interface render empty; the first one
        // owns the whole member list.
        if !service.is_primary(node) {
            return String::new();
        }
    }

    let name = node
        .name()
        .map(|name| escape_identifier(&render.render(name)))
        .unwrap_or_default();
    let type_parameters = own_type_parameters(node, render);
    let heritage = node
        .children()
        .filter(|child| child.kind() == NodeKind::HeritageClause)
        .map(|clause| render.render(clause))
        .filter(|clause| !clause.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    let tree = node.tree();
    let member_ids = match &merging {
        Some(service) => service.merged_members(node),
        None => node
            .children()
            .filter(|child| {
                matches!(
                    child.kind(),
                    NodeKind::PropertySignature
                        | NodeKind::MethodSignature
                        | NodeKind::CallSignature
                )
            })
            .map(|child| child.id())
            .collect(),
    };
    let members = member_ids
        .into_iter()
        .map(|member| render.render(tree.node(member)))
        .filter(|member| !member.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{prefix}interface {name}{type_parameters}{heritage} {{\n{members}\n}}",
        prefix = declare_prefix(node, context),
        type_parameters = if_present(&type_parameters, |it| format!("<{it}>")),
        heritage = if_present(&heritage, |it| format!(" : {it}")),
    )
}

fn convert_function(node: NodeRef<'_>, context: &ConverterContext, render: &Render<'_>) -> String {
    cover(context, node);

    let name = node
        .name()
        .map(|name| escape_identifier(&render.render(name)))
        .unwrap_or_default();
    let type_parameters = own_type_parameters(node, render);
    let return_type = render_nullable(node.ty(), false, render);
    let prefix = declare_prefix(node, context);

    convert_parameter_declarations(
        node,
        context,
        render,
        &ParameterDeclarationsConfig {
            strategy: ParameterStrategy::Function,
            default_value: None,
            inheritance_modifier: None,
        },
        &|parameters, _signature, modifier| {
            format!(
                "{modifier}{prefix}fun {type_parameters}{name}({parameters}): {return_type}",
                modifier = if_present(modifier.unwrap_or(""), |it| format!("{it} ")),
                type_parameters = if_present(&type_parameters, |it| format!("<{it}> ")),
            )
        },
    )
}

fn convert_variable(node: NodeRef<'_>, context: &ConverterContext, render: &Render<'_>) -> String {
    cover(context, node);

    let keyword = if node.flags().contains(NodeFlags::CONST) {
        "val"
    } else {
        "var"
    };
    let name = node
        .name()
        .map(|name| escape_identifier(&render.render(name)))
        .unwrap_or_default();
    let ty = render_nullable(node.ty(), false, render);

    format!(
        "{prefix}{keyword} {name}: {ty}",
        prefix = declare_prefix(node, context),
    )
}

/// Plain aliases stay `typealias`; an anonymous shape on the right-hand side
/// renders as a named declaration in place, under the alias name.
fn convert_type_alias(
    node: NodeRef<'_>,
    context: &ConverterContext,
    render: &Render<'_>,
) -> String {
    cover(context, node);

    let name = node
        .name()
        .map(|name| escape_identifier(&render.render(name)))
        .unwrap_or_default();
    let type_parameters = own_type_parameters(node, render);

    let Some(ty) = node.ty() else {
        return format!(
            "typealias {name}{} = Any?",
            if_present(&type_parameters, |it| format!("<{it}>")),
        );
    };

    match ty.kind() {
        NodeKind::TypeLiteral => {
            convert_type_literal_declaration(ty, &name, &type_parameters, context, render)
        }
        NodeKind::MappedType => {
            let body = convert_mapped_type_body(ty, context, render);
            format!(
                "external interface {name}{type_parameters} {{\n{body}\n}}",
                type_parameters = if_present(&type_parameters, |it| format!("<{it}>")),
            )
        }
        NodeKind::IntersectionType if is_inherited_type_literal(ty) => {
            convert_inherited_type_literal(ty, &name, &type_parameters, context, render)
        }
        NodeKind::UnionType if is_string_union(ty) => {
            convert_string_union_declaration(ty, &name, context, render)
        }
        _ => format!(
            "typealias {name}{type_parameters} = {ty}",
            type_parameters = if_present(&type_parameters, |it| format!("<{it}>")),
            ty = render.render(ty),
        ),
    }
}

/// Namespace rendering depends on the resolved strategy: `ignore` drops the
/// namespace and everything in it, `package` inlines the contained
/// declarations (the structure resolver already placed them when it could),
/// `object` wraps them in an external object.
fn convert_module(node: NodeRef<'_>, context: &ConverterContext, render: &Render<'_>) -> String {
    cover(context, node);

    let strategy = context
        .lookup_service::<NamespaceInfoService>()
        .map(|service| service.strategy_of(node.id()))
        .unwrap_or_default();

    match strategy {
        NamespaceStrategy::Ignore => {
            deep_cover(context, node);
            String::new()
        }
        NamespaceStrategy::Package => convert_contained_declarations(node, render),
        NamespaceStrategy::Object => {
            let name = node
                .name()
                .map(|name| escape_identifier(&render.render(name)))
                .unwrap_or_default();
            let body = convert_contained_declarations(node, render);

            format!("external object {name} {{\n{body}\n}}")
        }
    }
}

/// Declarations nested in a namespace, rendered and joined with blank lines.
/// The namespace's own name identifier is not a statement.
fn convert_contained_declarations(node: NodeRef<'_>, render: &Render<'_>) -> String {
    node.children()
        .filter(|child| child.kind().is_declaration())
        .map(|statement| render.render(statement))
        .filter(|statement| !statement.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn own_type_parameters(node: NodeRef<'_>, render: &Render<'_>) -> String {
    node.children()
        .filter(|child| child.kind() == NodeKind::TypeParameter)
        .map(|parameter| render.render(parameter))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::plugins::members::MemberPlugin;
    use crate::converter::plugins::parameters::ParameterPlugin;
    use crate::converter::plugins::types::TypePlugin;
    use crate::syntax::{NodeId, SyntaxTree, TreeBuilder};

    fn render_declaration(tree: &SyntaxTree, id: NodeId) -> String {
        let plugins: Vec<Box<dyn ConverterPlugin>> = vec![
            Box::new(DeclarationPlugin),
            Box::new(MemberPlugin),
            Box::new(ParameterPlugin),
            Box::new(TypePlugin),
        ];
        let context = ConverterContext::new();
        let render = Render::new(&plugins, &context);
        render.render(tree.node(id))
    }

    #[test]
    fn interface_renders_members_and_heritage() {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let iface = builder.named_node(NodeKind::InterfaceDecl, root, "Path");
        let clause = builder.node(NodeKind::HeritageClause, iface);
        builder.named_node(NodeKind::TypeReference, clause, "Location");
        let property = builder.named_node(NodeKind::PropertySignature, iface, "pathname");
        let ty = builder.node(NodeKind::StringKeyword, property);
        builder.set_type(property, ty);
        let tree = builder.finish();

        assert_eq!(
            render_declaration(&tree, iface),
            "external interface Path : Location {\nvar pathname: String\n}"
        );
    }

    #[test]
    fn function_renders_with_return_type() {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let function = builder.named_node(NodeKind::FunctionDecl, root, "createPath");
        let parameter = builder.named_node(NodeKind::Parameter, function, "param");
        let param_ty = builder.named_node(NodeKind::TypeReference, parameter, "Path");
        builder.set_type(parameter, param_ty);
        let ret = builder.node(NodeKind::StringKeyword, function);
        builder.set_type(function, ret);
        let tree = builder.finish();

        assert_eq!(
            render_declaration(&tree, function),
            "external fun createPath(param: Path): String"
        );
    }

    #[test]
    fn const_variable_renders_as_val() {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let variable = builder.named_node(NodeKind::VariableDecl, root, "version");
        builder.add_flags(variable, NodeFlags::CONST);
        let ty = builder.node(NodeKind::StringKeyword, variable);
        builder.set_type(variable, ty);
        let tree = builder.finish();

        assert_eq!(
            render_declaration(&tree, variable),
            "external val version: String"
        );
    }

    #[test]
    fn plain_type_alias_stays_typealias() {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let alias = builder.named_node(NodeKind::TypeAliasDecl, root, "Callback");
        let lambda = builder.node(NodeKind::FunctionType, alias);
        let parameter = builder.named_node(NodeKind::Parameter, lambda, "error");
        let param_ty = builder.node(NodeKind::StringKeyword, parameter);
        builder.set_type(parameter, param_ty);
        let ret = builder.node(NodeKind::VoidKeyword, lambda);
        builder.set_type(lambda, ret);
        builder.set_type(alias, lambda);
        let tree = builder.finish();

        assert_eq!(
            render_declaration(&tree, alias),
            "typealias Callback = (error: String) -> Unit"
        );
    }

    fn namespace_context(
        namespace: NodeId,
        strategy: NamespaceStrategy,
    ) -> ConverterContext {
        use crate::converter::plugins::namespace_info::NamespaceInfoService;
        use crate::structure::namespace::NamespaceInfo;
        use std::rc::Rc;

        let mut context = ConverterContext::new();
        context.register_service(Rc::new(NamespaceInfoService::new(&[NamespaceInfo {
            node: namespace,
            name: "Internal".to_string(),
            strategy,
        }])));
        context
    }

    fn namespace_tree() -> (SyntaxTree, NodeId) {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let namespace = builder.named_node(NodeKind::ModuleDecl, root, "Internal");
        let function = builder.named_node(NodeKind::FunctionDecl, namespace, "secret");
        let ret = builder.node(NodeKind::VoidKeyword, function);
        builder.set_type(function, ret);
        (builder.finish(), namespace)
    }

    #[test]
    fn ignored_namespace_renders_nothing() {
        let (tree, namespace) = namespace_tree();
        let context = namespace_context(namespace, NamespaceStrategy::Ignore);

        let plugins: Vec<Box<dyn ConverterPlugin>> = vec![
            Box::new(DeclarationPlugin),
            Box::new(ParameterPlugin),
            Box::new(TypePlugin),
        ];
        let render = Render::new(&plugins, &context);

        assert_eq!(render.render(tree.node(namespace)), "");
    }

    #[test]
    fn package_namespace_inlines_only_declarations() {
        let (tree, namespace) = namespace_tree();
        let context = namespace_context(namespace, NamespaceStrategy::Package);

        let plugins: Vec<Box<dyn ConverterPlugin>> = vec![
            Box::new(DeclarationPlugin),
            Box::new(ParameterPlugin),
            Box::new(TypePlugin),
        ];
        let render = Render::new(&plugins, &context);

        assert_eq!(
            render.render(tree.node(namespace)),
            "external fun secret(): Unit"
        );
    }

    #[test]
    fn type_literal_alias_renders_as_interface() {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let alias = builder.named_node(NodeKind::TypeAliasDecl, root, "Options");
        let literal = builder.node(NodeKind::TypeLiteral, alias);
        let property = builder.named_node(NodeKind::PropertySignature, literal, "state");
        let ty = builder.node(NodeKind::StringKeyword, property);
        builder.set_type(property, ty);
        builder.set_type(alias, literal);
        let tree = builder.finish();

        assert_eq!(
            render_declaration(&tree, alias),
            "external interface Options {\nvar state: String\n}"
        );
    }
}
