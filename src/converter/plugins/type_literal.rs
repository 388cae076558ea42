//! Type-literal hoisting.
//!
//! An inline `{ a: string }` shape in type position becomes a named external
//! interface, hoisted to the top level of its source unit. Two positions are
//! exempt: the right-hand side of a type alias (the alias converter renders it
//! as a named interface in place) and an arm of an intersection (handled as an
//! inherited type literal).

use super::anonymous_declaration::{AnonymousDeclarationPlugin, AnonymousRendered};
use super::coverage::cover;
use crate::converter::context::ConverterContext;
use crate::converter::name_resolver::NameResolver;
use crate::converter::render::{Render, if_present};
use crate::converter::type_parameters::extract_type_parameters;
use crate::syntax::{NodeKind, NodeRef};

/// Interface body text of a type literal: one rendered member per line.
pub fn convert_type_literal_body(
    node: NodeRef<'_>,
    context: &ConverterContext,
    render: &Render<'_>,
) -> String {
    cover(context, node);

    node.children()
        .map(|member| render.render(member))
        .filter(|member| !member.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full named declaration for a hoisted type literal.
pub fn convert_type_literal_declaration(
    node: NodeRef<'_>,
    name: &str,
    type_parameters: &str,
    context: &ConverterContext,
    render: &Render<'_>,
) -> String {
    let body = convert_type_literal_body(node, context, render);

    format!(
        "external interface {name}{type_parameters} {{\n{body}\n}}",
        type_parameters = if_present(type_parameters, |it| format!("<{it}>")),
    )
}

/// Type literals in alias-RHS and intersection-arm positions are rendered by
/// their owners, not hoisted.
fn is_hoisting_position(node: NodeRef<'_>) -> bool {
    match node.parent() {
        Some(parent) if parent.kind() == NodeKind::TypeAliasDecl => parent.ty() != Some(node),
        Some(parent) if parent.kind() == NodeKind::IntersectionType => false,
        _ => true,
    }
}

pub fn type_literal_plugin(name_resolvers: Vec<NameResolver>) -> AnonymousDeclarationPlugin {
    AnonymousDeclarationPlugin::new(
        name_resolvers,
        Box::new(|node, resolve_name, context, render| {
            if node.kind() != NodeKind::TypeLiteral || !is_hoisting_position(node) {
                return None;
            }

            let name = resolve_name(node);
            let type_parameters = extract_type_parameters(node, render);

            let declaration = convert_type_literal_declaration(
                node,
                &name,
                &type_parameters.declaration,
                context,
                render,
            );
            let reference = format!(
                "{name}{}",
                if_present(&type_parameters.reference, |it| format!("<{it}>")),
            );

            Some(AnonymousRendered::Hoisted {
                name,
                declaration,
                reference,
            })
        }),
    )
}
