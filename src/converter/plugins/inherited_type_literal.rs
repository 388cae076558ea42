//! Inherited-type-literal hoisting.
//!
//! An intersection whose arms are only type references, type literals, and
//! mapped types describes "these members, plus everything from those types".
//! It hoists to a named external interface whose heritage clause lists the
//! reference arms, whose body merges the literal arms' members, and whose
//! accessors come from the mapped-type arm if present.

use super::anonymous_declaration::{AnonymousDeclarationPlugin, AnonymousRendered};
use super::coverage::cover;
use super::inheritance_modifier::InheritanceModifierService;
use super::mapped_type::convert_mapped_type_body;
use super::type_literal::convert_type_literal_body;
use crate::converter::context::ConverterContext;
use crate::converter::name_resolver::NameResolver;
use crate::converter::render::{Render, if_present};
use crate::converter::type_parameters::extract_type_parameters;
use crate::syntax::{NodeKind, NodeRef};

pub fn is_inherited_type_literal(node: NodeRef<'_>) -> bool {
    node.kind() == NodeKind::IntersectionType
        && node.children().all(|arm| {
            matches!(
                arm.kind(),
                NodeKind::TypeReference | NodeKind::TypeLiteral | NodeKind::MappedType
            )
        })
}

pub fn convert_inherited_type_literal(
    node: NodeRef<'_>,
    name: &str,
    type_parameters: &str,
    context: &ConverterContext,
    render: &Render<'_>,
) -> String {
    cover(context, node);

    let inheritance_modifier = context
        .lookup_service::<InheritanceModifierService>()
        .and_then(|service| service.resolve(node, None, context));

    let heritage_types = node
        .children()
        .filter(|arm| arm.kind() == NodeKind::TypeReference)
        .map(|arm| render.render(arm))
        .filter(|arm| !arm.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    let members = node
        .children()
        .filter(|arm| arm.kind() == NodeKind::TypeLiteral)
        .map(|arm| convert_type_literal_body(arm, context, render))
        .collect::<Vec<_>>()
        .join("\n");

    let accessors = node
        .children()
        .find(|arm| arm.kind() == NodeKind::MappedType)
        .map(|arm| convert_mapped_type_body(arm, context, render))
        .unwrap_or_default();

    format!(
        "{modifier}external interface {name}{type_parameters}{heritage} {{\n{accessors}{members}\n}}",
        modifier = if_present(inheritance_modifier.as_deref().unwrap_or(""), |it| {
            format!("{it} ")
        }),
        type_parameters = if_present(type_parameters, |it| format!("<{it}>")),
        heritage = if_present(&heritage_types, |it| format!(" : {it}")),
        accessors = if_present(&accessors, |it| format!("{it}\n")),
    )
}

pub fn inherited_type_literal_plugin(
    name_resolvers: Vec<NameResolver>,
) -> AnonymousDeclarationPlugin {
    AnonymousDeclarationPlugin::new(
        name_resolvers,
        Box::new(|node, resolve_name, context, render| {
            if !is_inherited_type_literal(node) {
                return None;
            }
            // Alias right-hand sides render in place under the alias name.
            if node.parent().is_some_and(|parent| {
                parent.kind() == NodeKind::TypeAliasDecl && parent.ty() == Some(node)
            }) {
                return None;
            }

            let name = resolve_name(node);
            let type_parameters = extract_type_parameters(node, render);

            let declaration = convert_inherited_type_literal(
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
