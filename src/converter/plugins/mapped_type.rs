//! Mapped-type hoisting.
//!
//! `{ [key in K]: V }` has no Kotlin analogue; it becomes a named external
//! interface exposing indexed access through `get`/`set` operators. A mapped
//! type appearing as an intersection arm is folded into the inherited type
//! literal instead of being hoisted on its own.

use super::anonymous_declaration::{AnonymousDeclarationPlugin, AnonymousRendered};
use super::coverage::cover;
use crate::converter::context::ConverterContext;
use crate::converter::name_resolver::NameResolver;
use crate::converter::render::{Render, if_present};
use crate::converter::type_parameters::extract_type_parameters;
use crate::syntax::{NodeKind, NodeRef};

/// `get`/`set` operator pair for a mapped type's key/value shape.
pub fn convert_mapped_type_body(
    node: NodeRef<'_>,
    context: &ConverterContext,
    render: &Render<'_>,
) -> String {
    cover(context, node);

    let key_type = node
        .children()
        .find(|child| child.kind() == NodeKind::TypeParameter)
        .and_then(|parameter| parameter.ty())
        .map(|constraint| render.render(constraint))
        .unwrap_or_else(|| "String".to_string());

    let value_type = node
        .ty()
        .map(|ty| render.render(ty))
        .unwrap_or_else(|| "Any?".to_string());

    let nullable_value = if value_type.ends_with('?') {
        value_type.clone()
    } else {
        format!("{value_type}?")
    };

    format!(
        "@nativeGetter\n\
         operator fun get(key: {key_type}): {nullable_value}\n\
         @nativeSetter\n\
         operator fun set(key: {key_type}, value: {value_type})",
    )
}

pub fn mapped_type_plugin(name_resolvers: Vec<NameResolver>) -> AnonymousDeclarationPlugin {
    AnonymousDeclarationPlugin::new(
        name_resolvers,
        Box::new(|node, resolve_name, context, render| {
            if node.kind() != NodeKind::MappedType {
                return None;
            }
            // Intersection arms are rendered by the inherited-type-literal
            // converter; alias right-hand sides render in place under the
            // alias name.
            if node.parent().is_some_and(|parent| {
                parent.kind() == NodeKind::IntersectionType
                    || (parent.kind() == NodeKind::TypeAliasDecl && parent.ty() == Some(node))
            }) {
                return None;
            }

            let name = resolve_name(node);
            let type_parameters = extract_type_parameters(node, render);

            let body = convert_mapped_type_body(node, context, render);
            let declaration = format!(
                "external interface {name}{type_parameters} {{\n{body}\n}}",
                type_parameters =
                    if_present(&type_parameters.declaration, |it| format!("<{it}>")),
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
