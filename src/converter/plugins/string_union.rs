//! String-literal-union hoisting.
//!
//! A union of string literals is an enumeration in disguise. It becomes a
//! sealed external interface whose companion object carries one constant per
//! literal, each bound to its runtime string value. A nullable arm does not
//! add a constant; it makes the call-site reference nullable.

use super::anonymous_declaration::{AnonymousDeclarationPlugin, AnonymousRendered};
use super::coverage::{cover, deep_cover};
use crate::base::{escape_identifier, snake_to_camel_case};
use crate::converter::context::ConverterContext;
use crate::converter::name_resolver::NameResolver;
use crate::converter::render::Render;
use crate::syntax::types::{flatten_union, is_nullable_type, is_nullable_union, is_string_union};
use crate::syntax::{NodeKind, NodeRef};

pub fn convert_string_union_declaration(
    node: NodeRef<'_>,
    name: &str,
    context: &ConverterContext,
    _render: &Render<'_>,
) -> String {
    cover(context, node);

    let constants = flatten_union(node)
        .into_iter()
        .filter_map(|arm| {
            if is_nullable_type(arm) {
                deep_cover(context, arm);
                return None;
            }
            deep_cover(context, arm);
            let value = arm.text()?.to_string();
            let constant = escape_identifier(&snake_to_camel_case(&value));
            Some(format!(
                "@seskar.js.JsValue(\"{value}\")\nval {constant}: {name}"
            ))
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "@Suppress(\"NESTED_CLASS_IN_EXTERNAL_INTERFACE\")\n\
         sealed external interface {name} {{\n\
         companion object {{\n\
         {constants}\n\
         }}\n\
         }}",
    )
}

pub fn string_union_plugin(name_resolvers: Vec<NameResolver>) -> AnonymousDeclarationPlugin {
    AnonymousDeclarationPlugin::new(
        name_resolvers,
        Box::new(|node, resolve_name, context, render| {
            if node.kind() != NodeKind::UnionType || !is_string_union(node) {
                return None;
            }
            // Alias right-hand sides render in place under the alias name.
            if node
                .parent()
                .is_some_and(|parent| {
                    parent.kind() == NodeKind::TypeAliasDecl && parent.ty() == Some(node)
                })
            {
                return None;
            }

            let name = resolve_name(node);
            let declaration = convert_string_union_declaration(node, &name, context, render);

            let reference = if is_nullable_union(node) {
                format!("{name}?")
            } else {
                name.clone()
            };

            Some(AnonymousRendered::Hoisted {
                name,
                declaration,
                reference,
            })
        }),
    )
}
