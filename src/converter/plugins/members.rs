//! Interface member conversion: properties, methods, call signatures.

use super::coverage::cover;
use super::parameters::{
    ParameterDeclarationsConfig, ParameterStrategy, convert_parameter_declarations,
};
use crate::base::escape_identifier;
use crate::converter::context::ConverterContext;
use crate::converter::plugin::ConverterPlugin;
use crate::converter::render::{Render, if_present, render_nullable};
use crate::syntax::{NodeFlags, NodeKind, NodeRef};
use tracing::debug;

pub struct MemberPlugin;

impl ConverterPlugin for MemberPlugin {
    fn render(
        &self,
        node: NodeRef<'_>,
        context: &ConverterContext,
        next: &Render<'_>,
    ) -> Option<String> {
        match node.kind() {
            NodeKind::PropertySignature => Some(convert_property(node, context, next)),
            NodeKind::MethodSignature => Some(convert_method(node, context, next)),
            NodeKind::CallSignature => Some(convert_call_signature(node, context, next)),
            _ => None,
        }
    }
}

/// `readonly` becomes `val`, everything else `var`; the optional marker folds
/// into nullability.
fn convert_property(node: NodeRef<'_>, context: &ConverterContext, render: &Render<'_>) -> String {
    cover(context, node);

    let keyword = if node.flags().contains(NodeFlags::READONLY) {
        "val"
    } else {
        "var"
    };
    let name = node
        .name()
        .map(|name| escape_identifier(&render.render(name)))
        .unwrap_or_else(|| "value".to_string());
    let optional = node.flags().contains(NodeFlags::OPTIONAL);
    let ty = render_nullable(node.ty(), optional, render);

    format!("{keyword} {name}: {ty}")
}

fn convert_method(node: NodeRef<'_>, context: &ConverterContext, render: &Render<'_>) -> String {
    cover(context, node);

    let name = node
        .name()
        .map(|name| escape_identifier(&render.render(name)))
        .unwrap_or_else(|| "invoke".to_string());
    if node.flags().contains(NodeFlags::OPTIONAL) {
        // Kotlin member functions cannot be optional; the marker is dropped.
        debug!(method = name.as_str(), "optional marker has no rendering on a method");
    }
    let type_parameters = extract_method_type_parameters(node, render);
    let return_type = render_nullable(node.ty(), false, render);

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
                "{modifier}fun {type_parameters}{name}({parameters}): {return_type}",
                modifier = if_present(modifier.unwrap_or(""), |it| format!("{it} ")),
                type_parameters = if_present(&type_parameters, |it| format!("<{it}> ")),
            )
        },
    )
}

/// `(x: T): R` inside an interface becomes an `invoke` operator.
fn convert_call_signature(
    node: NodeRef<'_>,
    context: &ConverterContext,
    render: &Render<'_>,
) -> String {
    cover(context, node);

    let type_parameters = extract_method_type_parameters(node, render);
    let return_type = render_nullable(node.ty(), false, render);

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
                "@nativeInvoke\n{modifier}operator fun {type_parameters}invoke({parameters}): {return_type}",
                modifier = if_present(modifier.unwrap_or(""), |it| format!("{it} ")),
                type_parameters = if_present(&type_parameters, |it| format!("<{it}> ")),
            )
        },
    )
}

/// Own type parameters of a signature, rendered in declaration order.
fn extract_method_type_parameters(node: NodeRef<'_>, render: &Render<'_>) -> String {
    node.children()
        .filter(|child| child.kind() == NodeKind::TypeParameter)
        .map(|parameter| render.render(parameter))
        .collect::<Vec<_>>()
        .join(", ")
}
