//! Terminal type rendering: keywords, literals, references, lambdas.
//!
//! Last structural plugin in the chain; anything it declines falls through to
//! the empty-string fallback and shows up in the coverage audit.

use super::coverage::cover;
use super::parameters::{
    ParameterDeclarationsConfig, ParameterStrategy, convert_parameter_declarations,
};
use crate::converter::context::ConverterContext;
use crate::converter::plugin::ConverterPlugin;
use crate::converter::render::{Render, if_present, render_nullable};
use crate::syntax::{NodeKind, NodeRef};

pub struct TypePlugin;

impl ConverterPlugin for TypePlugin {
    fn render(
        &self,
        node: NodeRef<'_>,
        context: &ConverterContext,
        next: &Render<'_>,
    ) -> Option<String> {
        let text = match node.kind() {
            NodeKind::StringKeyword => "String".to_string(),
            NodeKind::NumberKeyword => "Double".to_string(),
            NodeKind::BooleanKeyword => "Boolean".to_string(),
            NodeKind::VoidKeyword => "Unit".to_string(),
            NodeKind::AnyKeyword | NodeKind::UnknownKeyword => "Any?".to_string(),
            NodeKind::ObjectKeyword => "Any".to_string(),
            NodeKind::NullKeyword | NodeKind::UndefinedKeyword => "Nothing?".to_string(),
            NodeKind::NeverKeyword => "Nothing".to_string(),

            NodeKind::StringLiteralType => {
                let value = node.text().map(|text| text.to_string()).unwrap_or_default();
                format!("String /* \"{value}\" */")
            }
            NodeKind::NumberLiteralType => {
                let value = node.text().map(|text| text.to_string()).unwrap_or_default();
                format!("Double /* {value} */")
            }

            NodeKind::ArrayType => {
                let element = node
                    .children()
                    .next()
                    .map(|element| next.render(element))
                    .unwrap_or_else(|| "Any?".to_string());
                format!("Array<{element}>")
            }

            NodeKind::FunctionType => convert_function_type(node, context, next),

            NodeKind::TypeReference => {
                let name = node.name_text().unwrap_or_default().to_string();
                let arguments = node
                    .children()
                    .filter(|child| child.kind().is_type())
                    .map(|argument| next.render(argument))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{name}{}", if_present(&arguments, |it| format!("<{it}>")))
            }

            NodeKind::TypeParameter => {
                let name = node.name_text().unwrap_or_default().to_string();
                match node.ty() {
                    Some(bound) => format!("{name} : {}", next.render(bound)),
                    None => name,
                }
            }

            NodeKind::HeritageClause => node
                .children()
                .map(|parent| next.render(parent))
                .filter(|parent| !parent.is_empty())
                .collect::<Vec<_>>()
                .join(", "),

            NodeKind::Identifier => node.text().map(|text| text.to_string()).unwrap_or_default(),

            _ => return None,
        };

        cover(context, node);
        Some(text)
    }
}

/// `(error: String) -> Unit`
fn convert_function_type(
    node: NodeRef<'_>,
    context: &ConverterContext,
    render: &Render<'_>,
) -> String {
    let return_type = render_nullable(node.ty(), false, render);

    convert_parameter_declarations(
        node,
        context,
        render,
        &ParameterDeclarationsConfig {
            strategy: ParameterStrategy::Lambda,
            default_value: None,
            inheritance_modifier: None,
        },
        &|parameters, _signature, _modifier| format!("({parameters}) -> {return_type}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::plugins::parameters::ParameterPlugin;
    use crate::syntax::{NodeId, SyntaxTree, TreeBuilder};

    fn render_node(tree: &SyntaxTree, id: NodeId) -> String {
        let plugins: Vec<Box<dyn ConverterPlugin>> =
            vec![Box::new(ParameterPlugin), Box::new(TypePlugin)];
        let context = ConverterContext::new();
        let render = Render::new(&plugins, &context);
        render.render(tree.node(id))
    }

    #[test]
    fn keywords_map_to_kotlin_types() {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let string = builder.node(NodeKind::StringKeyword, root);
        let number = builder.node(NodeKind::NumberKeyword, root);
        let void = builder.node(NodeKind::VoidKeyword, root);
        let undefined = builder.node(NodeKind::UndefinedKeyword, root);
        let tree = builder.finish();

        assert_eq!(render_node(&tree, string), "String");
        assert_eq!(render_node(&tree, number), "Double");
        assert_eq!(render_node(&tree, void), "Unit");
        assert_eq!(render_node(&tree, undefined), "Nothing?");
    }

    #[test]
    fn string_literal_type_keeps_value_as_comment() {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let literal = builder.node(NodeKind::StringLiteralType, root);
        builder.set_text(literal, "ceil");
        let tree = builder.finish();

        assert_eq!(render_node(&tree, literal), "String /* \"ceil\" */");
    }

    #[test]
    fn function_type_renders_as_lambda() {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let lambda = builder.node(NodeKind::FunctionType, root);
        let parameter = builder.named_node(NodeKind::Parameter, lambda, "error");
        let param_ty = builder.node(NodeKind::StringKeyword, parameter);
        builder.set_type(parameter, param_ty);
        let ret = builder.node(NodeKind::VoidKeyword, lambda);
        builder.set_type(lambda, ret);
        let tree = builder.finish();

        assert_eq!(render_node(&tree, lambda), "(error: String) -> Unit");
    }

    #[test]
    fn type_reference_renders_arguments() {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let reference = builder.named_node(NodeKind::TypeReference, root, "Record");
        builder.node(NodeKind::StringKeyword, reference);
        builder.node(NodeKind::NumberKeyword, reference);
        let tree = builder.finish();

        assert_eq!(render_node(&tree, reference), "Record<String, Double>");
    }
}
