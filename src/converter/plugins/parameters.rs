//! Parameter conversion and union-type overload expansion.
//!
//! Kotlin has no union-typed parameters, so a function-like declaration whose
//! parameter carries a union type materializes one concrete overload per
//! non-nullable arm: the cartesian product across parameter positions.
//! Nullable arms fold into parameter nullability instead of producing a
//! branch, and string-literal unions are excluded (they map to an enumeration
//! type). Lambda parameter lists are never expanded: a function value cannot
//! be overloaded once declared.

use super::annotations::AnnotationService;
use super::coverage::{cover, deep_cover};
use super::inheritance_modifier::InheritanceModifierService;
use crate::base::escape_identifier;
use crate::converter::context::ConverterContext;
use crate::converter::plugin::ConverterPlugin;
use crate::converter::render::{Render, render_nullable};
use crate::syntax::types::{flatten_union, is_nullable_type, is_nullable_union, is_string_union};
use crate::syntax::{NodeFlags, NodeId, NodeKind, NodeRef, SyntaxTree};

/// One parameter position of a concrete signature.
///
/// `ty` may differ from the declared type when the position was expanded from
/// a union arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterInfo {
    pub parameter: NodeId,
    pub ty: Option<NodeId>,
    pub nullable: bool,
    pub optional: bool,
}

/// Ordered parameter list of one concrete overload.
pub type Signature = Vec<ParameterInfo>;

/// How a parameter list is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterStrategy {
    /// Function/method declaration: overloads are expanded, optional
    /// parameters default to `definedExternally`.
    Function,
    /// Lambda type: rendered as-is, optionality becomes nullability.
    Lambda,
}

/// Options for [`convert_parameter_declarations`].
pub struct ParameterDeclarationsConfig<'a> {
    pub strategy: ParameterStrategy,
    pub default_value: Option<&'a str>,
    pub inheritance_modifier: Option<&'a str>,
}

/// Template receives the rendered parameter list, the concrete signature, and
/// the modifier resolved for that signature.
pub type SignatureTemplate<'a> = dyn Fn(&str, &Signature, Option<&str>) -> String + 'a;

/// Initial signature of a function-like declaration, before expansion.
pub fn extract_signature(node: NodeRef<'_>) -> Signature {
    node.children()
        .filter(|child| child.kind() == NodeKind::Parameter)
        .map(|parameter| ParameterInfo {
            parameter: parameter.id(),
            ty: parameter.ty().map(|ty| ty.id()),
            nullable: false,
            optional: parameter.flags().contains(NodeFlags::OPTIONAL),
        })
        .collect()
}

/// Expand union-typed positions into the cartesian product of concrete
/// signatures.
///
/// Positions are processed left to right over the accumulated candidate set;
/// candidate order is preserved and arms are appended in declaration order,
/// so the result is deterministic.
pub fn expand_unions(
    tree: &SyntaxTree,
    initial: Signature,
    context: &ConverterContext,
) -> Vec<Signature> {
    let positions = initial.len();
    let mut current = vec![initial];

    for index in 0..positions {
        let mut next = Vec::with_capacity(current.len());

        for signature in current {
            let info = signature[index];
            let Some(ty_id) = info.ty else {
                next.push(signature);
                continue;
            };
            let ty = tree.node(ty_id);

            // String-literal unions become an enumeration type, not overloads.
            if is_string_union(ty) {
                next.push(signature);
                continue;
            }

            if ty.kind() != NodeKind::UnionType {
                next.push(signature);
                continue;
            }

            cover(context, ty);
            let nullable = is_nullable_union(ty);

            for arm in flatten_union(ty) {
                if is_nullable_type(arm) {
                    deep_cover(context, arm);
                    continue;
                }
                let mut generated = signature.clone();
                generated[index] = ParameterInfo {
                    ty: Some(arm.id()),
                    nullable,
                    ..info
                };
                next.push(generated);
            }
        }

        current = next;
    }

    current
}

/// Render the parameter list(s) of a function-like declaration through
/// `template`, one invocation per concrete signature.
pub fn convert_parameter_declarations(
    node: NodeRef<'_>,
    context: &ConverterContext,
    render: &Render<'_>,
    config: &ParameterDeclarationsConfig<'_>,
    template: &SignatureTemplate<'_>,
) -> String {
    let tree = node.tree();
    let initial = extract_signature(node);

    match config.strategy {
        ParameterStrategy::Function => {
            let annotations = context
                .lookup_service::<AnnotationService>()
                .map(|service| service.resolve_annotations(node, context))
                .unwrap_or_default();
            let delimiter = if annotations.is_empty() {
                "\n\n".to_string()
            } else {
                format!("\n\n{}\n", annotations.join("\n"))
            };

            let modifier_service = context.lookup_service::<InheritanceModifierService>();
            let signatures = expand_unions(tree, initial, context);

            signatures
                .iter()
                .map(|signature| {
                    let resolved = config
                        .inheritance_modifier
                        .map(str::to_string)
                        .or_else(|| {
                            modifier_service.as_ref().and_then(|service| {
                                service.resolve(node, Some(signature), context)
                            })
                        });

                    let parameters = signature
                        .iter()
                        .map(|info| {
                            convert_parameter_with_fixed_type(
                                tree.node(info.parameter),
                                context,
                                render,
                                config.strategy,
                                config.default_value,
                                resolved.as_deref(),
                                info.ty.map(|ty| tree.node(ty)),
                                info.nullable,
                            )
                        })
                        .collect::<Vec<_>>()
                        .join(", ");

                    template(&parameters, signature, resolved.as_deref())
                })
                .collect::<Vec<_>>()
                .join(&delimiter)
        }
        ParameterStrategy::Lambda => {
            let parameters = node
                .children()
                .filter(|child| child.kind() == NodeKind::Parameter)
                .map(|parameter| {
                    convert_parameter_with_fixed_type(
                        parameter,
                        context,
                        render,
                        config.strategy,
                        config.default_value,
                        None,
                        parameter.ty(),
                        false,
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");

            template(&parameters, &initial, None)
        }
    }
}

/// Render one parameter with an already-chosen type.
#[allow(clippy::too_many_arguments)]
fn convert_parameter_with_fixed_type(
    parameter: NodeRef<'_>,
    context: &ConverterContext,
    render: &Render<'_>,
    strategy: ParameterStrategy,
    default_value: Option<&str>,
    inheritance_modifier: Option<&str>,
    ty: Option<NodeRef<'_>>,
    nullable: bool,
) -> String {
    cover(context, parameter);

    let name = match parameter.name() {
        Some(name) if name.kind() == NodeKind::Identifier => {
            cover(context, name);
            escape_identifier(&render.render(name))
        }
        Some(pattern) => {
            // Destructured parameter: there is no identifier to carry over.
            deep_cover(context, pattern);
            destructured_parameter_name(parameter)
        }
        None => "param".to_string(),
    };

    let flags = parameter.flags();
    let is_optional = strategy == ParameterStrategy::Lambda && flags.contains(NodeFlags::OPTIONAL);
    let is_defined_externally = strategy == ParameterStrategy::Function
        && flags.contains(NodeFlags::OPTIONAL)
        && inheritance_modifier != Some("override");

    let mut rendered = render_nullable(ty, is_optional || nullable, render);

    if flags.contains(NodeFlags::REST) && ty.is_some() {
        // `...rest: T[]` unwraps to `vararg rest: T`; anything else loses its
        // shape and must surface the original type.
        if let Some(element) = rendered
            .strip_prefix("Array<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            rendered = element.to_string();
        } else {
            rendered = format!("Any? /* {rendered} */");
        }
    }

    format!(
        "{vararg}{name}: {rendered}{undefined_hint}{default}",
        vararg = if flags.contains(NodeFlags::REST) { "vararg " } else { "" },
        undefined_hint = if is_optional { " /* use undefined for default */" } else { "" },
        default = if is_defined_externally {
            format!(" = {}", default_value.unwrap_or("definedExternally"))
        } else {
            String::new()
        },
    )
}

/// `options` when the destructured parameter is alone in its list, else
/// `param<index>`.
fn destructured_parameter_name(parameter: NodeRef<'_>) -> String {
    let Some(owner) = parameter.parent() else {
        return "options".to_string();
    };

    let siblings: Vec<_> = owner
        .children()
        .filter(|child| child.kind() == NodeKind::Parameter)
        .collect();
    let destructured = siblings
        .iter()
        .filter(|sibling| {
            sibling
                .name()
                .is_some_and(|name| name.kind() != NodeKind::Identifier)
        })
        .count();

    if destructured == 1 {
        "options".to_string()
    } else {
        let index = siblings
            .iter()
            .position(|sibling| sibling.id() == parameter.id())
            .unwrap_or(0);
        format!("param{index}")
    }
}

/// Renders bare `Parameter` nodes reached directly through the chain
/// (lambda types render their parameters this way).
pub struct ParameterPlugin;

impl ConverterPlugin for ParameterPlugin {
    fn render(
        &self,
        node: NodeRef<'_>,
        context: &ConverterContext,
        next: &Render<'_>,
    ) -> Option<String> {
        if node.kind() != NodeKind::Parameter {
            return None;
        }

        let strategy = match node.parent().map(|parent| parent.kind()) {
            Some(NodeKind::FunctionType) => ParameterStrategy::Lambda,
            _ => ParameterStrategy::Function,
        };

        Some(convert_parameter_with_fixed_type(
            node,
            context,
            next,
            strategy,
            None,
            None,
            node.ty(),
            false,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::plugins::types::TypePlugin;
    use crate::syntax::TreeBuilder;

    #[test]
    fn union_positions_multiply_into_concrete_signatures() {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let function = builder.named_node(NodeKind::FunctionDecl, root, "watch");
        let source = builder.named_node(NodeKind::Parameter, function, "source");
        let union = builder.node(NodeKind::UnionType, source);
        let string_arm = builder.node(NodeKind::StringKeyword, union);
        let number_arm = builder.node(NodeKind::NumberKeyword, union);
        builder.set_type(source, union);
        let flag = builder.named_node(NodeKind::Parameter, function, "deep");
        let flag_ty = builder.node(NodeKind::BooleanKeyword, flag);
        builder.set_type(flag, flag_ty);
        let tree = builder.finish();

        let context = ConverterContext::new();
        let initial = extract_signature(tree.node(function));
        let signatures = expand_unions(&tree, initial, &context);

        assert_eq!(signatures.len(), 2);
        assert_eq!(signatures[0][0].ty, Some(string_arm));
        assert_eq!(signatures[1][0].ty, Some(number_arm));
        assert_eq!(signatures[0][1].ty, Some(flag_ty));
        assert!(!signatures[0][0].nullable);
    }

    #[test]
    fn nullable_arms_fold_into_nullability() {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let function = builder.named_node(NodeKind::FunctionDecl, root, "find");
        let parameter = builder.named_node(NodeKind::Parameter, function, "query");
        let union = builder.node(NodeKind::UnionType, parameter);
        let string_arm = builder.node(NodeKind::StringKeyword, union);
        builder.node(NodeKind::UndefinedKeyword, union);
        builder.set_type(parameter, union);
        let tree = builder.finish();

        let context = ConverterContext::new();
        let initial = extract_signature(tree.node(function));
        let signatures = expand_unions(&tree, initial, &context);

        assert_eq!(signatures.len(), 1);
        assert_eq!(signatures[0][0].ty, Some(string_arm));
        assert!(signatures[0][0].nullable);
    }

    #[test]
    fn string_literal_unions_are_not_expanded() {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let function = builder.named_node(NodeKind::FunctionDecl, root, "watch");
        let parameter = builder.named_node(NodeKind::Parameter, function, "mode");
        let union = builder.node(NodeKind::UnionType, parameter);
        for value in ["eager", "lazy"] {
            let arm = builder.node(NodeKind::StringLiteralType, union);
            builder.set_text(arm, value);
        }
        builder.set_type(parameter, union);
        let tree = builder.finish();

        let context = ConverterContext::new();
        let initial = extract_signature(tree.node(function));
        let signatures = expand_unions(&tree, initial, &context);

        assert_eq!(signatures.len(), 1);
        assert_eq!(signatures[0][0].ty, Some(union));
    }

    #[test]
    fn lone_destructured_parameter_is_named_options() {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let function = builder.named_node(NodeKind::FunctionDecl, root, "init");
        let parameter = builder.node(NodeKind::Parameter, function);
        let pattern = builder.node(NodeKind::BindingPattern, parameter);
        builder.set_name_node(parameter, pattern);
        let ty = builder.named_node(NodeKind::TypeReference, parameter, "Options");
        builder.set_type(parameter, ty);
        let tree = builder.finish();

        let plugins: Vec<Box<dyn ConverterPlugin>> =
            vec![Box::new(ParameterPlugin), Box::new(TypePlugin)];
        let context = ConverterContext::new();
        let render = Render::new(&plugins, &context);

        assert_eq!(render.render(tree.node(parameter)), "options: Options");
    }

    #[test]
    fn rest_parameter_unwraps_its_array_type() {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let function = builder.named_node(NodeKind::FunctionDecl, root, "join");
        let parameter = builder.named_node(NodeKind::Parameter, function, "parts");
        builder.add_flags(parameter, NodeFlags::REST);
        let array = builder.node(NodeKind::ArrayType, parameter);
        builder.node(NodeKind::StringKeyword, array);
        builder.set_type(parameter, array);
        let tree = builder.finish();

        let plugins: Vec<Box<dyn ConverterPlugin>> =
            vec![Box::new(ParameterPlugin), Box::new(TypePlugin)];
        let context = ConverterContext::new();
        let render = Render::new(&plugins, &context);

        assert_eq!(render.render(tree.node(parameter)), "vararg parts: String");
    }
}
