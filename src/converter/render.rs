//! Chain-of-responsibility render dispatch.

use super::context::ConverterContext;
use super::plugin::ConverterPlugin;
use crate::syntax::{NodeKind, NodeRef};

/// Render dispatcher over the ordered plugin list.
///
/// Each plugin's render hook is consulted in order; the first `Some` wins and
/// later plugins are not asked. A node no plugin renders is invisible in the
/// output — coverage tracking is the mechanism that detects such omissions.
pub struct Render<'a> {
    plugins: &'a [Box<dyn ConverterPlugin>],
    context: &'a ConverterContext,
}

impl<'a> Render<'a> {
    pub fn new(plugins: &'a [Box<dyn ConverterPlugin>], context: &'a ConverterContext) -> Self {
        Self { plugins, context }
    }

    pub fn render(&self, node: NodeRef<'_>) -> String {
        for plugin in self.plugins {
            if let Some(text) = plugin.render(node, self.context, self) {
                return text;
            }
        }
        String::new()
    }
}

/// Apply `format` when `value` is non-empty, else yield the empty string.
pub fn if_present(value: &str, format: impl FnOnce(&str) -> String) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format(value)
    }
}

/// Render a declared type with optional nullability.
///
/// A missing annotation renders as `Any?`. Nullable lambda types are
/// parenthesized before the `?` suffix; an already-nullable rendering is left
/// alone.
pub fn render_nullable(ty: Option<NodeRef<'_>>, nullable: bool, render: &Render<'_>) -> String {
    let Some(ty) = ty else {
        return "Any?".to_string();
    };

    let rendered = render.render(ty);

    if !nullable || rendered.ends_with('?') {
        return rendered;
    }

    if ty.kind() == NodeKind::FunctionType {
        format!("({rendered})?")
    } else {
        format!("{rendered}?")
    }
}
