//! Annotation resolution.
//!
//! Annotations are small strategies that derive Kotlin annotation lines from a
//! declaration (built-in: `@deprecated` JSDoc tags become `@Deprecated`).
//! The service is also consulted by the overload expander so annotation text
//! is repeated before each generated overload.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashSet;

use crate::converter::context::ConverterContext;
use crate::converter::plugin::ConverterPlugin;
use crate::converter::render::Render;
use crate::syntax::{NodeId, NodeRef};

/// One annotation strategy: `Some` yields one annotation line.
pub type Annotation = Box<dyn Fn(NodeRef<'_>, &ConverterContext) -> Option<String>>;

pub struct AnnotationService {
    annotations: Vec<Annotation>,
}

impl AnnotationService {
    /// Custom annotations run before the built-ins.
    pub fn new(custom: Vec<Annotation>) -> Self {
        let mut annotations = custom;
        annotations.push(Box::new(deprecated));
        Self { annotations }
    }

    /// All annotation lines applicable to `node`, in chain order.
    pub fn resolve_annotations(
        &self,
        node: NodeRef<'_>,
        context: &ConverterContext,
    ) -> Vec<String> {
        self.annotations
            .iter()
            .filter_map(|annotation| annotation(node, context))
            .collect()
    }
}

/// Built-in: a `@deprecated` JSDoc tag becomes `@Deprecated`.
fn deprecated(node: NodeRef<'_>, _context: &ConverterContext) -> Option<String> {
    let docs = node.docs()?;
    let rest = docs.split("@deprecated").nth(1)?;
    let message = rest
        .lines()
        .next()
        .unwrap_or("")
        .trim()
        .trim_end_matches("*/")
        .trim();

    if message.is_empty() {
        Some("@Deprecated(\"deprecated\")".to_string())
    } else {
        Some(format!("@Deprecated(\"{}\")", message.replace('"', "\\\"")))
    }
}

/// Registers [`AnnotationService`] and prepends annotation lines to the
/// declarations they apply to, using the same claim-once trick as the
/// comments plugin.
pub struct AnnotationsPlugin {
    service: Rc<AnnotationService>,
    handled: RefCell<FxHashSet<NodeId>>,
}

impl AnnotationsPlugin {
    pub fn new(custom: Vec<Annotation>) -> Self {
        Self {
            service: Rc::new(AnnotationService::new(custom)),
            handled: RefCell::new(FxHashSet::default()),
        }
    }
}

impl ConverterPlugin for AnnotationsPlugin {
    fn setup(&self, context: &mut ConverterContext) {
        context.register_service(self.service.clone());
    }

    fn render(
        &self,
        node: NodeRef<'_>,
        context: &ConverterContext,
        next: &Render<'_>,
    ) -> Option<String> {
        if !node.kind().is_declaration() {
            return None;
        }
        if self.handled.borrow().contains(&node.id()) {
            return None;
        }

        let annotations = self.service.resolve_annotations(node, context);
        if annotations.is_empty() {
            return None;
        }

        self.handled.borrow_mut().insert(node.id());
        Some(format!("{}\n{}", annotations.join("\n"), next.render(node)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{NodeKind, TreeBuilder};

    #[test]
    fn deprecated_tag_resolves_with_message() {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let function = builder.named_node(NodeKind::FunctionDecl, root, "legacy");
        builder.set_docs(function, "/** @deprecated use modern() instead */");
        let tree = builder.finish();

        let context = ConverterContext::new();
        let service = AnnotationService::new(Vec::new());
        let annotations = service.resolve_annotations(tree.node(function), &context);
        assert_eq!(annotations, vec!["@Deprecated(\"use modern() instead\")"]);
    }

    #[test]
    fn undocumented_nodes_resolve_to_nothing() {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let function = builder.named_node(NodeKind::FunctionDecl, root, "modern");
        let tree = builder.finish();

        let context = ConverterContext::new();
        let service = AnnotationService::new(Vec::new());
        assert!(service.resolve_annotations(tree.node(function), &context).is_empty());
    }
}
