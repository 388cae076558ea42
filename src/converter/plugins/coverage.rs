//! Coverage bookkeeping.
//!
//! A construct matched by no render plugin is silently omitted from output;
//! this service is the mechanism that makes such omissions auditable. Every
//! traversed node is observed; converters mark the nodes they handled as
//! covered, and whole subtrees that are intentionally elided (e.g.
//! destructuring patterns) as deep-covered. The audit is queryable state, not
//! just a log line.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashSet;
use tracing::debug;

use super::configuration::ConfigurationService;
use crate::converter::context::ConverterContext;
use crate::converter::generated::GeneratedArtifact;
use crate::converter::plugin::ConverterPlugin;
use crate::error::GenerateError;
use crate::syntax::{NodeId, NodeRef, SyntaxTree};

#[derive(Default)]
pub struct CoverageService {
    seen: RefCell<FxHashSet<NodeId>>,
    covered: RefCell<FxHashSet<NodeId>>,
    deep_covered: RefCell<FxHashSet<NodeId>>,
}

impl CoverageService {
    /// Record a node as traversed.
    pub fn observe(&self, node: NodeRef<'_>) {
        self.seen.borrow_mut().insert(node.id());
    }

    /// Mark a node as handled (possibly intentionally omitted).
    pub fn cover(&self, node: NodeRef<'_>) {
        self.covered.borrow_mut().insert(node.id());
    }

    /// Mark a node and its entire subtree as intentionally elided.
    pub fn deep_cover(&self, node: NodeRef<'_>) {
        self.deep_covered.borrow_mut().insert(node.id());
    }

    /// Whether a node counts as handled, directly or via a deep-covered
    /// ancestor.
    pub fn is_covered(&self, node: NodeRef<'_>) -> bool {
        if self.covered.borrow().contains(&node.id())
            || self.deep_covered.borrow().contains(&node.id())
        {
            return true;
        }
        let deep = self.deep_covered.borrow();
        let mut current = node.parent();
        while let Some(ancestor) = current {
            if deep.contains(&ancestor.id()) {
                return true;
            }
            current = ancestor.parent();
        }
        false
    }

    /// Every node that was traversed but neither rendered nor explicitly
    /// marked as handled, in arena order.
    pub fn uncovered(&self, tree: &SyntaxTree) -> Vec<NodeId> {
        let seen = self.seen.borrow();
        let mut gaps: Vec<NodeId> = seen
            .iter()
            .copied()
            .filter(|&id| !self.is_covered(tree.node(id)))
            .collect();
        gaps.sort();
        gaps
    }
}

/// Registers [`CoverageService`] and feeds it during traversal.
pub struct CheckCoveragePlugin {
    service: Rc<CoverageService>,
}

impl CheckCoveragePlugin {
    pub fn new() -> Self {
        Self {
            service: Rc::new(CoverageService::default()),
        }
    }
}

impl Default for CheckCoveragePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterPlugin for CheckCoveragePlugin {
    fn setup(&self, context: &mut ConverterContext) {
        context.register_service(self.service.clone());
    }

    fn traverse(&self, node: NodeRef<'_>, _context: &ConverterContext) {
        self.service.observe(node);
    }

    fn generate(
        &self,
        tree: &SyntaxTree,
        context: &ConverterContext,
    ) -> Result<Vec<GeneratedArtifact>, GenerateError> {
        let verbose = context
            .lookup_service::<ConfigurationService>()
            .is_some_and(|service| service.configuration.verbose);

        if verbose {
            for id in self.service.uncovered(tree) {
                let node = tree.node(id);
                debug!(
                    kind = ?node.kind(),
                    unit = node.unit_name(),
                    "node was neither rendered nor marked as handled"
                );
            }
        }

        Ok(Vec::new())
    }
}

/// Convenience: cover `node` when the service is present.
pub fn cover(context: &ConverterContext, node: NodeRef<'_>) {
    if let Some(service) = context.lookup_service::<CoverageService>() {
        service.cover(node);
    }
}

/// Convenience: deep-cover `node` when the service is present.
pub fn deep_cover(context: &ConverterContext, node: NodeRef<'_>) {
    if let Some(service) = context.lookup_service::<CoverageService>() {
        service.deep_cover(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{NodeKind, TreeBuilder};

    #[test]
    fn deep_cover_extends_to_descendants() {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let parameter = builder.node(NodeKind::Parameter, root);
        let pattern = builder.node(NodeKind::BindingPattern, parameter);
        let inner = builder.node(NodeKind::Identifier, pattern);
        let tree = builder.finish();

        let service = CoverageService::default();
        for node in tree.node(root).descendants() {
            service.observe(node);
        }
        service.cover(tree.node(root));
        service.cover(tree.node(parameter));
        service.deep_cover(tree.node(pattern));

        assert!(service.is_covered(tree.node(inner)));
        assert!(service.uncovered(&tree).is_empty());
    }

    #[test]
    fn unhandled_nodes_are_reported() {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let interface = builder.named_node(NodeKind::InterfaceDecl, root, "Path");
        let tree = builder.finish();

        let service = CoverageService::default();
        for node in tree.node(root).descendants() {
            service.observe(node);
        }
        service.cover(tree.node(root));

        let gaps = service.uncovered(&tree);
        assert!(gaps.contains(&interface));
    }
}
