//! The unit of converter behavior.

use super::context::ConverterContext;
use super::generated::GeneratedArtifact;
use super::render::Render;
use crate::error::GenerateError;
use crate::syntax::{NodeRef, SyntaxTree};

/// One pass over the syntax tree, polymorphic over four capabilities.
///
/// A plugin may implement any subset; the defaults are no-ops. Plugin order is
/// significant: the first plugin returning `Some` from [`render`] wins, and
/// comment/annotation plugins must run before structural ones.
///
/// Phases execute strictly in sequence for the whole plugin list:
/// setup → traverse → render → generate.
///
/// [`render`]: ConverterPlugin::render
pub trait ConverterPlugin {
    /// Register services and inspect the configuration. Runs once, before
    /// traversal, single-threaded.
    fn setup(&self, _context: &mut ConverterContext) {}

    /// Observe one node during the single traversal pass.
    fn traverse(&self, _node: NodeRef<'_>, _context: &ConverterContext) {}

    /// Produce text for a node, or decline with `None` so the chain falls
    /// through. `next` re-enters the full chain for child nodes.
    fn render(
        &self,
        _node: NodeRef<'_>,
        _context: &ConverterContext,
        _next: &Render<'_>,
    ) -> Option<String> {
        None
    }

    /// Emit auxiliary artifacts after rendering.
    fn generate(
        &self,
        _tree: &SyntaxTree,
        _context: &ConverterContext,
    ) -> Result<Vec<GeneratedArtifact>, GenerateError> {
        Ok(Vec::new())
    }
}

/// Render-only plugin body.
pub type SimpleRenderFn =
    dyn Fn(NodeRef<'_>, &ConverterContext, &Render<'_>) -> Option<String>;

struct SimplePlugin {
    render: Box<SimpleRenderFn>,
}

impl ConverterPlugin for SimplePlugin {
    fn render(
        &self,
        node: NodeRef<'_>,
        context: &ConverterContext,
        next: &Render<'_>,
    ) -> Option<String> {
        (self.render)(node, context, next)
    }
}

/// Wrap a render closure into a full plugin with no-op remaining phases.
pub fn create_simple_plugin(
    render: impl Fn(NodeRef<'_>, &ConverterContext, &Render<'_>) -> Option<String> + 'static,
) -> Box<dyn ConverterPlugin> {
    Box::new(SimplePlugin {
        render: Box::new(render),
    })
}
