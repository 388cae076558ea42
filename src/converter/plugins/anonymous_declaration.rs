//! Anonymous declaration hoisting.
//!
//! Lifts an inline anonymous type construct into a standalone named top-level
//! declaration and hands a reference string back to the call site. Accumulated
//! declarations are bucketed by originating source unit, owned exclusively by
//! this plugin for the run's lifetime, and emitted as derived files during the
//! generate phase.
//!
//! Structurally identical occurrences are NOT deduplicated: every anonymous
//! occurrence gets its own declaration.

use std::cell::{Cell, RefCell};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use super::configuration::require_configuration;
use crate::converter::context::ConverterContext;
use crate::converter::generated::GeneratedArtifact;
use crate::converter::name_resolver::NameResolver;
use crate::converter::plugin::ConverterPlugin;
use crate::converter::render::Render;
use crate::error::GenerateError;
use crate::structure::derived::{DerivedDeclaration, generate_derived_declarations};
use crate::syntax::{NodeId, NodeRef, SourceUnitId, SyntaxTree};

/// Result of an anonymous-declaration matcher.
pub enum AnonymousRendered {
    /// The matcher handled the node inline, nothing is hoisted.
    Inline(String),
    /// A declaration was synthesized; `reference` replaces the use site.
    Hoisted {
        name: String,
        declaration: String,
        reference: String,
    },
}

/// Matcher invoked for every node reaching this plugin in the chain. Returns
/// `None` for shapes it does not recognize. `resolve_name` runs the resolver
/// chain with the counter fallback.
pub type AnonymousDeclarationRender = Box<
    dyn Fn(
        NodeRef<'_>,
        &dyn Fn(NodeRef<'_>) -> String,
        &ConverterContext,
        &Render<'_>,
    ) -> Option<AnonymousRendered>,
>;

pub struct AnonymousDeclarationPlugin {
    name_resolvers: Vec<NameResolver>,
    render_anonymous: AnonymousDeclarationRender,
    /// Monotonic fallback counter, never recycled within a run.
    counter: Cell<u32>,
    /// Hoisted declarations bucketed by originating source unit, append-only.
    generated: RefCell<IndexMap<SourceUnitId, Vec<(String, String)>>>,
    /// Reference text by node, so re-rendering the same node (overload
    /// expansion renders a parameter type once per signature) neither mints a
    /// new name nor duplicates the declaration.
    references: RefCell<FxHashMap<NodeId, String>>,
}

impl AnonymousDeclarationPlugin {
    pub fn new(
        name_resolvers: Vec<NameResolver>,
        render_anonymous: AnonymousDeclarationRender,
    ) -> Self {
        Self {
            name_resolvers,
            render_anonymous,
            counter: Cell::new(0),
            generated: RefCell::new(IndexMap::new()),
            references: RefCell::new(FxHashMap::default()),
        }
    }

    fn resolve_name(&self, node: NodeRef<'_>, context: &ConverterContext) -> String {
        for resolver in &self.name_resolvers {
            if let Some(name) = resolver(node, context) {
                return name;
            }
        }

        let next = self.counter.get();
        self.counter.set(next + 1);
        format!("Temp{next}")
    }
}

impl ConverterPlugin for AnonymousDeclarationPlugin {
    fn render(
        &self,
        node: NodeRef<'_>,
        context: &ConverterContext,
        next: &Render<'_>,
    ) -> Option<String> {
        if let Some(reference) = self.references.borrow().get(&node.id()) {
            return Some(reference.clone());
        }

        let resolve_name = |node: NodeRef<'_>| self.resolve_name(node, context);

        match (self.render_anonymous)(node, &resolve_name, context, next)? {
            AnonymousRendered::Inline(text) => Some(text),
            AnonymousRendered::Hoisted {
                name,
                declaration,
                reference,
            } => {
                self.generated
                    .borrow_mut()
                    .entry(node.unit())
                    .or_default()
                    .push((name, declaration));
                self.references
                    .borrow_mut()
                    .insert(node.id(), reference.clone());
                Some(reference)
            }
        }
    }

    fn generate(
        &self,
        tree: &SyntaxTree,
        context: &ConverterContext,
    ) -> Result<Vec<GeneratedArtifact>, GenerateError> {
        let configuration = &require_configuration(context)?.configuration;

        let mut declarations = Vec::new();

        for (&unit, bucket) in self.generated.borrow().iter() {
            if configuration.granularity == crate::config::Granularity::TopLevel {
                for (name, declaration) in bucket {
                    declarations.push(DerivedDeclaration {
                        unit,
                        file_name: Some(format!("{name}.kt")),
                        body: declaration.clone(),
                    });
                }
            } else {
                let body = bucket
                    .iter()
                    .map(|(_, declaration)| declaration.as_str())
                    .collect::<Vec<_>>()
                    .join("\n\n");
                declarations.push(DerivedDeclaration {
                    unit,
                    file_name: None,
                    body,
                });
            }
        }

        let derived = generate_derived_declarations(tree, declarations, configuration)?;
        Ok(derived.into_iter().map(GeneratedArtifact::Derived).collect())
    }
}
