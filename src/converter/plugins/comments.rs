//! Developer-authored comment preservation.
//!
//! Must sit at the front of the chain: it claims a node once to prepend its
//! leading comment block, then re-enters the chain, where the handled-set
//! makes it decline so the structural plugin gets its turn.

use std::cell::RefCell;

use rustc_hash::FxHashSet;

use crate::converter::context::ConverterContext;
use crate::converter::plugin::ConverterPlugin;
use crate::converter::render::Render;
use crate::syntax::{NodeId, NodeRef};

#[derive(Default)]
pub struct CommentsPlugin {
    handled: RefCell<FxHashSet<NodeId>>,
}

impl CommentsPlugin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConverterPlugin for CommentsPlugin {
    fn render(
        &self,
        node: NodeRef<'_>,
        _context: &ConverterContext,
        next: &Render<'_>,
    ) -> Option<String> {
        let docs = node.docs()?;
        if !self.handled.borrow_mut().insert(node.id()) {
            return None;
        }
        Some(format!("{docs}\n{}", next.render(node)))
    }
}
