//! Declaration-merging bookkeeping.
//!
//! TypeScript merges same-named interface declarations; Kotlin does not. The
//! traversal pass groups interfaces by name within a source unit, and the
//! interface converter renders the first occurrence with the merged member
//! list while later occurrences render empty.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::converter::context::ConverterContext;
use crate::converter::plugin::ConverterPlugin;
use crate::syntax::{NodeId, NodeKind, NodeRef, SourceUnitId};

#[derive(Default)]
pub struct DeclarationMergingService {
    groups: RefCell<IndexMap<(SourceUnitId, SmolStr), Vec<NodeId>>>,
}

impl DeclarationMergingService {
    fn record(&self, node: NodeRef<'_>) {
        let Some(name) = node.name_text() else {
            return;
        };
        self.groups
            .borrow_mut()
            .entry((node.unit(), SmolStr::new(name)))
            .or_default()
            .push(node.id());
    }

    /// Whether this declaration is the first of its merge group. Unrecorded
    /// declarations count as primary.
    pub fn is_primary(&self, node: NodeRef<'_>) -> bool {
        let Some(name) = node.name_text() else {
            return true;
        };
        self.groups
            .borrow()
            .get(&(node.unit(), SmolStr::new(name)))
            .is_none_or(|group| group.first() == Some(&node.id()))
    }

    /// Member nodes of the whole merge group, in document order.
    pub fn merged_members(&self, node: NodeRef<'_>) -> Vec<NodeId> {
        let Some(name) = node.name_text() else {
            return own_members(node);
        };
        let groups = self.groups.borrow();
        let Some(group) = groups.get(&(node.unit(), SmolStr::new(name))) else {
            return own_members(node);
        };

        let tree = node.tree();
        group
            .iter()
            .flat_map(|&id| own_members(tree.node(id)))
            .collect()
    }
}

fn own_members(node: NodeRef<'_>) -> Vec<NodeId> {
    node.children()
        .filter(|child| {
            matches!(
                child.kind(),
                NodeKind::PropertySignature | NodeKind::MethodSignature | NodeKind::CallSignature
            )
        })
        .map(|child| child.id())
        .collect()
}

pub struct DeclarationMergingPlugin {
    service: Rc<DeclarationMergingService>,
}

impl DeclarationMergingPlugin {
    pub fn new() -> Self {
        Self {
            service: Rc::new(DeclarationMergingService::default()),
        }
    }
}

impl Default for DeclarationMergingPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterPlugin for DeclarationMergingPlugin {
    fn setup(&self, context: &mut ConverterContext) {
        context.register_service(self.service.clone());
    }

    fn traverse(&self, node: NodeRef<'_>, _context: &ConverterContext) {
        if node.kind() == NodeKind::InterfaceDecl {
            self.service.record(node);
        }
    }
}
