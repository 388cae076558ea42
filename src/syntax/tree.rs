//! Arena tree storage and the read-only node handle.

use super::node::{NodeData, NodeFlags, NodeId, NodeKind, SourceUnitId};

/// One parsed input file.
#[derive(Clone, Debug)]
pub struct SourceUnit {
    /// Stable identity string, conventionally the file path.
    pub name: String,
}

/// Read-only declaration tree produced by the front end.
///
/// Arena storage is the single source of truth: nodes refer to each other by
/// [`NodeId`], and parent links exist for upward queries only. The converter
/// never mutates the tree.
#[derive(Debug, Default)]
pub struct SyntaxTree {
    pub(crate) nodes: Vec<NodeData>,
    pub(crate) units: Vec<SourceUnit>,
    pub(crate) roots: Vec<NodeId>,
}

impl SyntaxTree {
    /// All source units, in registration order.
    pub fn units(&self) -> impl Iterator<Item = SourceUnitId> + '_ {
        (0..self.units.len() as u32).map(SourceUnitId)
    }

    pub fn unit_name(&self, unit: SourceUnitId) -> &str {
        &self.units[unit.0 as usize].name
    }

    /// Root `SourceFile` node of a unit.
    pub fn root(&self, unit: SourceUnitId) -> NodeRef<'_> {
        self.node(self.roots[unit.0 as usize])
    }

    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        debug_assert!(id.index() < self.nodes.len());
        NodeRef { tree: self, id }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }
}

/// Copyable accessor handle over one node.
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

impl<'t> NodeRef<'t> {
    pub fn id(self) -> NodeId {
        self.id
    }

    pub fn tree(self) -> &'t SyntaxTree {
        self.tree
    }

    pub fn kind(self) -> NodeKind {
        self.tree.data(self.id).kind
    }

    pub fn parent(self) -> Option<NodeRef<'t>> {
        self.tree.data(self.id).parent.map(|id| self.tree.node(id))
    }

    pub fn children(self) -> impl Iterator<Item = NodeRef<'t>> {
        let tree = self.tree;
        tree.data(self.id).children.iter().map(move |&id| tree.node(id))
    }

    /// Name identifier node, when the node is named.
    pub fn name(self) -> Option<NodeRef<'t>> {
        self.tree.data(self.id).name.map(|id| self.tree.node(id))
    }

    /// Text of the name identifier, when present and an identifier.
    pub fn name_text(self) -> Option<&'t str> {
        let name = self.name()?;
        if name.kind() == NodeKind::Identifier {
            name.text()
        } else {
            None
        }
    }

    /// Declared type annotation.
    pub fn ty(self) -> Option<NodeRef<'t>> {
        self.tree.data(self.id).ty.map(|id| self.tree.node(id))
    }

    pub fn text(self) -> Option<&'t str> {
        self.tree.data(self.id).text.as_deref()
    }

    pub fn docs(self) -> Option<&'t str> {
        self.tree.data(self.id).docs.as_deref()
    }

    pub fn flags(self) -> NodeFlags {
        self.tree.data(self.id).flags
    }

    pub fn unit(self) -> SourceUnitId {
        self.tree.data(self.id).unit
    }

    pub fn unit_name(self) -> &'t str {
        self.tree.unit_name(self.unit())
    }

    /// Pre-order traversal of this node and everything below it.
    pub fn descendants(self) -> impl Iterator<Item = NodeRef<'t>> {
        let tree = self.tree;
        let mut stack = vec![self.id];
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            let data = tree.data(id);
            stack.extend(data.children.iter().rev());
            Some(tree.node(id))
        })
    }

    /// Nearest ancestor matching `predicate`, excluding the node itself.
    pub fn ancestor(self, predicate: impl Fn(NodeRef<'t>) -> bool) -> Option<NodeRef<'t>> {
        let mut current = self.parent();
        while let Some(node) = current {
            if predicate(node) {
                return Some(node);
            }
            current = node.parent();
        }
        None
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeRef({:?}, {:?})", self.id, self.kind())
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.tree, other.tree)
    }
}

impl Eq for NodeRef<'_> {}
