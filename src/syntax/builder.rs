//! Construction boundary for the front end.

use smol_str::SmolStr;

use super::node::{NodeData, NodeFlags, NodeId, NodeKind, SourceUnitId};
use super::tree::{SourceUnit, SyntaxTree};

/// Builder through which a front end (or a test) materializes a [`SyntaxTree`].
///
/// Nodes are appended in document order; children record their parent at
/// creation and the parent's child list is extended in call order, so the
/// resulting tree traverses the way the source reads.
#[derive(Default)]
pub struct TreeBuilder {
    nodes: Vec<NodeData>,
    units: Vec<SourceUnit>,
    roots: Vec<NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source unit and create its `SourceFile` root node.
    pub fn source_unit(&mut self, name: &str) -> (SourceUnitId, NodeId) {
        let unit = SourceUnitId(self.units.len() as u32);
        self.units.push(SourceUnit { name: name.to_string() });

        let root = self.push(NodeData {
            kind: NodeKind::SourceFile,
            parent: None,
            children: Vec::new(),
            name: None,
            ty: None,
            text: None,
            docs: None,
            flags: NodeFlags::default(),
            unit,
        });
        self.roots.push(root);

        (unit, root)
    }

    /// Append a child node. Source-unit identity is inherited from the parent.
    pub fn node(&mut self, kind: NodeKind, parent: NodeId) -> NodeId {
        let unit = self.nodes[parent.index()].unit;
        let id = self.push(NodeData {
            kind,
            parent: Some(parent),
            children: Vec::new(),
            name: None,
            ty: None,
            text: None,
            docs: None,
            flags: NodeFlags::default(),
            unit,
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Append a named child node: the name becomes an `Identifier` child.
    pub fn named_node(&mut self, kind: NodeKind, parent: NodeId, name: &str) -> NodeId {
        let id = self.node(kind, parent);
        self.set_name(id, name);
        id
    }

    /// Attach a name identifier to an existing node.
    pub fn set_name(&mut self, node: NodeId, name: &str) {
        let ident = self.node(NodeKind::Identifier, node);
        self.nodes[ident.index()].text = Some(SmolStr::new(name));
        self.nodes[node.index()].name = Some(ident);
    }

    /// Mark an existing child (e.g. a `BindingPattern`) as the node's name.
    pub fn set_name_node(&mut self, node: NodeId, name: NodeId) {
        debug_assert_eq!(self.nodes[name.index()].parent, Some(node));
        self.nodes[node.index()].name = Some(name);
    }

    /// Link the declared type annotation. `ty` must already be a child of `node`.
    pub fn set_type(&mut self, node: NodeId, ty: NodeId) {
        debug_assert_eq!(self.nodes[ty.index()].parent, Some(node));
        self.nodes[node.index()].ty = Some(ty);
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) {
        self.nodes[node.index()].text = Some(SmolStr::new(text));
    }

    pub fn set_docs(&mut self, node: NodeId, docs: &str) {
        self.nodes[node.index()].docs = Some(docs.to_string());
    }

    pub fn add_flags(&mut self, node: NodeId, flags: NodeFlags) {
        let current = self.nodes[node.index()].flags;
        self.nodes[node.index()].flags = current | flags;
    }

    pub fn finish(self) -> SyntaxTree {
        SyntaxTree {
            nodes: self.nodes,
            units: self.units,
            roots: self.roots,
        }
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(data);
        id
    }
}
