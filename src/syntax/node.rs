//! Node identity, kinds, and modifier flags.

use smol_str::SmolStr;

/// Index of a node in the tree arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Stable identity of one parsed input file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceUnitId(pub(crate) u32);

/// Kind discriminator for syntax nodes.
///
/// Covers the declaration subset of TypeScript syntax the converter consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    SourceFile,

    // Declarations
    InterfaceDecl,
    FunctionDecl,
    VariableDecl,
    TypeAliasDecl,
    ModuleDecl,

    // Members and signature parts
    PropertySignature,
    MethodSignature,
    CallSignature,
    Parameter,
    TypeParameter,
    HeritageClause,

    // Terminals
    Identifier,
    BindingPattern,

    // Types
    UnionType,
    IntersectionType,
    TypeLiteral,
    MappedType,
    FunctionType,
    ArrayType,
    TypeReference,
    StringLiteralType,
    NumberLiteralType,
    StringKeyword,
    NumberKeyword,
    BooleanKeyword,
    VoidKeyword,
    AnyKeyword,
    UnknownKeyword,
    ObjectKeyword,
    NullKeyword,
    UndefinedKeyword,
    NeverKeyword,
}

impl NodeKind {
    /// Whether this kind denotes a type position.
    pub fn is_type(self) -> bool {
        matches!(
            self,
            NodeKind::UnionType
                | NodeKind::IntersectionType
                | NodeKind::TypeLiteral
                | NodeKind::MappedType
                | NodeKind::FunctionType
                | NodeKind::ArrayType
                | NodeKind::TypeReference
                | NodeKind::StringLiteralType
                | NodeKind::NumberLiteralType
                | NodeKind::StringKeyword
                | NodeKind::NumberKeyword
                | NodeKind::BooleanKeyword
                | NodeKind::VoidKeyword
                | NodeKind::AnyKeyword
                | NodeKind::UnknownKeyword
                | NodeKind::ObjectKeyword
                | NodeKind::NullKeyword
                | NodeKind::UndefinedKeyword
                | NodeKind::NeverKeyword
        )
    }

    /// Whether this kind denotes a top-level declaration.
    pub fn is_declaration(self) -> bool {
        matches!(
            self,
            NodeKind::InterfaceDecl
                | NodeKind::FunctionDecl
                | NodeKind::VariableDecl
                | NodeKind::TypeAliasDecl
                | NodeKind::ModuleDecl
        )
    }
}

/// Modifier flags carried by a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodeFlags(u8);

impl NodeFlags {
    /// `?` marker on parameters, properties, and methods.
    pub const OPTIONAL: NodeFlags = NodeFlags(1);
    /// `readonly` modifier.
    pub const READONLY: NodeFlags = NodeFlags(1 << 1);
    /// `...` rest marker on parameters.
    pub const REST: NodeFlags = NodeFlags(1 << 2);
    /// `const` on variable declarations.
    pub const CONST: NodeFlags = NodeFlags(1 << 3);

    pub fn contains(self, other: NodeFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for NodeFlags {
    type Output = NodeFlags;

    fn bitor(self, rhs: NodeFlags) -> NodeFlags {
        NodeFlags(self.0 | rhs.0)
    }
}

/// Arena payload for one node. Crate-internal; consumers use [`super::NodeRef`].
#[derive(Clone, Debug)]
pub(crate) struct NodeData {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Name identifier child, when the node is named.
    pub name: Option<NodeId>,
    /// Declared type annotation (parameter type, property type, alias RHS,
    /// function return type, type-parameter constraint).
    pub ty: Option<NodeId>,
    /// Identifier or literal text.
    pub text: Option<SmolStr>,
    /// Leading developer-authored comment block, verbatim.
    pub docs: Option<String>,
    pub flags: NodeFlags,
    pub unit: SourceUnitId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_combine_and_query() {
        let flags = NodeFlags::OPTIONAL | NodeFlags::REST;
        assert!(flags.contains(NodeFlags::OPTIONAL));
        assert!(flags.contains(NodeFlags::REST));
        assert!(!flags.contains(NodeFlags::READONLY));
        assert!(NodeFlags::default().is_empty());
    }
}
