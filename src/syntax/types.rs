//! Shallow type classification supplied at the front-end boundary.
//!
//! The converter is syntactic: it needs to know union shape, nullable-arm
//! membership, and string-literal-union membership, but performs no inference.

use super::node::NodeKind;
use super::tree::NodeRef;

/// Flatten a (possibly nested) union into its arms, in declaration order.
///
/// Non-union nodes flatten to themselves.
pub fn flatten_union<'t>(ty: NodeRef<'t>) -> Vec<NodeRef<'t>> {
    let mut arms = Vec::new();
    collect_arms(ty, &mut arms);
    arms
}

fn collect_arms<'t>(ty: NodeRef<'t>, arms: &mut Vec<NodeRef<'t>>) {
    if ty.kind() == NodeKind::UnionType {
        for arm in ty.children() {
            collect_arms(arm, arms);
        }
    } else {
        arms.push(ty);
    }
}

/// Whether a type is `null` or `undefined`.
pub fn is_nullable_type(ty: NodeRef<'_>) -> bool {
    matches!(ty.kind(), NodeKind::NullKeyword | NodeKind::UndefinedKeyword)
}

/// Whether a union carries at least one nullable arm.
pub fn is_nullable_union(ty: NodeRef<'_>) -> bool {
    ty.kind() == NodeKind::UnionType && flatten_union(ty).iter().any(|arm| is_nullable_type(*arm))
}

/// Whether a union is a string-literal union, ignoring nullable arms.
///
/// String-literal unions map to a target-native enumeration and are excluded
/// from overload expansion.
pub fn is_string_union(ty: NodeRef<'_>) -> bool {
    if ty.kind() != NodeKind::UnionType {
        return false;
    }
    let arms = flatten_union(ty);
    let concrete: Vec<_> = arms.iter().filter(|arm| !is_nullable_type(**arm)).collect();
    !concrete.is_empty() && concrete.iter().all(|arm| arm.kind() == NodeKind::StringLiteralType)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{NodeId, NodeKind, SyntaxTree, TreeBuilder};

    fn union_of(kinds: &[NodeKind]) -> (SyntaxTree, NodeId) {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let alias = builder.named_node(NodeKind::TypeAliasDecl, root, "T");
        let union = builder.node(NodeKind::UnionType, alias);
        for &kind in kinds {
            let arm = builder.node(kind, union);
            if kind == NodeKind::StringLiteralType {
                builder.set_text(arm, "a");
            }
        }
        (builder.finish(), union)
    }

    #[test]
    fn flattens_nested_unions() {
        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("a.d.ts");
        let alias = builder.named_node(NodeKind::TypeAliasDecl, root, "T");
        let outer = builder.node(NodeKind::UnionType, alias);
        builder.node(NodeKind::StringKeyword, outer);
        let inner = builder.node(NodeKind::UnionType, outer);
        builder.node(NodeKind::NumberKeyword, inner);
        builder.node(NodeKind::BooleanKeyword, inner);
        let tree = builder.finish();

        let arms: Vec<_> = flatten_union(tree.node(outer)).iter().map(|a| a.kind()).collect();
        assert_eq!(
            arms,
            vec![NodeKind::StringKeyword, NodeKind::NumberKeyword, NodeKind::BooleanKeyword]
        );
    }

    #[test]
    fn detects_nullable_unions() {
        let (tree, union) = union_of(&[NodeKind::StringKeyword, NodeKind::UndefinedKeyword]);
        assert!(is_nullable_union(tree.node(union)));

        let (tree, union) = union_of(&[NodeKind::StringKeyword, NodeKind::NumberKeyword]);
        assert!(!is_nullable_union(tree.node(union)));
    }

    #[test]
    fn string_union_ignores_nullable_arms() {
        let (tree, union) = union_of(&[
            NodeKind::StringLiteralType,
            NodeKind::StringLiteralType,
            NodeKind::NullKeyword,
        ]);
        assert!(is_string_union(tree.node(union)));

        let (tree, union) = union_of(&[NodeKind::StringLiteralType, NodeKind::NumberKeyword]);
        assert!(!is_string_union(tree.node(union)));

        let (tree, union) = union_of(&[NodeKind::NullKeyword]);
        assert!(!is_string_union(tree.node(union)));
    }
}
