//! Type-parameter propagation for hoisted declarations.
//!
//! An anonymous construct may reference type parameters declared by an
//! enclosing declaration; the hoisted standalone declaration must re-declare
//! them, and the call-site reference must pass them through.

use rustc_hash::FxHashSet;

use super::render::Render;
use crate::syntax::{NodeKind, NodeRef};

/// Declaration-side and reference-side type-parameter text.
#[derive(Debug, Default)]
pub struct TypeParametersText {
    /// `T : Bound, U` — goes inside the hoisted declaration's angle brackets.
    pub declaration: String,
    /// `T, U` — goes inside the call-site reference's angle brackets.
    pub reference: String,
}

/// Collect the enclosing type parameters that `node` actually references.
pub fn extract_type_parameters(node: NodeRef<'_>, render: &Render<'_>) -> TypeParametersText {
    // Referenced names below the anonymous construct.
    let referenced: FxHashSet<&str> = node
        .descendants()
        .filter(|descendant| descendant.kind() == NodeKind::TypeReference)
        .filter_map(|reference| reference.name_text())
        .collect();

    // Enclosing declarations, outermost first, each contributing its type
    // parameters in declaration order.
    let mut ancestors = Vec::new();
    let mut current = node.parent();
    while let Some(ancestor) = current {
        ancestors.push(ancestor);
        current = ancestor.parent();
    }
    ancestors.reverse();

    let mut declarations = Vec::new();
    let mut references = Vec::new();

    for ancestor in ancestors {
        for parameter in ancestor
            .children()
            .filter(|child| child.kind() == NodeKind::TypeParameter)
        {
            let Some(name) = parameter.name_text() else {
                continue;
            };
            if referenced.contains(name) {
                declarations.push(render.render(parameter));
                references.push(name.to_string());
            }
        }
    }

    TypeParametersText {
        declaration: declarations.join(", "),
        reference: references.join(", "),
    }
}
