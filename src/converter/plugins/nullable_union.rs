//! Fallback rendering for unions and intersections that survive expansion.
//!
//! A nullable union with a single concrete arm reduces to `T?`. Anything else
//! has no Kotlin counterpart and degrades to `Any` with the original arms
//! preserved in a comment, so the loss is visible at the use site.

use super::coverage::{cover, deep_cover};
use crate::converter::context::ConverterContext;
use crate::converter::plugin::ConverterPlugin;
use crate::converter::render::{Render, render_nullable};
use crate::syntax::types::{flatten_union, is_nullable_type, is_nullable_union};
use crate::syntax::{NodeKind, NodeRef};

pub struct NullableUnionPlugin;

impl ConverterPlugin for NullableUnionPlugin {
    fn render(
        &self,
        node: NodeRef<'_>,
        context: &ConverterContext,
        next: &Render<'_>,
    ) -> Option<String> {
        match node.kind() {
            NodeKind::UnionType => {
                cover(context, node);

                let nullable = is_nullable_union(node);
                let mut concrete = Vec::new();
                for arm in flatten_union(node) {
                    if is_nullable_type(arm) {
                        deep_cover(context, arm);
                    } else {
                        concrete.push(arm);
                    }
                }

                if let [arm] = concrete[..] {
                    return Some(render_nullable(Some(arm), nullable, next));
                }

                let arms = concrete
                    .iter()
                    .map(|arm| next.render(*arm))
                    .collect::<Vec<_>>()
                    .join(" | ");
                if nullable {
                    Some(format!("Any? /* {arms} */"))
                } else {
                    Some(format!("Any /* {arms} */"))
                }
            }
            NodeKind::IntersectionType => {
                cover(context, node);

                let arms = node
                    .children()
                    .map(|arm| next.render(arm))
                    .collect::<Vec<_>>()
                    .join(" & ");
                Some(format!("Any /* {arms} */"))
            }
            _ => None,
        }
    }
}
