//! Granularity dispatch: grouping source units into structure items.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use super::StructureItem;
use super::bundle::create_bundle_info_item;
use super::namespace::{NamespaceInfo, create_namespace_info_item};
use super::source_file::create_source_file_info_item;
use crate::config::{Configuration, Granularity, NamespaceStrategy};
use crate::syntax::{NodeId, NodeKind, NodeRef, SyntaxTree};

/// Plan the output containers for the whole input set.
///
/// Pure over `(tree, configuration, namespace_info)`: running it twice yields
/// identical items in identical order.
pub fn prepare_structure(
    tree: &SyntaxTree,
    configuration: &Configuration,
    namespace_info: &[NamespaceInfo],
) -> Vec<StructureItem> {
    let strategies: FxHashMap<NodeId, NamespaceStrategy> = namespace_info
        .iter()
        .map(|info| (info.node, info.strategy))
        .collect();

    let items = match configuration.granularity {
        Granularity::Bundle => {
            let packages: Vec<Vec<String>> = tree
                .units()
                .map(|unit| create_source_file_info_item(tree.unit_name(unit), configuration).package)
                .collect();

            let mut item = create_bundle_info_item(&packages, configuration);
            for unit in tree.units() {
                item.statements
                    .extend(tree.root(unit).children().map(|child| child.id()));
            }
            vec![item]
        }
        Granularity::File => per_file_items(tree, configuration, &strategies),
        Granularity::TopLevel => {
            let mut exploded = Vec::new();
            for item in per_file_items(tree, configuration, &strategies) {
                for &statement in &item.statements {
                    let mut single = item.clone();
                    if let Some(name) = tree.node(statement).name_text() {
                        single.file_name = format!("{name}.kt");
                    }
                    single.statements = vec![statement];
                    exploded.push(single);
                }
            }
            exploded
        }
    };

    normalize_structure(items, |item, other| {
        item.statements.extend(other.statements);
    })
}

/// One item per source unit, with package-strategy namespaces split into
/// their own containers.
fn per_file_items(
    tree: &SyntaxTree,
    configuration: &Configuration,
    strategies: &FxHashMap<NodeId, NamespaceStrategy>,
) -> Vec<StructureItem> {
    let mut items = Vec::new();

    for unit in tree.units() {
        let mut item = create_source_file_info_item(tree.unit_name(unit), configuration);
        let mut namespace_items = Vec::new();

        for statement in tree.root(unit).children() {
            if is_package_namespace(statement, strategies) {
                let mut namespace_item = create_namespace_info_item(statement, configuration);
                namespace_item.statements = statement
                    .children()
                    .filter(|child| child.kind().is_declaration())
                    .map(|child| child.id())
                    .collect();
                namespace_items.push(namespace_item);
            } else {
                item.statements.push(statement.id());
            }
        }

        if !item.statements.is_empty() || namespace_items.is_empty() {
            items.push(item);
        }
        items.extend(namespace_items);
    }

    items
}

fn is_package_namespace(
    node: NodeRef<'_>,
    strategies: &FxHashMap<NodeId, NamespaceStrategy>,
) -> bool {
    node.kind() == NodeKind::ModuleDecl
        && strategies.get(&node.id()) == Some(&NamespaceStrategy::Package)
}

/// Merge items resolving to the same package + file name, preserving
/// discovery order.
pub fn normalize_structure(
    items: Vec<StructureItem>,
    merge: impl Fn(&mut StructureItem, StructureItem),
) -> Vec<StructureItem> {
    let mut merged: IndexMap<(Vec<String>, String), StructureItem> = IndexMap::new();

    for item in items {
        let key = (item.package.clone(), item.file_name.clone());
        match merged.get_mut(&key) {
            Some(existing) => merge(existing, item),
            None => {
                merged.insert(key, item);
            }
        }
    }

    merged.into_values().collect()
}
